//! Formatting options and configuration.

/// The pattern used when none is specified.
pub const DEFAULT_PATTERN: &str = "#,###.00";

/// The locale used when none is specified.
pub const DEFAULT_LOCALE: &str = "us";

/// Options for formatting values.
///
/// `pattern` and `locale` are consumed when the pattern is normalized;
/// `decimal_separator_always_shown` applies at format time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// The format pattern (`0`, `#`, `,`, `.`, `-` tokens plus literal
    /// prefix/suffix).
    pub pattern: String,
    /// Two-letter locale code selecting decimal/group punctuation.
    pub locale: String,
    /// Emit a bare decimal separator after whole numbers.
    pub decimal_separator_always_shown: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            pattern: DEFAULT_PATTERN.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            decimal_separator_always_shown: false,
        }
    }
}
