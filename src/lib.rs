//! numfmt - locale-aware number formatting and parsing
//!
//! Formats numeric text with pattern strings (`"#,###.00"`) under
//! two-letter locale codes, and parses locale-punctuated text back into
//! numbers. All digit handling is string-based, so values carrying more
//! significant digits than an `f64` survive formatting intact.

pub mod error;
pub mod locale;
pub mod options;
pub mod pattern;

mod cache;
mod formatter;
mod numeral;
pub mod parser;

pub use error::{FormatError, ParseError, PatternError};
pub use locale::Locale;
pub use options::{FormatOptions, DEFAULT_LOCALE, DEFAULT_PATTERN};
pub use parser::parse;
pub use pattern::{normalize, NumberPattern};

/// Format a numeric-valued string using the pattern and locale in `opts`.
///
/// Normalized patterns are cached, so repeated calls with the same options
/// reuse one specification. Callers formatting a batch can also call
/// [`normalize`] once and use [`NumberPattern::format`] directly.
pub fn format(value_text: &str, opts: &FormatOptions) -> Result<String, FormatError> {
    let spec = cache::get_or_normalize(&opts.pattern, &opts.locale)?;
    spec.format(value_text, opts)
}

/// Format with the default `"#,###.00"` pattern and `"us"` locale.
pub fn format_default(value_text: &str) -> Result<String, FormatError> {
    format(value_text, &FormatOptions::default())
}
