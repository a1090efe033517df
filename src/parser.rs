//! Free-text numeric parsing.

use crate::error::ParseError;
use crate::locale::Locale;
use crate::numeral::{self, Numeral};

/// Extract a numeric value from free-form text.
///
/// Locale punctuation is stripped first, then the longest numeral prefix
/// wins and trailing junk is ignored: `"36XL"` parses as 36, `"14 to 16"`
/// as 14. Text ending in `%` is divided by 100 with a digit-string shift,
/// so percent inputs keep all their significant digits.
pub fn parse(text: &str, locale: &str) -> Result<f64, ParseError> {
    let locale = Locale::resolve(locale);
    let cleaned = numeral::clean(text, &locale);
    let mut value = Numeral::parse_prefix(cleaned.trim_start()).ok_or_else(|| {
        ParseError::NoNumber {
            input: text.to_string(),
        }
    })?;

    if cleaned.ends_with('%') {
        value.shift_point_left(2);
    }

    value
        .to_decimal_string()
        .parse()
        .map_err(|_| ParseError::NoNumber {
            input: text.to_string(),
        })
}
