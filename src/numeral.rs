//! Digit-string numeral representation.
//!
//! Formatting and parsing never round-trip through `f64`: a value is held
//! as a sign plus integer/fraction digit runs, and every precision-touching
//! step (percent scaling, rounding) is a transform on those digit strings.

use crate::locale::Locale;

/// A numeral split into sign, integer digits, and fraction digits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Numeral {
    pub negative: bool,
    pub integer: String,
    pub fraction: String,
}

/// Strip locale punctuation: group separators are removed, the locale
/// decimal separator becomes `.` and the locale negative sign becomes `-`.
pub fn clean(text: &str, locale: &Locale) -> String {
    text.chars()
        .filter(|&c| c != locale.group_separator)
        .map(|c| {
            if c == locale.decimal_separator {
                '.'
            } else if c == locale.negative_sign {
                '-'
            } else {
                c
            }
        })
        .collect()
}

impl Numeral {
    /// Take the longest numeral prefix (`sign? digits (. digits)?`) of
    /// canonicalized text, ignoring anything after the first character that
    /// cannot extend it. Returns `None` when no digit is found.
    pub fn parse_prefix(text: &str) -> Option<Numeral> {
        let mut rest = text;
        let mut negative = false;
        if let Some(stripped) = rest.strip_prefix('-') {
            negative = true;
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix('+') {
            rest = stripped;
        }

        let integer: String = rest.chars().take_while(char::is_ascii_digit).collect();
        rest = &rest[integer.len()..];

        let mut fraction = String::new();
        if let Some(stripped) = rest.strip_prefix('.') {
            fraction = stripped.chars().take_while(char::is_ascii_digit).collect();
        }

        if integer.is_empty() && fraction.is_empty() {
            return None;
        }
        Some(Numeral {
            negative,
            integer,
            fraction,
        })
    }

    /// Multiply by 10^places by moving the decimal point right.
    pub fn shift_point_right(&mut self, places: usize) {
        for _ in 0..places {
            if self.fraction.is_empty() {
                self.integer.push('0');
            } else {
                self.integer.push(self.fraction.remove(0));
            }
        }
    }

    /// Divide by 10^places by moving the decimal point left.
    pub fn shift_point_left(&mut self, places: usize) {
        for _ in 0..places {
            match self.integer.pop() {
                Some(digit) => self.fraction.insert(0, digit),
                None => self.fraction.insert(0, '0'),
            }
        }
    }

    /// Integer digits without leading zeros; `"0"` when there are none.
    pub fn trimmed_integer(&self) -> &str {
        let trimmed = self.integer.trim_start_matches('0');
        if trimmed.is_empty() {
            "0"
        } else {
            trimmed
        }
    }

    /// Canonical `-?digits(.digits)?` rendering.
    pub fn to_decimal_string(&self) -> String {
        let mut out = String::new();
        if self.negative {
            out.push('-');
        }
        out.push_str(self.trimmed_integer());
        if !self.fraction.is_empty() {
            out.push('.');
            out.push_str(&self.fraction);
        }
        out
    }
}
