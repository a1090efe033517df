//! The formatting pipeline.
//!
//! Works entirely on digit strings: canonicalize, scale for percent,
//! truncate/pad the fraction, round half up with a carry-propagating bump,
//! group, punctuate, and wrap with the pattern's literals.

use crate::error::FormatError;
use crate::numeral::{self, Numeral};
use crate::options::FormatOptions;
use crate::pattern::NumberPattern;

impl NumberPattern {
    /// Format a numeric-valued string with this pattern.
    ///
    /// The input may already carry this pattern's locale punctuation
    /// (grouping, decimal separator), so re-formatting previous output is
    /// safe. Only `decimal_separator_always_shown` is read from `opts`;
    /// the pattern and locale were fixed at normalize time.
    pub fn format(&self, value_text: &str, opts: &FormatOptions) -> Result<String, FormatError> {
        let cleaned = numeral::clean(value_text, &self.locale);
        let mut value =
            Numeral::parse_prefix(cleaned.trim_start()).ok_or_else(|| {
                FormatError::MalformedValue {
                    input: value_text.to_string(),
                }
            })?;

        if self.suffix == "%" {
            value.shift_point_right(2);
        }

        let digits = self
            .required_decimals
            .max(self.optional_decimals.min(value.fraction.len()));

        let mut integer = value.trimmed_integer().to_string();
        let mut fraction: String = value.fraction.chars().take(digits).collect();
        while fraction.len() < digits {
            fraction.push('0');
        }

        // Round half up on the first discarded fraction digit.
        let round_up = value
            .fraction
            .as_bytes()
            .get(digits)
            .is_some_and(|b| (b'5'..=b'9').contains(b));
        if round_up {
            bump(&mut integer, &mut fraction);
        }

        let mut body = match self.group_size {
            Some(size) => group(&integer, size, self.locale.group_separator),
            None => integer,
        };

        if !fraction.is_empty() {
            body.push(self.locale.decimal_separator);
            body.push_str(&fraction);
        } else if opts.decimal_separator_always_shown {
            body.push(self.locale.decimal_separator);
        }

        let mut out = String::new();
        if value.negative && self.negative_in_front && !self.prefix.is_empty() {
            out.push(self.locale.negative_sign);
            out.push_str(&self.prefix);
        } else {
            out.push_str(&self.prefix);
            if value.negative {
                out.push(self.locale.negative_sign);
            }
        }
        out.push_str(&body);
        out.push_str(&self.suffix);
        Ok(out)
    }
}

/// Add one unit in the last place of `fraction` (or of `integer` when no
/// fraction digits are displayed), extending the integer on full carry-out.
fn bump(integer: &mut String, fraction: &mut String) {
    if bump_digits(fraction) && bump_digits(integer) {
        integer.insert(0, '1');
    }
}

/// Increment the last digit of a run, carrying leftward. Returns true when
/// the carry falls off the front (also for an empty run).
fn bump_digits(digits: &mut String) -> bool {
    let mut chars: Vec<char> = digits.chars().collect();
    let mut carry = true;
    for c in chars.iter_mut().rev() {
        *c = next_digit(*c);
        if *c != '0' {
            carry = false;
            break;
        }
    }
    *digits = chars.into_iter().collect();
    carry
}

fn next_digit(c: char) -> char {
    match c {
        '0' => '1',
        '1' => '2',
        '2' => '3',
        '3' => '4',
        '4' => '5',
        '5' => '6',
        '6' => '7',
        '7' => '8',
        '8' => '9',
        _ => '0',
    }
}

/// Partition integer digits into `size` chunks counted from the right,
/// joined by `separator`; the leftmost chunk may be shorter.
fn group(digits: &str, size: usize, separator: char) -> String {
    if size == 0 || digits.len() <= size {
        return digits.to_string();
    }
    let chars: Vec<char> = digits.chars().collect();
    let mut out = String::new();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % size == 0 {
            out.push(separator);
        }
        out.push(*c);
    }
    out
}
