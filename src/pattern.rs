//! Pattern normalization.
//!
//! A pattern is `(-?)(prefix literals)(token span)(suffix literals)` where
//! the token span draws on `0 # , . -` and literals are everything else.
//! Normalization runs once per pattern and produces an immutable
//! [`NumberPattern`] that the formatter consumes.

use crate::error::PatternError;
use crate::locale::Locale;

/// A format pattern normalized into its structural parts.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberPattern {
    /// Pattern began with `-` before the literal prefix, as in `-$#.#`.
    pub negative_in_front: bool,
    /// Literal run before the token span.
    pub prefix: String,
    /// Literal run after the token span.
    pub suffix: String,
    /// Mandatory fraction digits (trailing `0` placeholders).
    pub required_decimals: usize,
    /// Total fraction placeholders; always >= `required_decimals`.
    pub optional_decimals: usize,
    /// Digits between group separators, `None` when the pattern has no `,`.
    pub group_size: Option<usize>,
    /// Resolved punctuation for the target locale.
    pub locale: Locale,
}

fn is_token(c: char) -> bool {
    matches!(c, '-' | '0' | '#' | ',' | '.')
}

fn is_placeholder(c: &char) -> bool {
    matches!(*c, '0' | '#')
}

/// Normalize a pattern for a locale code.
pub fn normalize(pattern: &str, locale: &str) -> Result<NumberPattern, PatternError> {
    NumberPattern::with_locale(pattern, Locale::resolve(locale))
}

impl NumberPattern {
    /// Normalize a pattern against an already-resolved locale.
    pub fn with_locale(pattern: &str, locale: Locale) -> Result<Self, PatternError> {
        let (negative_in_front, rest) = match pattern.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, pattern),
        };

        let prefix_len = rest.find(is_token).unwrap_or(rest.len());
        let (prefix, rest) = rest.split_at(prefix_len);
        let span_len = rest.find(|c| !is_token(c)).unwrap_or(rest.len());
        let (span, suffix) = rest.split_at(span_len);

        // Token characters may not reappear once the suffix has begun:
        // "## AND ##" embeds a literal inside the digit span.
        if let Some(offset) = suffix.find(is_token) {
            return Err(PatternError::InteriorLiteral {
                pattern: pattern.to_string(),
                position: pattern.len() - suffix.len() + offset,
            });
        }

        // `-` inside the span is shape-only; the counts look at `0 # , .`.
        let tokens: Vec<char> = span.chars().filter(|c| *c != '-').collect();
        let (integer_tokens, decimal_tokens) = match tokens.iter().rposition(|&c| c == '.') {
            Some(point) => (&tokens[..point], &tokens[point + 1..]),
            None => (&tokens[..], &[][..]),
        };

        let placeholders: Vec<char> = decimal_tokens
            .iter()
            .copied()
            .filter(is_placeholder)
            .collect();
        let optional_decimals = placeholders.len();
        let required_decimals = placeholders
            .iter()
            .rposition(|&c| c == '0')
            .map_or(0, |i| i + 1);

        let group_size = integer_tokens
            .iter()
            .rposition(|&c| c == ',')
            .map(|i| {
                integer_tokens[i + 1..]
                    .iter()
                    .copied()
                    .filter(is_placeholder)
                    .count()
            })
            .filter(|&size| size > 0);

        Ok(NumberPattern {
            negative_in_front,
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            required_decimals,
            optional_decimals,
            group_size,
            locale,
        })
    }
}
