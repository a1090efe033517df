//! Integration tests for pattern normalization.
//!
//! The token grammar: an optional leading `-`, a literal prefix, a span of
//! `0 # , . -` tokens, and a literal suffix. Token characters after the
//! suffix has begun are an error.

use numfmt::{normalize, PatternError};

#[test]
fn test_default_pattern_fields() {
    let spec = normalize("#,###.00", "us").unwrap();
    assert_eq!(spec.required_decimals, 2);
    assert_eq!(spec.optional_decimals, 2);
    assert_eq!(spec.group_size, Some(3));
    assert!(!spec.negative_in_front);
    assert!(spec.prefix.is_empty() && spec.suffix.is_empty());
}

#[test]
fn test_literal_runs_are_captured() {
    let spec = normalize("BOO ## YAA", "us").unwrap();
    assert_eq!(spec.prefix, "BOO ");
    assert_eq!(spec.suffix, " YAA");

    let spec = normalize("-$#.#", "us").unwrap();
    assert!(spec.negative_in_front);
    assert_eq!(spec.prefix, "$");
}

#[test]
fn test_interior_literal_is_invalid() {
    let err = normalize("## AND ##", "us").unwrap_err();
    let PatternError::InteriorLiteral { pattern, position } = err;
    assert_eq!(pattern, "## AND ##");
    assert_eq!(position, 7);
}

#[test]
fn test_normalize_is_deterministic_and_idempotent() {
    for (pattern, locale) in [("#,###.00", "us"), ("-$#.#", "de"), ("##%", "fr")] {
        let a = normalize(pattern, locale).unwrap();
        let b = normalize(pattern, locale).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_optional_never_below_required() {
    for pattern in ["#.##", "#.00", "#.#0", "#.0#", "#", "#."] {
        let spec = normalize(pattern, "us").unwrap();
        assert!(spec.optional_decimals >= spec.required_decimals, "{pattern}");
    }
}

#[test]
fn test_unknown_locale_uses_default_punctuation() {
    let spec = normalize("#,###.00", "zz").unwrap();
    assert_eq!(spec.locale.decimal_separator, '.');
    assert_eq!(spec.locale.group_separator, ',');
}
