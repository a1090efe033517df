//! Locale table tests.

use numfmt::Locale;

#[test]
fn test_period_comma_family() {
    for code in [
        "us", "ae", "eg", "il", "jp", "sk", "th", "cn", "hk", "tw", "au", "ca", "gb", "in",
    ] {
        let locale = Locale::resolve(code);
        assert_eq!(locale.decimal_separator, '.', "{code}");
        assert_eq!(locale.group_separator, ',', "{code}");
    }
}

#[test]
fn test_comma_period_family() {
    for code in ["de", "vn", "es", "dk", "at", "gr", "br"] {
        let locale = Locale::resolve(code);
        assert_eq!(locale.decimal_separator, ',', "{code}");
        assert_eq!(locale.group_separator, '.', "{code}");
    }
}

#[test]
fn test_comma_space_family() {
    for code in ["cz", "fr", "fi", "ru", "se"] {
        let locale = Locale::resolve(code);
        assert_eq!(locale.decimal_separator, ',', "{code}");
        assert_eq!(locale.group_separator, ' ', "{code}");
    }
}

#[test]
fn test_apostrophe_family() {
    let locale = Locale::resolve("ch");
    assert_eq!(locale.decimal_separator, '.');
    assert_eq!(locale.group_separator, '\'');
}

#[test]
fn test_negative_sign_is_universal() {
    for code in ["us", "de", "fr", "ch", "zz"] {
        assert_eq!(Locale::resolve(code).negative_sign, '-');
    }
}

#[test]
fn test_default_matches_us() {
    assert_eq!(Locale::default(), Locale::resolve("us"));
}
