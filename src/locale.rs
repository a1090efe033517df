//! Built-in locale punctuation data.
//!
//! Locales fall into four punctuation families; the only things that vary
//! between them are the decimal and group separators. The negative sign is
//! `-` everywhere.

/// Locale settings for number punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub decimal_separator: char,
    pub group_separator: char,
    pub negative_sign: char,
}

impl Default for Locale {
    fn default() -> Self {
        Self::period_comma()
    }
}

impl Locale {
    /// Decimal `.`, group `,` (us, gb, jp, ...). The fallback for unknown codes.
    pub const fn period_comma() -> Self {
        Locale {
            decimal_separator: '.',
            group_separator: ',',
            negative_sign: '-',
        }
    }

    /// Decimal `,`, group `.` (de, es, br, ...).
    pub const fn comma_period() -> Self {
        Locale {
            decimal_separator: ',',
            group_separator: '.',
            negative_sign: '-',
        }
    }

    /// Decimal `,`, group space (fr, ru, se, ...).
    pub const fn comma_space() -> Self {
        Locale {
            decimal_separator: ',',
            group_separator: ' ',
            negative_sign: '-',
        }
    }

    /// Decimal `.`, group `'` (ch).
    pub const fn period_apostrophe() -> Self {
        Locale {
            decimal_separator: '.',
            group_separator: '\'',
            negative_sign: '-',
        }
    }

    /// Resolve a two-letter locale code, case-insensitively.
    ///
    /// Unknown codes fall back to the default `.`/`,` punctuation.
    pub fn resolve(code: &str) -> Locale {
        match code.to_ascii_lowercase().as_str() {
            "us" | "ae" | "eg" | "il" | "jp" | "sk" | "th" | "cn" | "hk" | "tw" | "au" | "ca"
            | "gb" | "in" => Locale::period_comma(),
            "de" | "vn" | "es" | "dk" | "at" | "gr" | "br" => Locale::comma_period(),
            "cz" | "fr" | "fi" | "ru" | "se" => Locale::comma_space(),
            "ch" => Locale::period_apostrophe(),
            _ => Locale::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_families() {
        assert_eq!(Locale::resolve("us"), Locale::period_comma());
        assert_eq!(Locale::resolve("de"), Locale::comma_period());
        assert_eq!(Locale::resolve("fr"), Locale::comma_space());
        assert_eq!(Locale::resolve("ch"), Locale::period_apostrophe());
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(Locale::resolve("DE"), Locale::resolve("de"));
        assert_eq!(Locale::resolve("Fr"), Locale::resolve("fr"));
    }

    #[test]
    fn test_unknown_code_falls_back_to_default() {
        assert_eq!(Locale::resolve("xx"), Locale::default());
        assert_eq!(Locale::resolve(""), Locale::default());
    }

    #[test]
    fn test_separators_differ_in_every_family() {
        for code in ["us", "de", "fr", "ch", "xx"] {
            let locale = Locale::resolve(code);
            assert_ne!(locale.decimal_separator, locale.group_separator);
        }
    }
}
