//! Supported locale tags
//!
//! The UI ships in a fixed two-locale set: Simplified Chinese (primary
//! language family) and US English (the fixed default for everything else).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A supported UI locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// Simplified Chinese
    #[serde(rename = "zh-CN")]
    ZhCn,
    /// US English
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    /// Fixed default when no other source decides
    pub const DEFAULT: Locale = Locale::EnUs;

    /// All supported locales
    pub const ALL: [Locale; 2] = [Locale::ZhCn, Locale::EnUs];

    /// Full tag, as persisted and as used by string tables
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::ZhCn => "zh-CN",
            Locale::EnUs => "en-US",
        }
    }

    /// Short form used in route paths and the `lang` query selector
    pub fn short(&self) -> &'static str {
        match self {
            Locale::ZhCn => "zh",
            Locale::EnUs => "en",
        }
    }

    /// Parse a full tag or short form; anything else is unrecognized
    pub fn parse(s: &str) -> Option<Locale> {
        match s {
            "zh-CN" | "zh" => Some(Locale::ZhCn),
            "en-US" | "en" => Some(Locale::EnUs),
            _ => None,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_tags() {
        assert_eq!(Locale::parse("zh-CN"), Some(Locale::ZhCn));
        assert_eq!(Locale::parse("en-US"), Some(Locale::EnUs));
    }

    #[test]
    fn test_parse_short_forms() {
        assert_eq!(Locale::parse("zh"), Some(Locale::ZhCn));
        assert_eq!(Locale::parse("en"), Some(Locale::EnUs));
    }

    #[test]
    fn test_parse_unrecognized() {
        assert_eq!(Locale::parse("fr-FR"), None);
        assert_eq!(Locale::parse("EN"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn test_serde_round_trip_uses_full_tag() {
        let json = serde_json::to_string(&Locale::ZhCn).unwrap();
        assert_eq!(json, "\"zh-CN\"");
        let back: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Locale::ZhCn);
    }
}
