//! Title string catalog
//!
//! Minimal per-locale table for the keys the navigation guard resolves. A
//! full translation table lives with the UI; here only the lookup semantics
//! matter: active locale first, default locale as fallback for missing keys.

use gitcadence_core::Locale;

/// Fixed product name used as the document title suffix
pub const PRODUCT_NAME: &str = "gitcadence";

const ZH_CN: &[(&str, &str)] = &[
    ("intro.title", "Git 提交时间分析"),
    ("nav.title", "分析结果"),
];

const EN_US: &[(&str, &str)] = &[
    ("intro.title", "Git Commit-Time Analysis"),
    ("nav.title", "Analysis Result"),
];

fn table(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::ZhCn => ZH_CN,
        Locale::EnUs => EN_US,
    }
}

/// Look up a key in a locale's table, falling back to the default locale
pub fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    find(table(locale), key).or_else(|| find(table(Locale::DEFAULT), key))
}

fn find(entries: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    entries
        .iter()
        .find(|(entry_key, _)| *entry_key == key)
        .map(|(_, value)| *value)
}
