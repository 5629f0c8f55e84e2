//! Locale resolution
//!
//! One decision procedure for every entry navigation, whichever source
//! supplies the hint. Precedence: explicit query selector, then the
//! persisted preference, then the environment language family. Resolution is
//! total: unrecognized input at any level falls through to the next rule and
//! terminates at the fixed default.

use gitcadence_core::Locale;

/// Language family whose prefix selects the primary locale
const PRIMARY_FAMILY_PREFIX: &str = "zh";

/// Resolve the locale for an entry navigation.
///
/// * `query_selector` - value of the `lang` query parameter, if present
/// * `persisted` - tag read from the preference slot, if set
/// * `env_language` - detected environment/browser language, if any
pub fn resolve_locale(
    query_selector: Option<&str>,
    persisted: Option<&str>,
    env_language: Option<&str>,
) -> Locale {
    if let Some(locale) = query_selector.and_then(Locale::parse) {
        return locale;
    }

    if let Some(locale) = persisted.and_then(Locale::parse) {
        return locale;
    }

    match env_language {
        Some(lang) if lang.starts_with(PRIMARY_FAMILY_PREFIX) => Locale::ZhCn,
        _ => Locale::DEFAULT,
    }
}
