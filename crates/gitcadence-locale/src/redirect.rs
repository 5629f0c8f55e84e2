//! Redirect planning for entry paths
//!
//! Legacy, locale-unqualified paths (`/` and `/result`) always rewrite to a
//! locale-qualified terminal; locale-qualified paths never redirect again.
//! Planning is a pure function of (path, query, resolved locale), separate
//! from the act of performing the redirect, so it can be tested without a
//! navigation host.

use gitcadence_core::Locale;

/// Reserved query parameter carrying the language selector on entry paths
pub const LANG_SELECTOR_PARAM: &str = "lang";

/// Query parameters as an ordered list of key/value pairs
pub type Query = Vec<(String, String)>;

/// A computed redirect target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectPlan {
    pub target_path: String,
    pub query: Query,
}

/// Whether a path is an unqualified entry that must redirect before
/// rendering
pub fn is_entry_path(path: &str) -> bool {
    matches!(path, "/" | "/result")
}

/// Plan the redirect for an incoming navigation, if one is needed.
///
/// Returns `None` for anything other than the two entry paths: the
/// locale-qualified targets are terminal. The language selector itself is
/// dropped from the forwarded query (the target path now carries the
/// language); every other parameter is preserved in its original order.
pub fn plan_redirect(
    path: &str,
    query: &[(String, String)],
    resolved: Locale,
) -> Option<RedirectPlan> {
    let target_path = match path {
        "/" => format!("/{}/", resolved.short()),
        "/result" => format!("/{}/result", resolved.short()),
        _ => return None,
    };

    Some(RedirectPlan {
        target_path,
        query: strip_selector(query),
    })
}

/// Extract the language selector value from a query, if present
pub fn language_selector(query: &[(String, String)]) -> Option<&str> {
    query
        .iter()
        .find(|(key, _)| key == LANG_SELECTOR_PARAM)
        .map(|(_, value)| value.as_str())
}

fn strip_selector(query: &[(String, String)]) -> Query {
    query
        .iter()
        .filter(|(key, _)| key != LANG_SELECTOR_PARAM)
        .cloned()
        .collect()
}
