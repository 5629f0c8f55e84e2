//! Navigation resolution and the locale guard
//!
//! [`LocaleRouter::navigate`] resolves an incoming navigation request into
//! its final, locale-qualified location: entry paths get a redirect plan,
//! terminals pass through, and the guard then runs against whatever is
//! actually entered. The redirect decision only computes the target; the
//! guard enacts the locale state change once the target is entered.
//!
//! Guards run strictly in navigation order (enforced by `&mut self` on the
//! single cooperative thread) and never block or cancel a navigation.

use crate::catalog::{self, PRODUCT_NAME};
use crate::redirect::{RedirectPlan, is_entry_path, language_selector, plan_redirect};
use crate::resolve::resolve_locale;
use crate::routes::{RouteLocation, match_route};
use crate::store::LocaleStore;
use gitcadence_core::Locale;
use tracing::debug;

/// What the guard decided for one navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationOutcome {
    /// Title the host should display for the target route
    pub document_title: String,
    /// Whether the locale state changed as a side effect of entering the
    /// target
    pub locale_changed: bool,
}

/// A fully resolved navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Redirect applied to reach the final location, if the request came in
    /// on an entry path
    pub redirect: Option<RedirectPlan>,
    /// Final location after any redirect
    pub location: RouteLocation,
    /// Guard outcome for the final location
    pub outcome: NavigationOutcome,
}

/// Resolves navigation requests and keeps locale state, the persisted
/// preference, and the document title synchronized.
pub struct LocaleRouter {
    store: LocaleStore,
    env_language: Option<String>,
}

impl LocaleRouter {
    /// Create a router over an initialized locale store.
    ///
    /// `env_language` is the detected environment/browser language, captured
    /// once; the environment does not change mid-session.
    pub fn new(store: LocaleStore, env_language: Option<String>) -> Self {
        Self {
            store,
            env_language,
        }
    }

    /// The currently active locale
    pub fn locale(&self) -> Locale {
        self.store.current()
    }

    /// Explicit user-triggered locale switch (not tied to a navigation)
    pub fn switch_locale(&mut self, tag: &str) -> bool {
        self.store.switch(tag)
    }

    /// Resolve one incoming navigation request to its final location.
    ///
    /// Entry paths (`/`, `/result`) redirect exactly once to a
    /// locale-qualified terminal; terminals never redirect again. The guard
    /// runs against the final location either way.
    pub fn navigate(&mut self, path: &str, query: &[(String, String)]) -> Navigation {
        let redirect = if is_entry_path(path) {
            let resolved = resolve_locale(
                language_selector(query),
                self.store.persisted().as_deref(),
                self.env_language.as_deref(),
            );
            plan_redirect(path, query, resolved)
        } else {
            None
        };

        let location = match &redirect {
            Some(plan) => {
                debug!("Redirecting {} -> {}", path, plan.target_path);
                RouteLocation {
                    path: plan.target_path.clone(),
                    query: plan.query.clone(),
                }
            }
            None => RouteLocation {
                path: path.to_string(),
                query: query.to_vec(),
            },
        };

        let outcome = self.before_each(&location);

        Navigation {
            redirect,
            location,
            outcome,
        }
    }

    /// Navigation guard, run before every navigation is considered resolved.
    ///
    /// Entering a route that declares a locale different from the current
    /// state updates the state and the persisted preference. The visible
    /// document title comes from the target's title key resolved through the
    /// active locale's string table, suffixed with the product name; routes
    /// without a title key get the bare product name. The guard always
    /// completes the navigation.
    pub fn before_each(&mut self, to: &RouteLocation) -> NavigationOutcome {
        let route = match_route(&to.path);

        let mut locale_changed = false;
        if let Some(route) = route {
            if route.locale != self.store.current() {
                self.store.set(route.locale);
                locale_changed = true;
            }
        }

        let document_title = route
            .and_then(|route| catalog::lookup(self.store.current(), route.title_key))
            .map(|title| format!("{} | {}", title, PRODUCT_NAME))
            .unwrap_or_else(|| PRODUCT_NAME.to_string());

        NavigationOutcome {
            document_title,
            locale_changed,
        }
    }
}
