//! Locale resolution and navigation bookkeeping
//!
//! This crate decides which locale an incoming navigation lands in and keeps
//! three things synchronized on every navigation: the active locale state,
//! the persisted preference slot, and the visible document title.
//!
//! The decision layer is pure: [`resolve::resolve_locale`] and
//! [`redirect::plan_redirect`] are plain functions of their inputs, separate
//! from the [`router::LocaleRouter`] that enacts their results against a
//! [`store::LocaleStore`].

pub mod catalog;
pub mod redirect;
pub mod resolve;
pub mod router;
pub mod routes;
pub mod store;

pub use catalog::PRODUCT_NAME;
pub use redirect::{
    LANG_SELECTOR_PARAM, Query, RedirectPlan, is_entry_path, language_selector, plan_redirect,
};
pub use resolve::resolve_locale;
pub use router::{LocaleRouter, Navigation, NavigationOutcome};
pub use routes::{Page, RouteLocation, RouteMeta, match_route, path_for};
pub use store::{FilePreferences, LocalePreferences, LocaleStore, MemoryPreferences};
