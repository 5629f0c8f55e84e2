//! Canonical route table
//!
//! One index and one result page per supported locale. Each route declares
//! the locale it carries and the title key the navigation guard resolves
//! through the string catalog.

use crate::redirect::Query;
use gitcadence_core::Locale;

/// Which page a route renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Index,
    Result,
}

/// A resolved navigation target: path plus forwarded query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLocation {
    pub path: String,
    pub query: Query,
}

/// Static metadata for one canonical route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMeta {
    pub name: &'static str,
    pub path: &'static str,
    pub page: Page,
    pub locale: Locale,
    pub title_key: &'static str,
}

/// All locale-qualified terminal routes
pub const ROUTES: [RouteMeta; 4] = [
    RouteMeta {
        name: "zh-index",
        path: "/zh/",
        page: Page::Index,
        locale: Locale::ZhCn,
        title_key: "intro.title",
    },
    RouteMeta {
        name: "zh-result",
        path: "/zh/result",
        page: Page::Result,
        locale: Locale::ZhCn,
        title_key: "nav.title",
    },
    RouteMeta {
        name: "en-index",
        path: "/en/",
        page: Page::Index,
        locale: Locale::EnUs,
        title_key: "intro.title",
    },
    RouteMeta {
        name: "en-result",
        path: "/en/result",
        page: Page::Result,
        locale: Locale::EnUs,
        title_key: "nav.title",
    },
];

/// Find the route a locale-qualified path lands on
pub fn match_route(path: &str) -> Option<&'static RouteMeta> {
    ROUTES.iter().find(|route| route.path == path)
}

/// Canonical path for a page in a locale
pub fn path_for(locale: Locale, page: Page) -> &'static str {
    ROUTES
        .iter()
        .find(|route| route.locale == locale && route.page == page)
        .map(|route| route.path)
        .expect("route table covers every (locale, page) pair")
}
