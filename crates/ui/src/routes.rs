use crate::mode::RenderMode;
use crate::pages::{About, Contact, Home};
use dioxus::prelude::*;

/// A single entry in the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Exact request path this route answers.
    pub path: &'static str,
    /// Link label shown in the navigation menu.
    pub label: &'static str,
    page: fn(RenderMode) -> Element,
}

impl Route {
    /// Renders the page component behind this route.
    pub fn render(&self, mode: RenderMode) -> Element {
        (self.page)(mode)
    }
}

/// The application route table.
///
/// Declarative data, not logic: paths are unique and order is match
/// priority (first match wins).
pub static ROUTES: &[Route] = &[
    Route { path: "/", label: "Home", page: home_page },
    Route { path: "/about", label: "About", page: about_page },
    Route { path: "/contact", label: "Contact", page: contact_page },
];

fn home_page(mode: RenderMode) -> Element {
    rsx! { Home { mode } }
}

fn about_page(mode: RenderMode) -> Element {
    rsx! { About { mode } }
}

fn contact_page(mode: RenderMode) -> Element {
    rsx! { Contact { mode } }
}

/// Resolves a request location against the route table.
///
/// The query string and fragment are ignored, and a single trailing slash
/// is tolerated (`/about/` matches `/about`). Returns `None` when no path
/// matches exactly.
#[must_use]
pub fn resolve(location: &str) -> Option<&'static Route> {
    let path = location.split(['?', '#']).next().unwrap_or(location);
    let path = if path.len() > 1 { path.trim_end_matches('/') } else { path };

    ROUTES.iter().find(|route| route.path == path)
}
