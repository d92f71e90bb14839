//! Server-side string rendering of the component tree.
//!
//! Rendering is a synchronous, in-memory operation: build a virtual DOM
//! seeded with the request location, run the initial rebuild, and flush it
//! to a markup string. The result is ephemeral and never cached.

use crate::app::{App, AppProps};
use crate::document;
use crate::mode::RenderMode;
use dioxus::prelude::*;

/// Renders the root component for `location` to a markup fragment.
#[must_use]
pub fn render_app(location: &str, mode: RenderMode) -> String {
    let props = AppProps { location: location.to_owned(), mode };
    let mut vdom = VirtualDom::new_with_props(App, props);
    vdom.rebuild_in_place();

    dioxus_ssr::render(&vdom)
}

/// Renders a complete HTML document for `location`.
#[must_use]
pub fn render_document(location: &str, mode: RenderMode) -> String {
    document::wrap(&render_app(location, mode))
}
