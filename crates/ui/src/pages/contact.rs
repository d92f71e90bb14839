use crate::mode::RenderMode;
use dioxus::prelude::*;

/// Contact page.
#[component]
pub fn Contact(#[props(default)] mode: RenderMode) -> Element {
    rsx! {
        h1 { "Hello, {mode}!" }
        p { "This page is where contact details would live." }
    }
}
