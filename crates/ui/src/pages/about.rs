use crate::mode::RenderMode;
use dioxus::prelude::*;

/// About page.
#[component]
pub fn About(#[props(default)] mode: RenderMode) -> Element {
    rsx! {
        h1 { "Hello, {mode}!" }
        p { "This page tells you a little about the demo application." }
    }
}
