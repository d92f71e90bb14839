use crate::mode::RenderMode;
use dioxus::prelude::*;

/// Landing page.
#[component]
pub fn Home(#[props(default)] mode: RenderMode) -> Element {
    rsx! {
        h1 { "Hello, {mode}!" }
        p { "This is the home page of a simple rendering demo." }
    }
}
