use crate::mode::RenderMode;
use crate::routes::{self, ROUTES};
use dioxus::prelude::*;

/// Props for the [`App`] root component.
#[derive(Props, Clone, PartialEq)]
pub struct AppProps {
    /// Request path used to select the page.
    pub location: String,
    /// Render mode threaded down to the selected page.
    #[props(default)]
    pub mode: RenderMode,
}

impl std::fmt::Debug for AppProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppProps")
            .field("location", &self.location)
            .field("mode", &self.mode)
            .finish()
    }
}

/// Root component: a navigation menu plus the page matching the current
/// location.
///
/// An unmatched location renders the navigation with an empty `main`
/// region; the document itself still resolves, mirroring a catch-all
/// route that always answers.
pub fn App(props: AppProps) -> Element {
    let page = routes::resolve(&props.location).map(|route| route.render(props.mode));

    rsx! {
        nav {
            ul {
                for route in ROUTES {
                    li { key: "{route.path}",
                        a { href: "{route.path}", {route.label} }
                    }
                }
            }
        }
        main { {page} }
    }
}
