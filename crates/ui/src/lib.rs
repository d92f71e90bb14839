//! # UI Component Tree
//!
//! The component tree shared by the server renderer and a client bundle:
//! three pages, a declarative route table, and a root component that pairs
//! a navigation menu with the page matching the current location.
//!
//! The render-mode flag is threaded explicitly through the tree as a prop
//! and defaults to client-side rendering when a caller omits it.
//!
//! ## Example
//! ```rust
//! use isomer_ui::{RenderMode, render};
//!
//! let html = render::render_app("/about", RenderMode::Ssr);
//! assert!(html.contains("Hello, SSR!"));
//! ```

pub mod app;
pub mod document;
pub mod mode;
pub mod pages;
pub mod render;
pub mod routes;

pub use app::{App, AppProps};
pub use mode::RenderMode;
