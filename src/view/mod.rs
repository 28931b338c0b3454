//! The landing page view.
//!
//! `WelcomeView` is the only description of the banner. The browser mounts it
//! through the Leptos CSR frontend and the server renders it to HTML with
//! Leptos SSR (`backend` feature).

#[cfg(feature = "backend")]
mod render;
mod welcome;


#[cfg(feature = "backend")]
pub use render::{render_document, render_fragment, shell};
pub use welcome::*;
