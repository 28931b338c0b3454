//! The Formula 1 Fan Hub welcome banner.

use leptos::prelude::*;

/// Banner heading. The racing car emoji carries a trailing emoji presentation selector.
pub const TITLE: &str = "\u{1F3CE}\u{FE0F} Welcome to the Formula 1 Fan Hub";
pub const SUBTITLE: &str = "Speed. Strategy. Adrenaline.";
pub const LINK_TEXT: &str = "Visit Official F1 Website";
pub const F1_URL: &str = "https://www.formula1.com";
/// Opens the link in a new browsing context
pub const LINK_TARGET: &str = "_blank";
/// Detaches the opened page from this one and strips the referrer
pub const LINK_REL: &str = "noopener noreferrer";

/// `<title>` of the page
pub const DOCUMENT_TITLE: &str = "Formula 1 Fan Hub";
/// Where the server exposes the embedded favicon
pub const FAVICON_PATH: &str = "/assets/favicon.svg";

/// Static banner: one container holding a heading block (title and subtitle)
/// followed by the outbound link. Takes no props and reads no signals.
#[component]
pub fn WelcomeView() -> impl IntoView {
    view! {
        <div class="welcome">
            <header class="welcome-header">
                <h1 class="welcome-title">{TITLE}</h1>
                <p class="welcome-subtitle">{SUBTITLE}</p>
            </header>
            <a class="welcome-link" href=F1_URL target=LINK_TARGET rel=LINK_REL>
                {LINK_TEXT}
            </a>
        </div>
    }
}
