//! Server-side rendering of the landing page.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use super::welcome::{DOCUMENT_TITLE, FAVICON_PATH, WelcomeView};

/// HTML document wrapping the banner (rendered server-side).
/// This is a plain function, NOT a #[component].
pub fn shell() -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{DOCUMENT_TITLE}</title>
                <link rel="icon" type="image/svg+xml" href=FAVICON_PATH/>
            </head>
            <body>
                <WelcomeView/>
            </body>
        </html>
    }
}

/// Banner markup only, without the document shell.
pub fn render_fragment() -> String {
    Owner::new().with(|| view! { <WelcomeView/> }.to_html())
}

/// Full HTML5 document served on `/`.
pub fn render_document() -> String {
    Owner::new().with(|| shell().to_html())
}
