use fanhub::view::{DOCUMENT_TITLE, WelcomeView};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

/// The banner is the page's only container; nothing else is mounted.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=DOCUMENT_TITLE/>
        <WelcomeView/>
    }
}
