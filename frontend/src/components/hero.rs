//! Hero section component

use leptos::*;

use crate::APP_TITLE;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"🛡️ " {APP_TITLE}</h1>
            <p class="subtitle">
                "Save your API token, pick an image and get a safety verdict "
                "with per-category confidence scores."
            </p>
        </div>
    }
}
