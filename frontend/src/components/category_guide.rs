//! On-demand list of the categories the service detects.
//!
//! Loaded from `GET /moderate/categories`. Failures are shown inline and
//! never touch the upload flow.

use leptos::*;

use crate::services::{category_label, HttpTransport, ModerationTransport};
use crate::CategoryCatalog;

#[component]
pub fn CategoryGuide(
    transport: HttpTransport,
    /// Active bearer token
    token: ReadSignal<String>,
) -> impl IntoView {
    let (catalog, set_catalog) = create_signal(None::<CategoryCatalog>);
    let (is_loading, set_is_loading) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_load = move |_| {
        if is_loading.get_untracked() {
            return;
        }
        let transport = transport.clone();
        let token = token.get_untracked();

        spawn_local(async move {
            set_is_loading.set(true);
            set_error.set(None);

            match transport.categories(&token).await {
                Ok(loaded) => {
                    log::info!("📚 Loaded {} moderation categories", loaded.categories.len());
                    set_catalog.set(Some(loaded));
                }
                Err(e) => {
                    log::warn!("Could not load categories: {}", e);
                    set_error.set(Some(format!("Could not load categories: {}", e)));
                }
            }

            set_is_loading.set(false);
        });
    };

    view! {
        <div class="guide-section">
            <button
                class="btn btn-secondary"
                disabled=move || is_loading.get()
                on:click=on_load
            >
                {move || if is_loading.get() { "Loading..." } else { "Show detected categories" }}
            </button>

            <Show
                when=move || error.get().is_some()
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            {move || catalog.get().map(|loaded| {
                let rows = loaded
                    .categories
                    .iter()
                    .map(|(key, info)| {
                        let title = if info.name.is_empty() { category_label(key) } else { info.name.clone() };
                        view! {
                            <li class="guide-entry">
                                <span class="category-name">{title}</span>
                                " "
                                <span class=format!("severity {}", info.severity_class())>
                                    {info.severity.clone()}
                                </span>
                                <div class="guide-description">{info.description.clone()}</div>
                            </li>
                        }
                    })
                    .collect_view();

                let threshold = loaded
                    .confidence_threshold
                    .map(|t| format!("Flagged above {:.0}% confidence", t * 100.0));
                let formats = (!loaded.supported_formats.is_empty())
                    .then(|| format!("Formats: {}", loaded.supported_formats.join(", ")));
                let max_size = loaded
                    .max_file_size
                    .as_ref()
                    .map(|size| format!("Max size: {}", size));

                view! {
                    <ul class="guide-list">{rows}</ul>
                    <div class="guide-limits">
                        {threshold.map(|t| view! { <div>{t}</div> })}
                        {formats.map(|f| view! { <div>{f}</div> })}
                        {max_size.map(|m| view! { <div>{m}</div> })}
                    </div>
                }
            })}
        </div>
    }
}
