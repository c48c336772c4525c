//! Moderation result panel.

use leptos::*;

use crate::services::{category_label, format_confidence, result_caption, safety_label};
use crate::ModerationResult;

/// Renders nothing until a result is present.
#[component]
pub fn ResultDisplay(
    #[prop(into)] result: Signal<Option<ModerationResult>>,
) -> impl IntoView {
    move || {
        result.get().map(|result| {
            let verdict_class = if result.is_safe { "verdict-safe" } else { "verdict-unsafe" };
            let verdict_icon = if result.is_safe { "✅" } else { "❌" };
            let caption = result_caption(&result);

            let rows = result
                .categories
                .iter()
                .map(|(category, confidence)| {
                    view! {
                        <li>
                            <span class="category-name">{category_label(category)} ":"</span>
                            " " {format_confidence(*confidence)}
                        </li>
                    }
                })
                .collect_view();

            view! {
                <div class="result-section">
                    <h2 class="result-title">"🧪 Moderation Result"</h2>
                    {caption.map(|c| view! { <p class="result-caption">{c}</p> })}
                    <p class="result-verdict">
                        <strong>"Safe:"</strong> " "
                        <span class=verdict_class>
                            {safety_label(result.is_safe)} " " {verdict_icon}
                        </span>
                    </p>

                    <h3 class="result-subtitle">"Category Confidence"</h3>
                    <ul class="category-list">{rows}</ul>
                </div>
            }
        })
    }
}
