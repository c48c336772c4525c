//! Image picker and submit button.
//!
//! Picking a file clears the previous result; the button is disabled while
//! no file is selected or a request is in flight.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::services::{format_file_size, SelectedFile, SubmissionFlow};
use crate::{BrowserModerator, ACCEPTED_IMAGE_TYPES};

#[component]
pub fn ImageUpload(
    moderator: BrowserModerator,
    flow: RwSignal<SubmissionFlow<File>>,
    /// Active bearer token
    token: ReadSignal<String>,
) -> impl IntoView {
    let is_busy = move || flow.with(|f| f.is_busy());
    let can_submit = move || flow.with(|f| f.can_submit());
    let file_summary = move || {
        flow.with(|f| {
            f.file()
                .map(|file| format!("{} ({})", file.name(), format_file_size(file.size_bytes())))
        })
    };

    let on_file_change = {
        let moderator = moderator.clone();
        move |ev: Event| {
            let input: HtmlInputElement = event_target(&ev);
            let file = input.files().and_then(|files| files.get(0));
            moderator.select_file(file);
        }
    };

    let on_submit = move |_| {
        let moderator = moderator.clone();
        let token = token.get_untracked();
        spawn_local(async move {
            if let Err(rejected) = moderator.submit(&token).await {
                log::debug!("Submission not started: {:?}", rejected);
            }
        });
    };

    view! {
        <div class="upload-section">
            <label class="field-label" for="imageInput">"Upload Image"</label>
            <input
                type="file"
                id="imageInput"
                class="file-input"
                accept=ACCEPTED_IMAGE_TYPES
                on:change=on_file_change
            />

            <Show
                when=move || file_summary().is_some()
                fallback=|| view! { }
            >
                <div class="upload-hint">
                    {move || file_summary().unwrap_or_default()}
                </div>
            </Show>

            <button
                class="btn btn-submit"
                class:busy=is_busy
                disabled=move || !can_submit()
                on:click=on_submit
            >
                {move || if is_busy() { "Processing..." } else { "Moderate Image" }}
            </button>
        </div>
    }
}
