//! Bearer token entry.
//!
//! The text field is a draft; only "Save Token" persists it and makes it
//! the token used for requests.

use leptos::*;

use crate::services::{BrowserAlert, Notifier};
use crate::{AppError, BrowserCredentials};

#[component]
pub fn TokenInput(
    /// Persistent token holder
    holder: StoredValue<BrowserCredentials>,
    /// Active token, read by the upload flow
    set_token: WriteSignal<String>,
) -> impl IntoView {
    let (draft, set_draft) = create_signal(holder.with_value(|h| h.get().to_string()));

    let on_save = move |_| {
        let value = draft.get_untracked();
        let saved = holder
            .try_update_value(|h| h.set(value.clone()))
            .unwrap_or_else(|| Err(AppError::Storage("token store disposed".to_string())));

        match saved {
            Ok(()) => set_token.set(value),
            Err(e) => {
                log::error!("❌ Could not save token: {}", e);
                BrowserAlert.notify(&format!("Could not save token: {}", e));
            }
        }
    };

    view! {
        <div class="token-section">
            <label class="field-label" for="tokenInput">"Bearer Token"</label>
            <input
                type="text"
                id="tokenInput"
                class="text-input"
                placeholder="Enter your token"
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
            />
            <button class="btn btn-primary" on:click=on_save>
                "Save Token"
            </button>
        </div>
    }
}
