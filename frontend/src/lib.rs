//! Image Moderation - Frontend Rust/Leptos Application
//!
//! A WebAssembly client that sends an image with a bearer token to the
//! moderation API and shows the returned safety verdict and per-category
//! confidence scores.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── TokenInput ──────────▶ CredentialHolder ─▶ localStorage│
//! │  ├── ImageUpload ─────────▶ Moderator ─▶ HttpTransport      │
//! │  │                              │                           │
//! │  ├── ResultDisplay ◀──── SubmissionFlow (signal)            │
//! │  └── CategoryGuide ───────▶ HttpTransport                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Result, catalog and error types
//! - [`components`] - UI components
//! - [`services`] - Storage, transport and the submission state machine

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use web_sys::File;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Results
    CategoryScores, ModerationResult, OrderedMap,
    // Catalog
    CategoryCatalog, CategoryInfo,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

/// Token holder as wired in the browser.
pub type BrowserCredentials = CredentialHolder<Box<dyn KeyValueStore>>;

/// Submission driver as wired in the browser.
pub type BrowserModerator = Moderator<HttpTransport, RwSignal<SubmissionFlow<File>>, BrowserAlert>;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_TITLE/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let holder: BrowserCredentials = CredentialHolder::load(default_store());
    let (token, set_token) = create_signal(holder.get().to_string());
    let holder = store_value(holder);

    let transport = HttpTransport::new(ClientConfig::default());
    let flow = create_rw_signal(SubmissionFlow::<File>::new());
    let moderator: BrowserModerator = Moderator::new(transport.clone(), flow, BrowserAlert);

    let result = Signal::derive(move || flow.with(|f| f.result().cloned()));

    view! {
        <div class="container">
            <Hero/>
            <TokenInput holder=holder set_token=set_token/>
            <ImageUpload moderator=moderator flow=flow token=token/>
            <ResultDisplay result=result/>
            <CategoryGuide transport=transport token=token/>
        </div>

        <Footer/>
    }
}
