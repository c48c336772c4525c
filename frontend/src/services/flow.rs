//! Upload-and-moderate flow.
//!
//! [`SubmissionFlow`] is the state machine: it owns the selected file and
//! the last result, and gates submission so at most one request is ever in
//! flight. [`Moderator`] drives it against a transport and reports failures
//! through a [`Notifier`].
//!
//! ```text
//!            select                 submit                 ok
//!   Idle ───────────▶ FileSelected ───────▶ Submitting ───────▶ Succeeded
//!                        ▲    │ select          │  err               │
//!                        │    └──────┘          └────────▶ Failed    │
//!                        └───────────── select ◀──────────────┴──────┘
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use leptos::{RwSignal, SignalUpdate};

use crate::services::moderation::{ModerationError, ModerationTransport};
use crate::services::notify::Notifier;
use crate::ModerationResult;

/// Notification for a submit attempt without a file.
pub const NO_FILE_MESSAGE: &str = "Please select an image.";

// =============================================================================
// Selected file
// =============================================================================

/// What the flow needs to know about a picked file.
pub trait SelectedFile: Clone {
    fn name(&self) -> String;
    fn size_bytes(&self) -> u64;
    fn mime_type(&self) -> String;
}

impl SelectedFile for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }

    fn size_bytes(&self) -> u64 {
        self.size() as u64
    }

    fn mime_type(&self) -> String {
        self.type_()
    }
}

// =============================================================================
// State machine
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    FileSelected,
    Submitting,
    Succeeded,
    Failed,
}

/// Why a submit trigger did not start a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    /// Nothing selected; the user is told.
    NoFile,
    /// A request is already in flight; silently ignored.
    Busy,
}

impl SubmitRejected {
    pub fn notification(&self) -> Option<&'static str> {
        match self {
            SubmitRejected::NoFile => Some(NO_FILE_MESSAGE),
            SubmitRejected::Busy => None,
        }
    }
}

/// A request that the flow has committed to sending.
#[derive(Clone, Debug)]
pub struct Submission<F> {
    pub file: F,
    pub token: String,
}

#[derive(Clone, Debug)]
pub struct SubmissionFlow<F> {
    state: FlowState,
    file: Option<F>,
    result: Option<ModerationResult>,
}

impl<F> Default for SubmissionFlow<F> {
    fn default() -> Self {
        Self {
            state: FlowState::Idle,
            file: None,
            result: None,
        }
    }
}

impl<F: Clone> SubmissionFlow<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn result(&self) -> Option<&ModerationResult> {
        self.result.as_ref()
    }

    /// The busy gate: true while a request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.state == FlowState::Submitting
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.is_busy()
    }

    /// Replace the selected file (or clear it with `None`).
    ///
    /// Always drops the displayed result. While a request is in flight the
    /// gate stays closed and that request still lands its outcome.
    pub fn select_file(&mut self, file: Option<F>) {
        self.result = None;
        self.file = file;

        if !self.is_busy() {
            self.state = if self.file.is_some() {
                FlowState::FileSelected
            } else {
                FlowState::Idle
            };
        }
    }

    /// Close the gate and hand out the request to send.
    pub fn begin(&mut self, token: &str) -> Result<Submission<F>, SubmitRejected> {
        if self.is_busy() {
            return Err(SubmitRejected::Busy);
        }
        let file = self.file.clone().ok_or(SubmitRejected::NoFile)?;

        self.state = FlowState::Submitting;
        Ok(Submission {
            file,
            token: token.to_string(),
        })
    }

    /// Record the outcome of the in-flight request and reopen the gate.
    ///
    /// Returns the message to show the user on failure. A failure leaves
    /// whatever result is currently displayed untouched.
    pub fn finish(&mut self, outcome: Result<ModerationResult, ModerationError>) -> Option<String> {
        if !self.is_busy() {
            log::warn!("Ignoring moderation outcome with no request in flight");
            return None;
        }

        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.state = FlowState::Succeeded;
                None
            }
            Err(e) => {
                self.state = FlowState::Failed;
                Some(e.user_message())
            }
        }
    }
}

// =============================================================================
// Shared flow storage
// =============================================================================

/// Somewhere a [`SubmissionFlow`] lives and can be mutated in place.
///
/// Returns `None` when the storage is gone (a disposed signal).
pub trait FlowCell<F> {
    fn with_flow<R>(&self, f: impl FnOnce(&mut SubmissionFlow<F>) -> R) -> Option<R>;
}

impl<F> FlowCell<F> for Rc<RefCell<SubmissionFlow<F>>> {
    fn with_flow<R>(&self, f: impl FnOnce(&mut SubmissionFlow<F>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<F: 'static> FlowCell<F> for RwSignal<SubmissionFlow<F>> {
    fn with_flow<R>(&self, f: impl FnOnce(&mut SubmissionFlow<F>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

// =============================================================================
// Driver
// =============================================================================

/// Runs user actions against the flow, the transport and the notifier.
#[derive(Clone)]
pub struct Moderator<T, C, N> {
    transport: T,
    flow: C,
    notifier: N,
}

impl<T, C, N> Moderator<T, C, N>
where
    T: ModerationTransport,
    T::File: SelectedFile,
    C: FlowCell<T::File>,
    N: Notifier,
{
    pub fn new(transport: T, flow: C, notifier: N) -> Self {
        Self {
            transport,
            flow,
            notifier,
        }
    }

    pub fn select_file(&self, file: Option<T::File>) {
        match &file {
            Some(f) => log::info!(
                "🖼️  Selected {} ({}, {} bytes)",
                f.name(),
                f.mime_type(),
                f.size_bytes()
            ),
            None => log::debug!("File selection cleared"),
        }
        self.flow.with_flow(|flow| flow.select_file(file));
    }

    /// Send the selected file with `token` and record the outcome.
    ///
    /// Returns the state the flow settled in, or why nothing was sent.
    pub async fn submit(&self, token: &str) -> Result<FlowState, SubmitRejected> {
        let begun = self
            .flow
            .with_flow(|flow| flow.begin(token))
            .unwrap_or(Err(SubmitRejected::Busy));

        let submission = match begun {
            Ok(submission) => submission,
            Err(rejected) => {
                if let Some(message) = rejected.notification() {
                    self.notifier.notify(message);
                }
                return Err(rejected);
            }
        };

        log::info!("📤 Submitting {} for moderation...", submission.file.name());
        let outcome = self
            .transport
            .moderate(&submission.file, &submission.token)
            .await;

        match &outcome {
            Ok(result) => log::info!(
                "✅ Moderation complete: safe={}, {} categories",
                result.is_safe,
                result.categories.len()
            ),
            Err(e) => log::error!("❌ {}", e.user_message()),
        }

        let settled = self.flow.with_flow(|flow| {
            let message = flow.finish(outcome);
            (flow.state(), message)
        });

        match settled {
            Some((state, message)) => {
                if let Some(message) = message {
                    self.notifier.notify(&message);
                }
                Ok(state)
            }
            None => Ok(FlowState::Idle),
        }
    }
}
