//! Message composer state machine.
//!
//! ```text
//!            Edit
//!           ┌────┐
//!           ▼    │      Submit (valid)        SubmitSucceeded
//!        Editing ─┴──────────────────► Submitting ───────────────► Done
//!           ▲  │                           │
//!           │  │ Cancel                    │ SubmitFailed
//!           │  └───────────► Done          │ (draft kept, notice shown)
//!           └──────────────────────────────┘
//! ```
//!
//! The reducer is pure. Backend calls and navigation are returned as
//! [`ComposerEffect`]s; the host performs them and feeds the outcome back as
//! [`ComposerEvent::SubmitSucceeded`] or [`ComposerEvent::SubmitFailed`].
//!
//! Every submission carries a [`SubmitTicket`]. Results for any ticket other
//! than the outstanding one are dropped, so a response landing after the
//! composer was left (or re-entered) never touches the current draft.

use serde::{Deserialize, Serialize};

use crate::navigation::NavRequest;
use crate::reducer::{Notice, Transition};
use crate::types::{Draft, NewMessage};

/// Identifies one create-message request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubmitTicket(u64);

impl SubmitTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Where the composer is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum ComposerPhase {
    Editing,
    Submitting { ticket: SubmitTicket },
    Done,
}

/// Complete composer state. Serializable so it can be snapshotted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposerState {
    phase: ComposerPhase,
    draft: Draft,
    notice: Option<Notice>,
    next_ticket: u64,
}

impl Default for ComposerState {
    fn default() -> Self {
        Self::new()
    }
}

impl ComposerState {
    /// Fresh composer: editing an empty draft.
    pub fn new() -> Self {
        Self {
            phase: ComposerPhase::Editing,
            draft: Draft::new(),
            notice: None,
            next_ticket: 1,
        }
    }

    pub fn phase(&self) -> ComposerPhase {
        self.phase
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn content(&self) -> &str {
        self.draft.content()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.phase == ComposerPhase::Editing
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, ComposerPhase::Submitting { .. })
    }

    pub fn is_done(&self) -> bool {
        self.phase == ComposerPhase::Done
    }

    /// Submit is offered only while editing a valid draft.
    pub fn can_submit(&self) -> bool {
        self.is_editing() && self.draft.is_valid()
    }

    pub fn can_cancel(&self) -> bool {
        self.is_editing()
    }

    /// Values handed to the form layer.
    pub fn view(&self) -> ComposerView {
        ComposerView {
            content: self.draft.content().to_string(),
            valid: self.draft.is_valid(),
            submit_enabled: self.can_submit(),
            cancel_enabled: self.can_cancel(),
            input_enabled: self.is_editing(),
            submitting: self.is_submitting(),
            remaining: self.draft.remaining(),
            notice: self.notice.clone(),
        }
    }

    fn issue_ticket(&mut self) -> SubmitTicket {
        let ticket = SubmitTicket(self.next_ticket);
        self.next_ticket += 1;
        ticket
    }

    fn outstanding(&self) -> Option<SubmitTicket> {
        match self.phase {
            ComposerPhase::Submitting { ticket } => Some(ticket),
            _ => None,
        }
    }
}

/// Inputs to the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerEvent {
    /// Composer became the displayed screen
    Activate,
    /// User changed the text field
    Edit(String),
    /// User pressed "Send message"
    Submit,
    /// User pressed "Cancel"
    Cancel,
    /// Backend stored the message
    SubmitSucceeded { ticket: SubmitTicket },
    /// Backend call failed
    SubmitFailed { ticket: SubmitTicket, error: String },
    /// User closed the failure notice
    DismissNotice,
    /// Router moved away from the composer
    Deactivate,
}

/// Work the host must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerEffect {
    CreateMessage {
        ticket: SubmitTicket,
        request: NewMessage,
    },
    Navigate(NavRequest),
}

/// Snapshot consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerView {
    pub content: String,
    pub valid: bool,
    pub submit_enabled: bool,
    pub cancel_enabled: bool,
    pub input_enabled: bool,
    pub submitting: bool,
    pub remaining: i64,
    pub notice: Option<Notice>,
}

/// Advance the composer by one event.
pub fn reduce(mut state: ComposerState, event: ComposerEvent) -> Transition<ComposerState, ComposerEffect> {
    match event {
        ComposerEvent::Activate => {
            // Fresh draft; ticket counter survives so old results stay stale
            state.phase = ComposerPhase::Editing;
            state.draft = Draft::new();
            state.notice = None;
            Transition::stay(state)
        }

        ComposerEvent::Edit(content) => {
            if state.is_editing() {
                state.draft.set_content(content);
            }
            Transition::stay(state)
        }

        ComposerEvent::Submit => {
            if !state.can_submit() {
                return Transition::stay(state);
            }
            let ticket = state.issue_ticket();
            let request = state.draft.to_request();
            state.phase = ComposerPhase::Submitting { ticket };
            state.notice = None;
            tracing::info!(ticket = ticket.value(), "Submitting message");
            Transition::with(state, vec![ComposerEffect::CreateMessage { ticket, request }])
        }

        ComposerEvent::Cancel => {
            if !state.can_cancel() {
                return Transition::stay(state);
            }
            state.phase = ComposerPhase::Done;
            state.draft = Draft::new();
            state.notice = None;
            Transition::with(state, vec![ComposerEffect::Navigate(NavRequest::ToList)])
        }

        ComposerEvent::SubmitSucceeded { ticket } => {
            if state.outstanding() != Some(ticket) {
                tracing::debug!(ticket = ticket.value(), "Ignoring stale submit result");
                return Transition::stay(state);
            }
            state.phase = ComposerPhase::Done;
            state.draft = Draft::new();
            Transition::with(state, vec![ComposerEffect::Navigate(NavRequest::ToList)])
        }

        ComposerEvent::SubmitFailed { ticket, error } => {
            if state.outstanding() != Some(ticket) {
                tracing::debug!(ticket = ticket.value(), "Ignoring stale submit failure");
                return Transition::stay(state);
            }
            tracing::warn!(ticket = ticket.value(), "Message submission failed: {}", error);
            state.phase = ComposerPhase::Editing;
            state.notice = Some(Notice::submit_failed(error));
            Transition::stay(state)
        }

        ComposerEvent::DismissNotice => {
            state.notice = None;
            Transition::stay(state)
        }

        ComposerEvent::Deactivate => {
            state.phase = ComposerPhase::Done;
            state.draft = Draft::new();
            state.notice = None;
            Transition::stay(state)
        }
    }
}
