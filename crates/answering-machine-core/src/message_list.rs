//! Message list state machine.
//!
//! On activation a signed-in caller goes `Loading → Loaded`; a visitor gets
//! the landing page and no backend traffic at all. Each activation is tagged
//! with an [`ActivationId`] and only the fetch result carrying the current id
//! is applied.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::navigation::NavRequest;
use crate::reducer::{Notice, Transition};
use crate::types::{Message, Session};

/// Identifies one activation of the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActivationId(u64);

impl ActivationId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum ListPhase {
    /// Not on screen
    Inactive,
    /// On screen for a visitor
    Landing,
    Loading { activation: ActivationId },
    Loaded { activation: ActivationId },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState {
    phase: ListPhase,
    messages: Vec<Message>,
    notice: Option<Notice>,
    next_activation: u64,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListState {
    pub fn new() -> Self {
        Self {
            phase: ListPhase::Inactive,
            messages: Vec::new(),
            notice: None,
            next_activation: 1,
        }
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    /// Messages in backend order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ListPhase::Loading { .. })
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.phase, ListPhase::Loaded { .. })
    }

    pub fn is_landing(&self) -> bool {
        self.phase == ListPhase::Landing
    }

    /// Id of the activation whose fetch is still pending.
    pub fn pending(&self) -> Option<ActivationId> {
        match self.phase {
            ListPhase::Loading { activation } => Some(activation),
            _ => None,
        }
    }

    pub fn rows(&self) -> Vec<ListRow> {
        self.messages.iter().map(ListRow::from_message).collect()
    }

    /// What the host should draw.
    pub fn view(&self) -> ListView {
        match self.phase {
            ListPhase::Inactive | ListPhase::Landing => ListView::Landing,
            ListPhase::Loading { .. } => ListView::Table {
                loading: true,
                rows: Vec::new(),
                notice: self.notice.clone(),
            },
            ListPhase::Loaded { .. } => ListView::Table {
                loading: false,
                rows: self.rows(),
                notice: self.notice.clone(),
            },
        }
    }

    fn issue_activation(&mut self) -> ActivationId {
        let id = ActivationId(self.next_activation);
        self.next_activation += 1;
        id
    }

    fn is_signed_in_view(&self) -> bool {
        self.is_loading() || self.is_loaded()
    }
}

/// One table row: first line of content and a local creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub key: String,
    pub summary: String,
    pub created: String,
}

impl ListRow {
    pub fn from_message(message: &Message) -> Self {
        Self {
            key: message.id().to_string(),
            summary: message.first_line().to_string(),
            created: format_created_at(message.created_at()),
        }
    }
}

/// Render a creation time in local time, e.g. `3/1/2024, 12:00:00 PM`.
pub fn format_created_at(created_at: DateTime<Utc>) -> String {
    format_created_at_in(created_at, &Local)
}

/// [`format_created_at`] for an explicit time zone.
pub fn format_created_at_in<Tz>(created_at: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    created_at
        .with_timezone(tz)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Landing,
    Table {
        loading: bool,
        rows: Vec<ListRow>,
        notice: Option<Notice>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    /// View became the displayed screen for this session
    Activate(Session),
    /// Backend answered the fetch for `activation`
    Fetched {
        activation: ActivationId,
        result: Result<Vec<Message>, String>,
    },
    /// User pressed "Send new message"
    ComposeRequested,
    DismissNotice,
    Deactivate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListEffect {
    FetchMessages {
        activation: ActivationId,
        session: Session,
    },
    Navigate(NavRequest),
}

/// Advance the list view by one event.
pub fn reduce(mut state: ListState, event: ListEvent) -> Transition<ListState, ListEffect> {
    match event {
        ListEvent::Activate(session) => {
            state.messages.clear();
            state.notice = None;

            if !session.is_authenticated() {
                state.phase = ListPhase::Landing;
                return Transition::stay(state);
            }

            let activation = state.issue_activation();
            state.phase = ListPhase::Loading { activation };
            tracing::info!(activation = activation.value(), "Loading messages");
            Transition::with(state, vec![ListEffect::FetchMessages { activation, session }])
        }

        ListEvent::Fetched { activation, result } => {
            if state.pending() != Some(activation) {
                tracing::debug!(activation = activation.value(), "Ignoring stale fetch result");
                return Transition::stay(state);
            }
            state.phase = ListPhase::Loaded { activation };
            match result {
                Ok(messages) => {
                    tracing::info!(count = messages.len(), "Messages loaded");
                    state.messages = messages;
                }
                Err(error) => {
                    tracing::warn!("Failed to load messages: {}", error);
                    state.messages = Vec::new();
                    state.notice = Some(Notice::fetch_failed(error));
                }
            }
            Transition::stay(state)
        }

        ListEvent::ComposeRequested => {
            if !state.is_signed_in_view() {
                return Transition::stay(state);
            }
            Transition::with(state, vec![ListEffect::Navigate(NavRequest::ToComposer)])
        }

        ListEvent::DismissNotice => {
            state.notice = None;
            Transition::stay(state)
        }

        ListEvent::Deactivate => {
            state.phase = ListPhase::Inactive;
            state.messages.clear();
            state.notice = None;
            Transition::stay(state)
        }
    }
}
