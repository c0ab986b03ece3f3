//! Async drivers that run the view reducers against a backend.
//!
//! A controller owns one view's state and feeds every effect the reducer
//! emits to the backend, then feeds the outcome back in. Navigation requests
//! are returned to the caller, which hands them to its router.
//!
//! The desktop host keeps state in signals instead, but uses the same
//! [`perform_create`] / [`perform_fetch`] helpers for the backend side.

use std::collections::VecDeque;

use crate::backend::{MessageBackend, SharedBackend};
use crate::composer::{self, ComposerEffect, ComposerEvent, ComposerState, SubmitTicket};
use crate::message_list::{self, ActivationId, ListEffect, ListEvent, ListState};
use crate::navigation::NavRequest;
use crate::types::{NewMessage, Session};

/// Run one create request and turn its outcome into the matching event.
pub async fn perform_create(
    backend: &dyn MessageBackend,
    session: &Session,
    ticket: SubmitTicket,
    request: NewMessage,
) -> ComposerEvent {
    match backend.create_message(session, request).await {
        Ok(Some(message)) => {
            tracing::info!(backend = backend.name(), id = %message.id(), "Message created");
            ComposerEvent::SubmitSucceeded { ticket }
        }
        Ok(None) => {
            tracing::info!(backend = backend.name(), "Message created");
            ComposerEvent::SubmitSucceeded { ticket }
        }
        Err(e) => ComposerEvent::SubmitFailed {
            ticket,
            error: e.to_string(),
        },
    }
}

/// Run one list request and turn its outcome into the matching event.
pub async fn perform_fetch(
    backend: &dyn MessageBackend,
    session: &Session,
    activation: ActivationId,
) -> ListEvent {
    let result = backend
        .list_messages(session)
        .await
        .map_err(|e| e.to_string());
    ListEvent::Fetched { activation, result }
}

/// Drives the composer for headless hosts.
pub struct ComposerController {
    state: ComposerState,
    backend: SharedBackend,
    session: Session,
}

impl ComposerController {
    pub fn new(backend: SharedBackend, session: Session) -> Self {
        Self {
            state: ComposerState::new(),
            backend,
            session,
        }
    }

    pub fn state(&self) -> &ComposerState {
        &self.state
    }

    /// Feed an event and run effects until the composer settles.
    pub async fn dispatch(&mut self, event: ComposerEvent) -> Vec<NavRequest> {
        let mut queue = VecDeque::from([event]);
        let mut navigation = Vec::new();

        while let Some(event) = queue.pop_front() {
            let transition = composer::reduce(std::mem::take(&mut self.state), event);
            self.state = transition.state;

            for effect in transition.effects {
                match effect {
                    ComposerEffect::CreateMessage { ticket, request } => {
                        let outcome =
                            perform_create(self.backend.as_ref(), &self.session, ticket, request).await;
                        queue.push_back(outcome);
                    }
                    ComposerEffect::Navigate(request) => navigation.push(request),
                }
            }
        }

        navigation
    }

    pub async fn edit(&mut self, content: impl Into<String>) -> Vec<NavRequest> {
        self.dispatch(ComposerEvent::Edit(content.into())).await
    }

    pub async fn submit(&mut self) -> Vec<NavRequest> {
        self.dispatch(ComposerEvent::Submit).await
    }

    pub async fn cancel(&mut self) -> Vec<NavRequest> {
        self.dispatch(ComposerEvent::Cancel).await
    }
}

/// Drives the message list for headless hosts.
pub struct MessageListController {
    state: ListState,
    backend: SharedBackend,
}

impl MessageListController {
    pub fn new(backend: SharedBackend) -> Self {
        Self {
            state: ListState::new(),
            backend,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Feed an event and run effects until the list settles.
    pub async fn dispatch(&mut self, event: ListEvent) -> Vec<NavRequest> {
        let mut queue = VecDeque::from([event]);
        let mut navigation = Vec::new();

        while let Some(event) = queue.pop_front() {
            let transition = message_list::reduce(std::mem::take(&mut self.state), event);
            self.state = transition.state;

            for effect in transition.effects {
                match effect {
                    ListEffect::FetchMessages {
                        activation,
                        session,
                    } => {
                        let outcome = perform_fetch(self.backend.as_ref(), &session, activation).await;
                        queue.push_back(outcome);
                    }
                    ListEffect::Navigate(request) => navigation.push(request),
                }
            }
        }

        navigation
    }

    pub async fn activate(&mut self, session: Session) -> Vec<NavRequest> {
        self.dispatch(ListEvent::Activate(session)).await
    }

    pub async fn compose(&mut self) -> Vec<NavRequest> {
        self.dispatch(ListEvent::ComposeRequested).await
    }
}
