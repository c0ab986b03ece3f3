//! New message page.
//!
//! Hosts the composer state machine: edits and button presses go through
//! `composer::reduce`, the create call runs on the component's task scope,
//! and navigation back to the list happens only when the reducer asks for it.

use answering_machine_core::composer::{self, ComposerEffect, ComposerEvent, ComposerState};
use answering_machine_core::{perform_create, Session, SharedBackend};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::MessageForm;
use crate::context::use_machine;

#[component]
pub fn Compose() -> Element {
    let machine = use_machine();
    let navigator = use_navigator();

    // A new draft on every mount
    let state = use_signal(ComposerState::new);

    let session = machine.session.clone();
    let backend = machine.backend.clone();
    let send =
        move |event: ComposerEvent| dispatch(state, backend.clone(), session.clone(), navigator, event);

    let view = state.read().view();
    let on_edit = send.clone();
    let on_submit = send.clone();
    let on_cancel = send.clone();

    rsx! {
        div { class: "compose",
            MessageForm {
                view: view,
                on_edit: move |content: String| on_edit(ComposerEvent::Edit(content)),
                on_submit: move |_| on_submit(ComposerEvent::Submit),
                on_cancel: move |_| on_cancel(ComposerEvent::Cancel),
                on_dismiss: move |_| send(ComposerEvent::DismissNotice),
            }
        }
    }
}

fn dispatch(
    mut state: Signal<ComposerState>,
    backend: SharedBackend,
    session: Session,
    navigator: Navigator,
    event: ComposerEvent,
) {
    let current = state.peek().clone();
    let transition = composer::reduce(current, event);
    state.set(transition.state);

    for effect in transition.effects {
        match effect {
            ComposerEffect::CreateMessage { ticket, request } => {
                let backend = backend.clone();
                let session = session.clone();
                spawn(async move {
                    let outcome = perform_create(backend.as_ref(), &session, ticket, request).await;
                    dispatch(state, backend, session, navigator, outcome);
                });
            }
            ComposerEffect::Navigate(request) => {
                tracing::info!("Navigating to {}", request.path());
                navigator.push(Route::from(request));
            }
        }
    }
}
