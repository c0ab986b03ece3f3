//! Home page: the caller's messages, or the landing page for visitors.
//!
//! The list state lives in a signal and only changes through
//! `message_list::reduce`. Fetches run on the component's task scope and
//! report back through the same reducer, which drops results that belong to
//! an earlier activation.

use answering_machine_core::message_list::{self, ListEffect, ListEvent, ListState, ListView};
use answering_machine_core::{perform_fetch, SharedBackend};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::MessageTable;
use crate::context::use_machine;
use crate::pages::Landing;

use answering_machine_ui::NoticeBanner;

#[component]
pub fn Home() -> Element {
    let machine = use_machine();
    let navigator = use_navigator();

    // Activation happens on mount, so the first frame already shows
    // the spinner (or the landing page) instead of an empty list
    let activation = use_hook(|| {
        message_list::reduce(ListState::new(), ListEvent::Activate(machine.session.clone()))
    });
    let state = use_signal(|| activation.state.clone());

    let backend = machine.backend.clone();
    use_effect(move || {
        apply_effects(state, backend.clone(), navigator, activation.effects.clone());
    });

    let backend = machine.backend.clone();
    let send = move |event: ListEvent| dispatch(state, backend.clone(), navigator, event);

    let view = state.read().view();
    match view {
        ListView::Landing => rsx! {
            div { class: "home", Landing {} }
        },
        ListView::Table {
            loading,
            rows,
            notice,
        } => {
            let dismiss = send.clone();
            rsx! {
                div { class: "home",
                    if let Some(notice) = notice {
                        NoticeBanner {
                            notice: notice,
                            on_dismiss: move |_| dismiss(ListEvent::DismissNotice),
                        }
                    }
                    MessageTable {
                        loading: loading,
                        rows: rows,
                        on_compose: move |_| send(ListEvent::ComposeRequested),
                    }
                }
            }
        }
    }
}

fn dispatch(mut state: Signal<ListState>, backend: SharedBackend, navigator: Navigator, event: ListEvent) {
    let current = state.peek().clone();
    let transition = message_list::reduce(current, event);
    state.set(transition.state);
    apply_effects(state, backend, navigator, transition.effects);
}

fn apply_effects(
    state: Signal<ListState>,
    backend: SharedBackend,
    navigator: Navigator,
    effects: Vec<ListEffect>,
) {
    for effect in effects {
        match effect {
            ListEffect::FetchMessages {
                activation,
                session,
            } => {
                let backend = backend.clone();
                spawn(async move {
                    let outcome = perform_fetch(backend.as_ref(), &session, activation).await;
                    dispatch(state, backend, navigator, outcome);
                });
            }
            ListEffect::Navigate(request) => {
                tracing::info!("Navigating to {}", request.path());
                navigator.push(Route::from(request));
            }
        }
    }
}
