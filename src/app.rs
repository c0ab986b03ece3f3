use answering_machine_core::{MemoryBackend, NavRequest, Session};
use dioxus::prelude::*;
use std::sync::Arc;

use crate::context::{installed, MachineContext};
use crate::pages::{Compose, Home};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Message list, or the landing page for visitors
/// - `/message` - New message form
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/message")]
    Compose {},
}

impl From<NavRequest> for Route {
    fn from(request: NavRequest) -> Self {
        match request {
            NavRequest::ToList => Route::Home {},
            NavRequest::ToComposer => Route::Compose {},
        }
    }
}

/// Root application component.
///
/// Provides global styles, the machine context, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(|| {
        installed().unwrap_or_else(|| {
            tracing::warn!("No context installed, falling back to an anonymous in-memory session");
            MachineContext {
                backend: Arc::new(MemoryBackend::new()),
                session: Session::Anonymous,
            }
        })
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
