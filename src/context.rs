//! Backend and session context for the views.
//!
//! `main` installs the context once before launch; the root component
//! provides it to the tree and views read it with [`use_machine`].

use std::sync::OnceLock;

use answering_machine_core::{SharedBackend, Session};
use dioxus::prelude::*;

/// What every view needs from the host.
#[derive(Clone)]
pub struct MachineContext {
    pub backend: SharedBackend,
    /// Capability supplied at activation; never polled
    pub session: Session,
}

static MACHINE: OnceLock<MachineContext> = OnceLock::new();

/// Store the context for the app. Only the first call has an effect.
pub fn install(context: MachineContext) {
    if MACHINE.set(context).is_err() {
        tracing::warn!("Machine context already installed");
    }
}

/// Context installed by `main`, if any.
pub fn installed() -> Option<MachineContext> {
    MACHINE.get().cloned()
}

/// Hook to access the backend and session from context.
pub fn use_machine() -> MachineContext {
    use_context::<MachineContext>()
}
