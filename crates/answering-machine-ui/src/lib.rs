//! Answering Machine UI Components
//!
//! Dioxus building blocks for the message views. They only render what they
//! are given: field values, validity flags, enabled/disabled state. All
//! message logic lives in `answering-machine-core`.

pub mod components;

pub use components::*;
