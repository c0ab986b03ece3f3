//! Message Form
//!
//! Single-field form for leaving a message. Purely presentational: every
//! value and flag comes from a `ComposerView` snapshot, every interaction
//! goes out through a handler.

use answering_machine_core::ComposerView;
use answering_machine_ui::{Button, ButtonVariant, NoticeBanner, TextArea};
use dioxus::prelude::*;

#[component]
pub fn MessageForm(
    /// Snapshot of the composer state
    view: ComposerView,
    /// Receives the full field value on every keystroke
    on_edit: EventHandler<String>,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
    on_dismiss: EventHandler<()>,
) -> Element {
    // Outline stays neutral until the user types something
    let validity = if view.content.is_empty() {
        None
    } else {
        Some(view.valid)
    };
    let hint = remaining_hint(view.remaining);

    rsx! {
        div { class: "message-form",
            if let Some(notice) = view.notice.clone() {
                NoticeBanner {
                    notice: notice,
                    on_dismiss: move |_| on_dismiss.call(()),
                }
            }

            div { class: "form-body",
                TextArea {
                    id: "content".to_string(),
                    value: view.content.clone(),
                    oninput: move |content: String| on_edit.call(content),
                    label: "Sorry I missed you. Please leave me a message below.".to_string(),
                    placeholder: "Enter your message here.".to_string(),
                    valid: validity,
                    hint: hint,
                    disabled: !view.input_enabled,
                }
            }

            div { class: "form-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    class: "float-right".to_string(),
                    disabled: !view.submit_enabled,
                    busy: view.submitting,
                    onclick: move |_| on_submit.call(()),
                    if view.submitting { "Sending" } else { "Send message" }
                }
                Button {
                    variant: ButtonVariant::Link,
                    class: "float-right".to_string(),
                    disabled: !view.cancel_enabled,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}

fn remaining_hint(remaining: i64) -> String {
    match remaining {
        r if r < 0 => format!("{} characters too long", -r),
        1 => "1 character left".to_string(),
        r => format!("{} characters left", r),
    }
}
