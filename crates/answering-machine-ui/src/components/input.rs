//! Text area for the message field.

use dioxus::prelude::*;

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub id: String,
    /// Current value, shown verbatim
    pub value: String,
    /// Called with the full new value on every keystroke
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Drives the valid/invalid outline; `None` while untouched
    #[props(default)]
    pub valid: Option<bool>,
    /// Short text under the field, e.g. characters remaining
    #[props(default)]
    pub hint: Option<String>,
    #[props(default = 4)]
    pub rows: u32,
    #[props(default = false)]
    pub disabled: bool,
}

/// Multi-line input with label, validity outline and hint.
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let class = field_class(props.valid);

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{props.id}", "{label}" }
            }
            textarea {
                id: "{props.id}",
                class: "{class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: true,
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(hint) = &props.hint {
                small { class: "input-hint", "{hint}" }
            }
        }
    }
}

fn field_class(valid: Option<bool>) -> &'static str {
    match valid {
        Some(true) => "input-field is-valid",
        Some(false) => "input-field is-invalid",
        None => "input-field",
    }
}
