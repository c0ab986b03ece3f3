//! Loading and failure feedback.

use answering_machine_core::{Notice, NoticeKind};
use dioxus::prelude::*;

/// Spinning loading indicator.
#[component]
pub fn Spinner(#[props(default = false)] small: bool) -> Element {
    let class = if small { "spinner spinner-sm" } else { "spinner" };
    rsx! {
        span { class: "{class}", role: "status", "aria-label": "Loading" }
    }
}

/// Dismissible failure banner.
#[component]
pub fn NoticeBanner(notice: Notice, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div { class: "notice {notice_class(notice.kind)}", role: "alert",
            span { class: "notice-text", "{notice.text}" }
            button {
                class: "notice-dismiss",
                "aria-label": "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                "\u{00D7}"
            }
        }
    }
}

fn notice_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::FetchFailed => "notice-fetch",
        NoticeKind::SubmitFailed => "notice-submit",
    }
}
