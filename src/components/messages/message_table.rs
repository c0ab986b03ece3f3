//! Message Table
//!
//! Two-column table of the caller's messages: first line of content and
//! creation time. Shows a spinner row while loading.

use answering_machine_core::ListRow;
use answering_machine_ui::{Button, Spinner};
use dioxus::prelude::*;

#[component]
pub fn MessageTable(
    /// Rows in backend order
    rows: Vec<ListRow>,
    #[props(default = false)]
    loading: bool,
    /// "Send new message" pressed
    on_compose: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "messages",
            h1 { class: "text-center", "Leave me a message..." }
            div { class: "toolbar",
                Button {
                    onclick: move |_| on_compose.call(()),
                    "Send new message"
                }
            }
            table { class: "message-table",
                thead {
                    tr {
                        th { "Message Content" }
                        th { "Date created" }
                    }
                }
                tbody {
                    if loading {
                        tr {
                            td { colspan: "2", Spinner {} }
                        }
                    } else {
                        for row in rows {
                            tr { key: "{row.key}",
                                td { div { class: "description", "{row.summary}" } }
                                td { "{row.created}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
