//! Landing page shown to visitors who are not signed in.

use dioxus::prelude::*;

/// Static landing content. Issues no backend calls.
#[component]
pub fn Landing() -> Element {
    rsx! {
        div { class: "lander",
            h2 { "Answering Machine App" }
            hr {}
            p {
                "This is an application where users can leave me a message on my answering machine. "
                "Sign in to see the messages you left and to leave a new one."
            }
            div { class: "button-container",
                span { class: "orange-link", "Sign up or log in to leave a message" }
            }
            p { class: "lander-hint",
                "Start the app with "
                code { "--user <name>" }
                " or "
                code { "--token <token>" }
                " to sign in."
            }
        }
    }
}
