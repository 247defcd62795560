//! Login page view.

use dioxus::prelude::*;
use ui::{use_client, LoginForm};

#[component]
pub fn Login() -> Element {
    let client = use_client();

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-title", "WellBot" }
            p { class: "auth-subtitle", "Your non-diagnostic wellness assistant" }

            LoginForm {}

            p {
                class: "auth-switch",
                "Don't have an account? "
                a { href: "{client.config.pages.register}", "Register" }
            }
        }
    }
}
