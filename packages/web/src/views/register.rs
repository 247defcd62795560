//! Registration page view.

use dioxus::prelude::*;
use ui::{use_client, RegisterForm};

#[component]
pub fn Register() -> Element {
    let client = use_client();

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-title", "Create Account" }

            RegisterForm {}

            p {
                class: "auth-switch",
                "Already have an account? "
                a { href: "{client.config.pages.login}", "Login" }
            }
        }
    }
}
