//! Profile page view.

use dioxus::prelude::*;
use ui::{use_client, LogoutButton, ProfileForm};

#[component]
pub fn Profile() -> Element {
    let client = use_client();

    rsx! {
        div {
            class: "profile-page",

            header {
                class: "page-header",
                h1 { "Your Profile" }
                nav {
                    a { href: "{client.config.pages.chat}", "Back to chat" }
                    LogoutButton { class: "logout-btn" }
                }
            }

            ProfileForm {}
        }
    }
}
