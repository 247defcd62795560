//! Chat page view.

use dioxus::prelude::*;
use ui::actions::chat_language;
use ui::{browser, use_client, ChatPanel, LanguageToggle, LogoutButton};

/// Looks up the stored language first: it picks the greeting and the toggle
/// label. Without a valid session the user is sent to the login page.
#[component]
pub fn Chat() -> Element {
    let client = use_client();

    let language = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                let language = chat_language(&client.backend).await;
                if language.is_none() {
                    browser::navigate(&client.config.pages.login);
                }
                language
            }
        }
    });

    let body = match language.cloned() {
        Some(Some(language)) => rsx! {
            header {
                class: "page-header",
                h1 { "WellBot" }
                nav {
                    LanguageToggle { current: language }
                    a { href: "{client.config.pages.profile}", "Profile" }
                    LogoutButton { class: "logout-btn" }
                }
            }
            ChatPanel { language }
        },
        _ => rsx! {
            p { class: "loading", "Loading..." }
        },
    };

    rsx! {
        div {
            class: "chat-page",
            {body}
        }
    }
}
