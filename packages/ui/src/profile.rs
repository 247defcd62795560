use dioxus::prelude::*;

use crate::actions::{self, ProfileLoad, NO_EMAIL};
use crate::browser;
use crate::client::use_client;
use crate::options::{AgeGroupSelect, LanguageSelect};

/// Profile view/edit form.
///
/// Loads the profile on mount and saves edits in place. Without a valid
/// session it sends the user to the login page.
#[component]
pub fn ProfileForm() -> Element {
    let client = use_client();
    let mut email = use_signal(|| NO_EMAIL.to_string());
    let mut age_group = use_signal(String::new);
    let mut preferred_language = use_signal(|| api::Language::default().code().to_string());
    let mut success = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let loader_client = client.clone();
    let _loader = use_resource(move || {
        let client = loader_client.clone();
        async move {
            match actions::load_profile(&client.backend).await {
                ProfileLoad::Loaded(fields) => {
                    email.set(fields.email);
                    age_group.set(fields.age_group);
                    preferred_language.set(fields.preferred_language);
                }
                ProfileLoad::Failed(message) => error.set(Some(message)),
                ProfileLoad::SessionExpired => browser::navigate(&client.config.pages.login),
            }
        }
    });

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        success.set(None);
        error.set(None);

        let backend = client.backend.clone();
        let (age, language) = (age_group(), preferred_language());
        spawn(async move {
            match actions::save_profile(&backend, age, language).await {
                Ok(message) => success.set(Some(message)),
                Err(message) => error.set(Some(message)),
            }
        });
    };

    rsx! {
        form {
            id: "profileForm",
            class: "profile-form",
            onsubmit: handle_save,

            p {
                class: "profile-email",
                "Email: "
                span { id: "emailDisplay", "{email}" }
            }

            label { r#for: "edit_age_group", "Age group" }
            AgeGroupSelect {
                id: "edit_age_group",
                value: age_group(),
                onchange: move |value| age_group.set(value),
            }

            label { r#for: "edit_preferred_language", "Preferred language" }
            LanguageSelect {
                id: "edit_preferred_language",
                value: preferred_language(),
                onchange: move |value| preferred_language.set(value),
            }

            button { r#type: "submit", "Save" }

            p {
                id: "profileSuccessMessage",
                class: "success-message",
                if let Some(msg) = success() {
                    "{msg}"
                }
            }
            p {
                id: "profileErrorMessage",
                class: "error-message",
                if let Some(err) = error() {
                    "{err}"
                }
            }
        }
    }
}
