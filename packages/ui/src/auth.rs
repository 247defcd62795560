//! Login, registration and logout widgets.
//!
//! The session itself is a cookie owned by the backend and the browser. These
//! widgets only send credentials and react to the answer.

use api::Registration;
use dioxus::prelude::*;

use crate::actions::{self, LoginOutcome, LogoutOutcome, RegisterOutcome};
use crate::browser;
use crate::client::use_client;
use crate::options::{AgeGroupSelect, LanguageSelect};

/// Email/password login form. Navigates to the chat page on success.
#[component]
pub fn LoginForm() -> Element {
    let client = use_client();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        let client = client.clone();
        spawn(async move {
            match actions::login(&client.backend, email(), password()).await {
                LoginOutcome::LoggedIn => browser::navigate(&client.config.pages.chat),
                LoginOutcome::Failed(message) => error.set(Some(message)),
            }
        });
    };

    rsx! {
        form {
            id: "loginForm",
            class: "auth-form",
            onsubmit: handle_login,

            input {
                id: "email",
                r#type: "email",
                placeholder: "Email",
                required: true,
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }

            input {
                id: "password",
                r#type: "password",
                placeholder: "Password",
                required: true,
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }

            button { r#type: "submit", "Login" }

            p {
                id: "errorMessage",
                class: "error-message",
                if let Some(err) = error() {
                    "{err}"
                }
            }
        }
    }
}

/// Registration form contents and its two message lines.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RegisterState {
    pub email: String,
    pub password: String,
    pub age_group: String,
    pub preferred_language: String,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl Default for RegisterState {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            age_group: String::new(),
            preferred_language: api::Language::default().code().to_string(),
            error: None,
            success: None,
        }
    }
}

impl RegisterState {
    /// Clear both messages and take the registration to send.
    pub fn submit(&mut self) -> Registration {
        self.error = None;
        self.success = None;
        Registration {
            email: self.email.clone(),
            password: self.password.clone(),
            age_group: self.age_group.clone(),
            preferred_language: self.preferred_language.clone(),
        }
    }

    /// On success the form goes back to its initial values.
    pub fn finish(&mut self, outcome: RegisterOutcome) {
        match outcome {
            RegisterOutcome::Registered(message) => {
                *self = Self {
                    success: Some(message),
                    ..Self::default()
                };
            }
            RegisterOutcome::Invalid(message) | RegisterOutcome::Failed(message) => {
                self.error = Some(message);
            }
        }
    }
}

/// Registration form. Stays on the page and resets itself on success.
#[component]
pub fn RegisterForm() -> Element {
    let client = use_client();
    let mut state = use_signal(RegisterState::default);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let registration = state.write().submit();
        let backend = client.backend.clone();
        spawn(async move {
            let outcome = actions::register(&backend, registration).await;
            state.write().finish(outcome);
        });
    };

    let form = state();

    rsx! {
        form {
            id: "registerForm",
            class: "auth-form",
            onsubmit: handle_register,

            input {
                id: "email",
                r#type: "email",
                placeholder: "Email",
                required: true,
                value: form.email,
                oninput: move |evt: FormEvent| state.write().email = evt.value(),
            }

            input {
                id: "password",
                r#type: "password",
                placeholder: "Password",
                required: true,
                value: form.password,
                oninput: move |evt: FormEvent| state.write().password = evt.value(),
            }

            label { r#for: "age_group", "Age group" }
            AgeGroupSelect {
                id: "age_group",
                value: form.age_group,
                onchange: move |value: String| state.write().age_group = value,
            }

            label { r#for: "preferred_language", "Preferred language" }
            LanguageSelect {
                id: "preferred_language",
                value: form.preferred_language,
                onchange: move |value: String| state.write().preferred_language = value,
            }

            button { r#type: "submit", "Register" }

            p {
                id: "errorMessage",
                class: "error-message",
                if let Some(err) = form.error {
                    "{err}"
                }
            }
            p {
                id: "successMessage",
                class: "success-message",
                if let Some(msg) = form.success {
                    "{msg}"
                }
            }
        }
    }
}

/// Ends the session and goes back to the login page.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let client = use_client();

    let onclick = move |_| {
        let client = client.clone();
        async move {
            match actions::logout(&client.backend).await {
                LogoutOutcome::LoggedOut => browser::navigate(&client.config.pages.login),
                LogoutOutcome::Alert(message) => browser::alert(&message),
            }
        }
    };

    rsx! {
        button {
            id: "logoutButton",
            class: "{class}",
            r#type: "button",
            onclick: onclick,
            "{label}"
        }
    }
}
