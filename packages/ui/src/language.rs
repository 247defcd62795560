//! Language toggle for the chat page.

use api::Language;
use dioxus::prelude::*;

use crate::actions::{switch_language, LanguageOutcome};
use crate::browser;
use crate::client::use_client;

pub const SWITCHING: &str = "Switching...";

/// Label offering the other language.
pub fn switch_label(current: Language) -> &'static str {
    match current {
        Language::English => "Switch to Hindi (हिन्दी)",
        Language::Hindi => "Switch to English",
    }
}

/// Button state. While a switch is pending the button is disabled and shows
/// [`SWITCHING`]; on failure it goes back to the label of `current`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageSwitch {
    current: Language,
    pending: bool,
}

impl LanguageSwitch {
    pub fn new(current: Language) -> Self {
        Self {
            current,
            pending: false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn label(&self) -> &'static str {
        if self.pending {
            SWITCHING
        } else {
            switch_label(self.current)
        }
    }

    /// Start switching. Returns the language to store, or `None` if a switch
    /// is already in flight.
    pub fn begin(&mut self) -> Option<Language> {
        if self.pending {
            return None;
        }
        self.pending = true;
        Some(self.current.toggled())
    }

    /// The switch failed; `current` never changed.
    pub fn fail(&mut self) {
        self.pending = false;
    }
}

/// Toggles the stored language preference and reloads the page on success.
#[component]
pub fn LanguageToggle(current: Language) -> Element {
    let client = use_client();
    let mut state = use_signal(move || LanguageSwitch::new(current));

    let onclick = move |_| {
        let backend = client.backend.clone();
        let Some(target) = state.write().begin() else {
            return;
        };
        spawn(async move {
            match switch_language(&backend, target).await {
                LanguageOutcome::Switched => browser::reload(),
                LanguageOutcome::Failed(message) => {
                    browser::alert(&message);
                    state.write().fail();
                }
            }
        });
    };

    rsx! {
        button {
            id: "langSwitchBtn",
            class: "lang-switch-btn",
            r#type: "button",
            disabled: state().is_pending(),
            onclick: onclick,
            "{state().label()}"
        }
    }
}
