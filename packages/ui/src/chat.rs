use api::Language;
use dioxus::prelude::*;

use crate::actions::{self, ChatOutcome};
use crate::browser;
use crate::client::use_client;
use crate::config::PagesConfig;
use crate::feedback::FeedbackControls;
use crate::transcript::{ChatMessage, Transcript};

const CHATBOX_ID: &str = "chatbox";

/// Everything the chat panel shows: the transcript, the text being typed and
/// the inline error line.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ChatState {
    pub transcript: Transcript,
    pub input: String,
    pub error: Option<String>,
}

impl ChatState {
    pub fn new(language: Language) -> Self {
        Self {
            transcript: Transcript::with_greeting(language),
            input: String::new(),
            error: None,
        }
    }

    /// The form was submitted. Clears the error, and for non-blank input
    /// appends the user message and empties the input box. Returns the text to
    /// send.
    pub fn send(&mut self) -> Option<String> {
        self.error = None;
        let message = actions::begin_chat_turn(&mut self.transcript, &self.input)?;
        self.input.clear();
        Some(message)
    }

    /// Apply the backend's answer. Returns the page to go to when the session
    /// is gone.
    pub fn receive(&mut self, outcome: ChatOutcome, pages: &PagesConfig) -> Option<String> {
        match outcome {
            ChatOutcome::Reply(reply) => {
                self.transcript.push(reply);
                None
            }
            ChatOutcome::Failed {
                error,
                session_expired,
            } => {
                self.error = Some(error);
                session_expired.then(|| pages.login.clone())
            }
        }
    }
}

/// Transcript, message box and the inline error line.
///
/// The user's message is appended and the input cleared as soon as the form is
/// submitted; the bot reply is appended when it arrives.
#[component]
pub fn ChatPanel(language: Language) -> Element {
    let client = use_client();
    let mut state = use_signal(move || ChatState::new(language));

    let handle_send = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(message) = state.write().send() else {
            return;
        };

        let client = client.clone();
        spawn(async move {
            let outcome = actions::send_chat(&client.backend, message).await;
            let redirect = state.write().receive(outcome, &client.config.pages);
            if let Some(page) = redirect {
                browser::navigate(&page);
            }
        });
    };

    // Keep the newest message in view.
    use_effect(move || {
        if !state.read().transcript.is_empty() {
            browser::scroll_to_bottom(CHATBOX_ID);
        }
    });

    let messages: Vec<ChatMessage> = state.read().transcript.iter().cloned().collect();
    let error = state.read().error.clone();
    let input = state.read().input.clone();

    rsx! {
        div {
            class: "chat-panel",

            div {
                id: CHATBOX_ID,
                class: "chatbox",
                for (i, message) in messages.into_iter().enumerate() {
                    ChatBubble { key: "{i}", message }
                }
            }

            p {
                id: "errorMessage",
                class: "error-message",
                if let Some(err) = error {
                    "{err}"
                }
            }

            form {
                id: "messageForm",
                class: "message-form",
                onsubmit: handle_send,
                input {
                    id: "userInput",
                    r#type: "text",
                    placeholder: "Type your message...",
                    autocomplete: "off",
                    value: input,
                    oninput: move |evt: FormEvent| state.write().input = evt.value(),
                }
                button { r#type: "submit", "Send" }
            }
        }
    }
}

#[component]
fn ChatBubble(message: ChatMessage) -> Element {
    let class = format!("message {}", message.sender.as_str());
    let feedback = message.feedback();

    rsx! {
        div {
            class: "{class}",
            span { "{message.text}" }
            if let Some(widget) = feedback {
                FeedbackControls { widget }
            }
        }
    }
}
