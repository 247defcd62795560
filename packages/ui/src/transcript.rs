//! The visible chat transcript.

use api::Language;

use crate::feedback::FeedbackWidget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

/// One chat turn. Bot replies remember the user message that triggered them,
/// which is what makes them eligible for feedback.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub user_message: Option<String>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            user_message: None,
        }
    }

    /// Opening bot message. Never gets feedback controls.
    pub fn greeting(language: Language) -> Self {
        Self {
            sender: Sender::Bot,
            text: greeting_text(language).to_string(),
            user_message: None,
        }
    }

    pub fn reply(text: impl Into<String>, user_message: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            user_message: Some(user_message.into()),
        }
    }

    /// A fresh feedback widget, for bot replies only.
    pub fn feedback(&self) -> Option<FeedbackWidget> {
        match (self.sender, &self.user_message) {
            (Sender::Bot, Some(user_message)) => {
                Some(FeedbackWidget::new(user_message.clone(), self.text.clone()))
            }
            _ => None,
        }
    }
}

pub fn greeting_text(language: Language) -> &'static str {
    match language {
        Language::English => {
            "Hello! I'm your wellness assistant. You can ask me about symptoms, first-aid, or general wellness tips."
        }
        Language::Hindi => {
            "नमस्ते! मैं आपका वेलनेस सहायक हूँ। आप मुझसे लक्षणों, प्राथमिक चिकित्सा या सामान्य स्वास्थ्य सुझावों के बारे में पूछ सकते हैं।"
        }
    }
}

/// Ordered, append-only list of chat turns. Lives as long as the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_greeting(language: Language) -> Self {
        Self {
            messages: vec![ChatMessage::greeting(language)],
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}
