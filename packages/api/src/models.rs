//! Request and response bodies exchanged with the backend.

use serde::{Deserialize, Serialize};

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub age_group: String,
    pub preferred_language: String,
}

/// Body returned by `GET /profile`. The backend may send `null` or omit any field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub age_group: Option<String>,
    #[serde(default)]
    pub preferred_language: Option<String>,
}

/// Body of `PUT /profile`. Only the fields that are set are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<String>,
}

impl ProfileUpdate {
    /// Update carrying only a language preference.
    pub fn language(language: Language) -> Self {
        Self {
            age_group: None,
            preferred_language: Some(language.code().to_string()),
        }
    }
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    pub message: String,
}

/// Success body of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatReply {
    pub reply: String,
}

/// Binary rating attached to one bot reply.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Good,
    Bad,
}

impl Rating {
    pub fn as_str(self) -> &'static str {
        match self {
            Rating::Good => "good",
            Rating::Bad => "bad",
        }
    }
}

/// Body of `POST /feedback`.
///
/// `comment` is always sent; an empty string means the user left no comment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackRecord {
    pub user_message: String,
    pub bot_response: String,
    pub rating: Rating,
    pub comment: String,
}

/// Failure body of any call. Chat errors use `error`, everything else `msg`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}

/// The two interface languages the backend knows about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
        }
    }

    /// Parse a stored preference. The toggle is two-valued, so anything
    /// other than `"en"` is treated as Hindi.
    pub fn from_code(code: &str) -> Self {
        if code == "en" {
            Language::English
        } else {
            Language::Hindi
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Hindi,
            Language::Hindi => Language::English,
        }
    }
}
