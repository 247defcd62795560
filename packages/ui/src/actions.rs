//! # Actions: one async handler per user action
//!
//! Components suppress the browser's default action, update anything that must
//! change synchronously, then spawn one of these handlers and apply the typed
//! outcome it returns. Handlers are generic over [`Backend`] so the same code
//! runs against [`api::HttpBackend`] in the page and [`api::MemoryBackend`] in
//! tests.
//!
//! | Handler | Request | Outcome |
//! |---------|---------|---------|
//! | [`login`] | `POST /login` | [`LoginOutcome`] |
//! | [`register`] | `POST /register` (after age-group check) | [`RegisterOutcome`] |
//! | [`logout`] | `POST /logout` | [`LogoutOutcome`] |
//! | [`load_profile`] / [`save_profile`] | `GET` / `PUT /profile` | [`ProfileLoad`] / `Result<String, String>` |
//! | [`begin_chat_turn`] + [`send_chat`] | `POST /chat` | [`ChatOutcome`] |
//! | [`send_feedback`] | `POST /feedback` | nothing; failures are only logged |
//! | [`switch_language`] | `PUT /profile` | [`LanguageOutcome`] |
//! | [`chat_language`] | `GET /profile` | current [`Language`], or `None` for an invalid session |
//!
//! Errors come in two classes. Application errors show the server's own message
//! when it sent one, otherwise a per-action fallback. Transport errors always show
//! the fixed transport message. Nothing is retried.

use api::{
    ApiError, Backend, ChatRequest, Credentials, FeedbackRecord, Language, Profile,
    ProfileUpdate, Registration,
};

use crate::transcript::{ChatMessage, Transcript};

pub const LOGIN_FAILED: &str = "Login failed.";
pub const LOGIN_UNREACHABLE: &str = "An error occurred during login.";
pub const AGE_GROUP_REQUIRED: &str = "Please select an age group.";
pub const REGISTERED: &str = "Registration successful! Please login.";
pub const REGISTER_FAILED: &str = "Registration failed.";
pub const REGISTER_UNREACHABLE: &str = "An error occurred during registration.";
pub const LOGOUT_FAILED: &str = "Logout failed.";
pub const LOGOUT_UNREACHABLE: &str = "An error occurred during logout.";
pub const PROFILE_LOAD_FAILED: &str = "Could not load profile.";
pub const PROFILE_LOAD_UNREACHABLE: &str = "Error loading profile.";
pub const PROFILE_SAVED: &str = "Profile updated successfully!";
pub const PROFILE_SAVE_FAILED: &str = "Update failed.";
pub const PROFILE_SAVE_UNREACHABLE: &str = "Error updating profile.";
pub const CHAT_FAILED: &str = "Error sending message.";
pub const CHAT_UNREACHABLE: &str = "Could not connect to the server.";
pub const LANGUAGE_FAILED: &str = "Failed to switch language.";
pub const LANGUAGE_UNREACHABLE: &str = "Error connecting to server.";

/// Shown for an absent email.
pub const NO_EMAIL: &str = "N/A";

/// Map an error to the text shown to the user.
fn describe(
    err: &ApiError,
    server_text: Option<&str>,
    fallback: &str,
    unreachable: &str,
) -> String {
    if err.is_transport() {
        unreachable.to_string()
    } else {
        server_text.unwrap_or(fallback).to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// The session cookie is set; go to the chat page.
    LoggedIn,
    Failed(String),
}

pub async fn login<B: Backend>(backend: &B, email: String, password: String) -> LoginOutcome {
    let credentials = Credentials { email, password };
    match backend.login(&credentials).await {
        Ok(()) => {
            tracing::debug!("Logged in");
            LoginOutcome::LoggedIn
        }
        Err(e) => {
            tracing::error!("Login error: {}", e);
            LoginOutcome::Failed(describe(&e, e.server_msg(), LOGIN_FAILED, LOGIN_UNREACHABLE))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegisterOutcome {
    /// Rejected before any request was made.
    Invalid(String),
    /// Account created; the form should be reset.
    Registered(String),
    Failed(String),
}

pub async fn register<B: Backend>(backend: &B, registration: Registration) -> RegisterOutcome {
    if registration.age_group.is_empty() {
        return RegisterOutcome::Invalid(AGE_GROUP_REQUIRED.to_string());
    }

    match backend.register(&registration).await {
        Ok(()) => {
            tracing::debug!("Registration accepted");
            RegisterOutcome::Registered(REGISTERED.to_string())
        }
        Err(e) => {
            tracing::error!("Registration error: {}", e);
            RegisterOutcome::Failed(describe(
                &e,
                e.server_msg(),
                REGISTER_FAILED,
                REGISTER_UNREACHABLE,
            ))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogoutOutcome {
    /// Go to the login page.
    LoggedOut,
    /// Show a blocking alert and stay.
    Alert(String),
}

pub async fn logout<B: Backend>(backend: &B) -> LogoutOutcome {
    match backend.logout().await {
        Ok(()) => LogoutOutcome::LoggedOut,
        Err(e) => {
            tracing::error!("Logout error: {}", e);
            let message = if e.is_transport() {
                LOGOUT_UNREACHABLE
            } else {
                LOGOUT_FAILED
            };
            LogoutOutcome::Alert(message.to_string())
        }
    }
}

/// Profile values as shown in the profile form, with defaults filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileFields {
    pub email: String,
    pub age_group: String,
    pub preferred_language: String,
}

impl From<Profile> for ProfileFields {
    fn from(profile: Profile) -> Self {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        Self {
            email: present(profile.email).unwrap_or_else(|| NO_EMAIL.to_string()),
            age_group: present(profile.age_group).unwrap_or_default(),
            preferred_language: present(profile.preferred_language)
                .unwrap_or_else(|| Language::default().code().to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileLoad {
    Loaded(ProfileFields),
    Failed(String),
    /// 401/422: go to the login page.
    SessionExpired,
}

pub async fn load_profile<B: Backend>(backend: &B) -> ProfileLoad {
    match backend.get_profile().await {
        Ok(profile) => ProfileLoad::Loaded(profile.into()),
        Err(e) if e.is_session_invalid() => ProfileLoad::SessionExpired,
        Err(e) => {
            tracing::error!("Load profile error: {}", e);
            let message = if e.is_transport() {
                PROFILE_LOAD_UNREACHABLE
            } else {
                PROFILE_LOAD_FAILED
            };
            ProfileLoad::Failed(message.to_string())
        }
    }
}

/// Send the edited profile. `Ok` carries the success message.
pub async fn save_profile<B: Backend>(
    backend: &B,
    age_group: String,
    preferred_language: String,
) -> Result<String, String> {
    let update = ProfileUpdate {
        age_group: Some(age_group),
        preferred_language: Some(preferred_language),
    };
    match backend.update_profile(&update).await {
        Ok(()) => Ok(PROFILE_SAVED.to_string()),
        Err(e) => {
            tracing::error!("Update profile error: {}", e);
            Err(describe(
                &e,
                e.server_msg(),
                PROFILE_SAVE_FAILED,
                PROFILE_SAVE_UNREACHABLE,
            ))
        }
    }
}

/// Synchronous half of sending a chat message: trims the input and, if anything
/// is left, appends it to the transcript right away. Returns the text to send.
///
/// The user message stays in the transcript whatever happens to the request.
pub fn begin_chat_turn(transcript: &mut Transcript, input: &str) -> Option<String> {
    let message = input.trim();
    if message.is_empty() {
        return None;
    }
    transcript.push(ChatMessage::user(message));
    Some(message.to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChatOutcome {
    /// The bot's answer, ready to append.
    Reply(ChatMessage),
    Failed {
        error: String,
        /// 401/422: the session is gone, go to the login page as well.
        session_expired: bool,
    },
}

pub async fn send_chat<B: Backend>(backend: &B, message: String) -> ChatOutcome {
    let request = ChatRequest { message };
    match backend.chat(&request).await {
        Ok(reply) => ChatOutcome::Reply(ChatMessage::reply(reply.reply, request.message)),
        Err(e) => {
            tracing::error!("Chat error: {}", e);
            ChatOutcome::Failed {
                error: describe(&e, e.server_error(), CHAT_FAILED, CHAT_UNREACHABLE),
                session_expired: e.is_session_invalid(),
            }
        }
    }
}

/// Fire-and-forget: the outcome is never shown to the user.
pub async fn send_feedback<B: Backend>(backend: &B, record: FeedbackRecord) {
    match backend.feedback(&record).await {
        Ok(()) => tracing::debug!("Feedback sent ({})", record.rating.as_str()),
        Err(e) => tracing::error!("Feedback error: {}", e),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LanguageOutcome {
    /// Stored; reload the page so everything picks up the new language.
    Switched,
    /// Show this alert and restore the toggle.
    Failed(String),
}

pub async fn switch_language<B: Backend>(backend: &B, target: Language) -> LanguageOutcome {
    match backend.update_profile(&ProfileUpdate::language(target)).await {
        Ok(()) => LanguageOutcome::Switched,
        Err(e) => {
            tracing::error!("Language switch error: {}", e);
            let message = if e.is_transport() {
                LANGUAGE_UNREACHABLE
            } else {
                LANGUAGE_FAILED
            };
            LanguageOutcome::Failed(message.to_string())
        }
    }
}

/// Language of the chat page. `None` means the session is invalid and the user
/// belongs on the login page; any other failure falls back to English.
pub async fn chat_language<B: Backend>(backend: &B) -> Option<Language> {
    match backend.get_profile().await {
        Ok(profile) => {
            let fields = ProfileFields::from(profile);
            Some(Language::from_code(&fields.preferred_language))
        }
        Err(e) if e.is_session_invalid() => None,
        Err(e) => {
            tracing::warn!("Could not load language preference: {}", e);
            Some(Language::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Endpoint, MemoryBackend, Rating, Request};
    use serde_json::{json, Value};

    fn registration(age_group: &str) -> Registration {
        Registration {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            age_group: age_group.to_string(),
            preferred_language: "en".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_success() {
        let backend = MemoryBackend::new();
        backend.respond_ok(Endpoint::Login, json!({ "access_token": "t" }));

        let outcome = login(&backend, "a@b.com".to_string(), "x".to_string()).await;
        assert_eq!(outcome, LoginOutcome::LoggedIn);
        assert_eq!(
            backend.requests(),
            vec![Request::Login(Credentials {
                email: "a@b.com".to_string(),
                password: "x".to_string(),
            })]
        );
    }

    #[tokio::test]
    async fn test_login_failures() {
        let backend = MemoryBackend::new();
        backend
            .respond_status(Endpoint::Login, 401, json!({ "msg": "Bad email or password" }))
            .respond_status(Endpoint::Login, 500, Value::Null)
            .fail(Endpoint::Login, "connection refused");

        let first = login(&backend, "a@b.com".to_string(), "bad".to_string()).await;
        assert_eq!(first, LoginOutcome::Failed("Bad email or password".to_string()));

        let second = login(&backend, "a@b.com".to_string(), "bad".to_string()).await;
        assert_eq!(second, LoginOutcome::Failed(LOGIN_FAILED.to_string()));

        let third = login(&backend, "a@b.com".to_string(), "bad".to_string()).await;
        assert_eq!(third, LoginOutcome::Failed(LOGIN_UNREACHABLE.to_string()));
    }

    #[tokio::test]
    async fn test_register_requires_age_group() {
        let backend = MemoryBackend::new();

        let outcome = register(&backend, registration("")).await;
        assert_eq!(outcome, RegisterOutcome::Invalid(AGE_GROUP_REQUIRED.to_string()));
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_register_outcomes() {
        let backend = MemoryBackend::new();
        backend
            .respond_ok(Endpoint::Register, json!({ "msg": "User created successfully" }))
            .respond_status(Endpoint::Register, 400, json!({ "msg": "Email already exists" }))
            .fail(Endpoint::Register, "offline");

        assert_eq!(
            register(&backend, registration("adult")).await,
            RegisterOutcome::Registered(REGISTERED.to_string())
        );
        assert_eq!(
            register(&backend, registration("adult")).await,
            RegisterOutcome::Failed("Email already exists".to_string())
        );
        assert_eq!(
            register(&backend, registration("adult")).await,
            RegisterOutcome::Failed(REGISTER_UNREACHABLE.to_string())
        );

        let sent = backend.requests_to(Endpoint::Register);
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[0], Request::Register(registration("adult")));
    }

    #[tokio::test]
    async fn test_logout_outcomes() {
        let backend = MemoryBackend::new();
        backend
            .respond_ok(Endpoint::Logout, json!({ "msg": "Logout successful" }))
            .respond_status(Endpoint::Logout, 500, Value::Null)
            .fail(Endpoint::Logout, "offline");

        assert_eq!(logout(&backend).await, LogoutOutcome::LoggedOut);
        assert_eq!(
            logout(&backend).await,
            LogoutOutcome::Alert(LOGOUT_FAILED.to_string())
        );
        assert_eq!(
            logout(&backend).await,
            LogoutOutcome::Alert(LOGOUT_UNREACHABLE.to_string())
        );
    }

    #[tokio::test]
    async fn test_load_profile_fills_defaults() {
        let backend = MemoryBackend::new();
        backend
            .respond_ok(Endpoint::GetProfile, json!({ "age_group": null }))
            .respond_ok(
                Endpoint::GetProfile,
                json!({ "email": "a@b.com", "age_group": "teen", "preferred_language": "hi" }),
            );

        assert_eq!(
            load_profile(&backend).await,
            ProfileLoad::Loaded(ProfileFields {
                email: NO_EMAIL.to_string(),
                age_group: String::new(),
                preferred_language: "en".to_string(),
            })
        );
        assert_eq!(
            load_profile(&backend).await,
            ProfileLoad::Loaded(ProfileFields {
                email: "a@b.com".to_string(),
                age_group: "teen".to_string(),
                preferred_language: "hi".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_load_profile_errors() {
        let backend = MemoryBackend::new();
        backend
            .respond_status(Endpoint::GetProfile, 404, json!({ "msg": "User not found" }))
            .respond_status(Endpoint::GetProfile, 401, json!({ "msg": "Token has expired" }))
            .respond_status(Endpoint::GetProfile, 422, json!({}));

        assert_eq!(
            load_profile(&backend).await,
            ProfileLoad::Failed(PROFILE_LOAD_FAILED.to_string())
        );
        assert_eq!(load_profile(&backend).await, ProfileLoad::SessionExpired);
        assert_eq!(load_profile(&backend).await, ProfileLoad::SessionExpired);
        assert_eq!(
            load_profile(&backend).await,
            ProfileLoad::Failed(PROFILE_LOAD_UNREACHABLE.to_string())
        );
    }

    #[tokio::test]
    async fn test_save_profile() {
        let backend = MemoryBackend::new();
        backend
            .respond_ok(Endpoint::UpdateProfile, json!({ "msg": "Profile updated successfully" }))
            .respond_status(Endpoint::UpdateProfile, 400, json!({}));

        assert_eq!(
            save_profile(&backend, "senior".to_string(), "hi".to_string()).await,
            Ok(PROFILE_SAVED.to_string())
        );
        assert_eq!(
            save_profile(&backend, "senior".to_string(), "hi".to_string()).await,
            Err(PROFILE_SAVE_FAILED.to_string())
        );
        assert_eq!(
            save_profile(&backend, "senior".to_string(), "hi".to_string()).await,
            Err(PROFILE_SAVE_UNREACHABLE.to_string())
        );
        assert_eq!(
            backend.requests()[0],
            Request::UpdateProfile(ProfileUpdate {
                age_group: Some("senior".to_string()),
                preferred_language: Some("hi".to_string()),
            })
        );
    }

    #[test]
    fn test_blank_chat_input_appends_nothing() {
        let mut transcript = Transcript::with_greeting(Language::English);
        for input in ["", "   ", "\n\t "] {
            assert!(begin_chat_turn(&mut transcript, input).is_none());
        }
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_chat_input_appends_trimmed_user_message() {
        let mut transcript = Transcript::new();
        let sent = begin_chat_turn(&mut transcript, "  hello  ");
        assert_eq!(sent.as_deref(), Some("hello"));
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.last(), Some(&ChatMessage::user("hello")));
    }

    #[tokio::test]
    async fn test_chat_reply_carries_user_message() {
        let backend = MemoryBackend::new();
        backend.respond_ok(
            Endpoint::Chat,
            json!({ "reply": "Rest and hydrate.", "user_message": "flu" }),
        );

        let mut transcript = Transcript::new();
        let message = begin_chat_turn(&mut transcript, "flu").unwrap();
        match send_chat(&backend, message).await {
            ChatOutcome::Reply(reply) => {
                assert_eq!(reply, ChatMessage::reply("Rest and hydrate.", "flu"));
                assert!(reply.feedback().is_some());
                transcript.push(reply);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(transcript.len(), 2);
        assert_eq!(
            backend.requests(),
            vec![Request::Chat(ChatRequest {
                message: "flu".to_string()
            })]
        );
    }

    #[tokio::test]
    async fn test_chat_unauthorized_keeps_user_message_and_redirects() {
        let backend = MemoryBackend::new();
        backend.respond_status(Endpoint::Chat, 401, json!({ "msg": "Token has expired" }));

        let mut transcript = Transcript::with_greeting(Language::English);
        let message = begin_chat_turn(&mut transcript, "hello").unwrap();
        let outcome = send_chat(&backend, message).await;

        assert_eq!(
            outcome,
            ChatOutcome::Failed {
                error: "Token has expired".to_string(),
                session_expired: true,
            }
        );
        assert_eq!(transcript.last(), Some(&ChatMessage::user("hello")));
    }

    #[tokio::test]
    async fn test_chat_other_failures_stay_inline() {
        let backend = MemoryBackend::new();
        backend
            .respond_status(Endpoint::Chat, 422, json!({}))
            .respond_status(
                Endpoint::Chat,
                503,
                json!({ "error": "Could not connect to the chatbot server" }),
            )
            .respond_status(Endpoint::Chat, 500, json!({}))
            .fail(Endpoint::Chat, "offline");

        assert_eq!(
            send_chat(&backend, "a".to_string()).await,
            ChatOutcome::Failed {
                error: CHAT_FAILED.to_string(),
                session_expired: true,
            }
        );
        assert_eq!(
            send_chat(&backend, "a".to_string()).await,
            ChatOutcome::Failed {
                error: "Could not connect to the chatbot server".to_string(),
                session_expired: false,
            }
        );
        assert_eq!(
            send_chat(&backend, "a".to_string()).await,
            ChatOutcome::Failed {
                error: CHAT_FAILED.to_string(),
                session_expired: false,
            }
        );
        assert_eq!(
            send_chat(&backend, "a".to_string()).await,
            ChatOutcome::Failed {
                error: CHAT_UNREACHABLE.to_string(),
                session_expired: false,
            }
        );
    }

    #[tokio::test]
    async fn test_feedback_failure_is_swallowed() {
        let backend = MemoryBackend::new();
        backend.fail(Endpoint::Feedback, "offline");

        let record = FeedbackRecord {
            user_message: "hello".to_string(),
            bot_response: "hi".to_string(),
            rating: Rating::Good,
            comment: String::new(),
        };
        send_feedback(&backend, record.clone()).await;
        assert_eq!(backend.requests(), vec![Request::Feedback(record)]);
    }

    #[tokio::test]
    async fn test_switch_language() {
        let backend = MemoryBackend::new();
        backend
            .respond_ok(Endpoint::UpdateProfile, json!({}))
            .respond_status(Endpoint::UpdateProfile, 500, json!({}));

        assert_eq!(
            switch_language(&backend, Language::Hindi).await,
            LanguageOutcome::Switched
        );
        assert_eq!(
            switch_language(&backend, Language::Hindi).await,
            LanguageOutcome::Failed(LANGUAGE_FAILED.to_string())
        );
        assert_eq!(
            switch_language(&backend, Language::Hindi).await,
            LanguageOutcome::Failed(LANGUAGE_UNREACHABLE.to_string())
        );
        assert_eq!(
            backend.requests()[0],
            Request::UpdateProfile(ProfileUpdate::language(Language::Hindi))
        );
    }

    #[tokio::test]
    async fn test_chat_language() {
        let backend = MemoryBackend::new();
        backend
            .respond_ok(Endpoint::GetProfile, json!({ "preferred_language": "hi" }))
            .respond_ok(Endpoint::GetProfile, json!({}))
            .respond_status(
                Endpoint::GetProfile,
                401,
                json!({ "msg": "Missing or invalid token" }),
            );

        assert_eq!(chat_language(&backend).await, Some(Language::Hindi));
        assert_eq!(chat_language(&backend).await, Some(Language::English));
        assert_eq!(chat_language(&backend).await, None);
        // unreachable server: default language
        assert_eq!(chat_language(&backend).await, Some(Language::English));
    }
}
