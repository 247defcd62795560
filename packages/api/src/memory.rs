use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::backend::{Backend, Endpoint};
use crate::error::ApiError;
use crate::models::{
    ChatReply, ChatRequest, Credentials, ErrorBody, FeedbackRecord, Profile, ProfileUpdate,
    Registration,
};

/// A request as it was issued, body included.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Login(Credentials),
    Register(Registration),
    Logout,
    GetProfile,
    UpdateProfile(ProfileUpdate),
    Chat(ChatRequest),
    Feedback(FeedbackRecord),
}

impl Request {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Request::Login(_) => Endpoint::Login,
            Request::Register(_) => Endpoint::Register,
            Request::Logout => Endpoint::Logout,
            Request::GetProfile => Endpoint::GetProfile,
            Request::UpdateProfile(_) => Endpoint::UpdateProfile,
            Request::Chat(_) => Endpoint::Chat,
            Request::Feedback(_) => Endpoint::Feedback,
        }
    }
}

type Scripted = Result<Value, ApiError>;

/// In-process Backend for tests: records every request and answers from a
/// per-endpoint queue of scripted responses. An endpoint with nothing queued
/// fails with a transport error, like an unreachable server.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    responses: Arc<Mutex<HashMap<Endpoint, VecDeque<Scripted>>>>,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a 2xx response carrying `body`.
    pub fn respond_ok(&self, endpoint: Endpoint, body: Value) -> &Self {
        self.push(endpoint, Ok(body))
    }

    /// Queue a non-2xx response. `body` is decoded like a real error body.
    pub fn respond_status(&self, endpoint: Endpoint, status: u16, body: Value) -> &Self {
        let body = serde_json::from_value::<ErrorBody>(body).unwrap_or_default();
        self.push(endpoint, Err(ApiError::Application { status, body }))
    }

    /// Queue a transport failure.
    pub fn fail(&self, endpoint: Endpoint, reason: &str) -> &Self {
        self.push(endpoint, Err(ApiError::Transport(reason.to_string())))
    }

    /// Every request issued so far, in order.
    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, endpoint: Endpoint) -> Vec<Request> {
        self.requests()
            .into_iter()
            .filter(|r| r.endpoint() == endpoint)
            .collect()
    }

    fn push(&self, endpoint: Endpoint, response: Scripted) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .entry(endpoint)
            .or_default()
            .push_back(response);
        self
    }

    fn answer(&self, request: Request) -> Scripted {
        let endpoint = request.endpoint();
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .get_mut(&endpoint)
            .and_then(|queue| queue.pop_front())
            .unwrap_or_else(|| {
                Err(ApiError::Transport(format!(
                    "no response scripted for {}",
                    endpoint.path()
                )))
            })
    }

    fn answer_with<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        let body = self.answer(request)?;
        serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl Backend for MemoryBackend {
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.answer(Request::Login(credentials.clone())).map(|_| ())
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        self.answer(Request::Register(registration.clone())).map(|_| ())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.answer(Request::Logout).map(|_| ())
    }

    async fn get_profile(&self) -> Result<Profile, ApiError> {
        self.answer_with(Request::GetProfile)
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        self.answer(Request::UpdateProfile(update.clone())).map(|_| ())
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        self.answer_with(Request::Chat(request.clone()))
    }

    async fn feedback(&self, record: &FeedbackRecord) -> Result<(), ApiError> {
        self.answer(Request::Feedback(record.clone())).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_scripted_responses_are_consumed_in_order() {
        let backend = MemoryBackend::new();
        backend
            .respond_ok(Endpoint::Chat, json!({ "reply": "first" }))
            .respond_status(Endpoint::Chat, 503, json!({ "error": "Rasa is down" }));

        let request = ChatRequest {
            message: "hi".to_string(),
        };
        let reply = backend.chat(&request).await.unwrap();
        assert_eq!(reply.reply, "first");

        let err = backend.chat(&request).await.unwrap_err();
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.server_error(), Some("Rasa is down"));

        // Queue exhausted
        let err = backend.chat(&request).await.unwrap_err();
        assert!(err.is_transport());

        assert_eq!(backend.requests_to(Endpoint::Chat).len(), 3);
    }

    #[tokio::test]
    async fn test_undecodable_success_body() {
        let backend = MemoryBackend::new();
        backend.respond_ok(Endpoint::Chat, json!({ "unexpected": true }));

        let err = backend
            .chat(&ChatRequest {
                message: "hi".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_records_bodies() {
        let backend = MemoryBackend::new();
        backend.respond_ok(Endpoint::Logout, Value::Null);
        backend.logout().await.unwrap();
        backend.get_profile().await.unwrap_err();

        assert_eq!(backend.requests(), vec![Request::Logout, Request::GetProfile]);
    }
}
