//! # Backend trait and its HTTP implementation
//!
//! [`Backend`] has one method per backend call. It is written with
//! return-position `impl Future` so that implementations can use plain `async fn`
//! and the futures need not be `Send` (wasm has a single thread).
//!
//! [`HttpBackend`] sends real requests with `reqwest`, which compiles to `fetch`
//! on wasm. The browser attaches the session cookie by itself on same-origin
//! requests; a backend on another origin needs fetch's `credentials: include`,
//! which [`HttpBackend::for_page`] switches on.
//! Requests have no timeout and are never retried.

use std::future::Future;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{
    ChatReply, ChatRequest, Credentials, ErrorBody, FeedbackRecord, Profile, ProfileUpdate,
    Registration,
};

/// The calls the backend exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Login,
    Register,
    Logout,
    GetProfile,
    UpdateProfile,
    Chat,
    Feedback,
}

impl Endpoint {
    pub fn method(self) -> Method {
        match self {
            Endpoint::GetProfile => Method::GET,
            Endpoint::UpdateProfile => Method::PUT,
            _ => Method::POST,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Login => "/login",
            Endpoint::Register => "/register",
            Endpoint::Logout => "/logout",
            Endpoint::GetProfile | Endpoint::UpdateProfile => "/profile",
            Endpoint::Chat => "/chat",
            Endpoint::Feedback => "/feedback",
        }
    }
}

/// Async interface to the WellBot backend.
pub trait Backend {
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<(), ApiError>>;
    fn register(&self, registration: &Registration)
        -> impl Future<Output = Result<(), ApiError>>;
    fn logout(&self) -> impl Future<Output = Result<(), ApiError>>;
    fn get_profile(&self) -> impl Future<Output = Result<Profile, ApiError>>;
    fn update_profile(&self, update: &ProfileUpdate)
        -> impl Future<Output = Result<(), ApiError>>;
    fn chat(&self, request: &ChatRequest) -> impl Future<Output = Result<ChatReply, ApiError>>;
    fn feedback(&self, record: &FeedbackRecord) -> impl Future<Output = Result<(), ApiError>>;
}

/// `reqwest`-backed [`Backend`].
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    include_credentials: bool,
}

impl HttpBackend {
    /// `base_url` is the scheme and host of the backend, e.g. `https://wellbot.example`.
    /// wasm `reqwest` needs absolute URLs, so the page origin is the usual value.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
            include_credentials: false,
        }
    }

    /// Backend as seen from a page served at `page_origin`. When the backend
    /// lives on another origin, every request carries the session cookie
    /// explicitly.
    pub fn for_page(base_url: impl Into<String>, page_origin: &str) -> Self {
        let mut backend = Self::new(base_url);
        let page_origin = page_origin.trim_end_matches('/');
        backend.include_credentials = !backend.base_url.eq_ignore_ascii_case(page_origin);
        backend
    }

    /// Whether requests ask fetch to send cookies cross-origin.
    pub fn includes_credentials(&self) -> bool {
        self.include_credentials
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    fn request(&self, endpoint: Endpoint) -> RequestBuilder {
        let request = self.client.request(endpoint.method(), self.url(endpoint));
        #[cfg(target_arch = "wasm32")]
        let request = if self.include_credentials {
            request.fetch_credentials_include()
        } else {
            request
        };
        request
    }

    /// Send the request and turn non-2xx responses into [`ApiError::Application`].
    async fn execute(
        &self,
        endpoint: Endpoint,
        request: RequestBuilder,
    ) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("{} {} failed: {}", endpoint.method(), endpoint.path(), e);
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Error bodies are best effort: a non-JSON body just means no server message.
        let body = match response.text().await {
            Ok(text) => serde_json::from_str::<ErrorBody>(&text).unwrap_or_default(),
            Err(_) => ErrorBody::default(),
        };
        tracing::warn!(
            "{} {} returned {}",
            endpoint.method(),
            endpoint.path(),
            status.as_u16()
        );
        Err(ApiError::Application {
            status: status.as_u16(),
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl Backend for HttpBackend {
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let request = self.request(Endpoint::Login).json(credentials);
        self.execute(Endpoint::Login, request).await.map(|_| ())
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        let request = self.request(Endpoint::Register).json(registration);
        self.execute(Endpoint::Register, request).await.map(|_| ())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let request = self.request(Endpoint::Logout);
        self.execute(Endpoint::Logout, request).await.map(|_| ())
    }

    async fn get_profile(&self) -> Result<Profile, ApiError> {
        let request = self.request(Endpoint::GetProfile);
        let response = self.execute(Endpoint::GetProfile, request).await?;
        Self::decode(response).await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        let request = self.request(Endpoint::UpdateProfile).json(update);
        self.execute(Endpoint::UpdateProfile, request).await.map(|_| ())
    }

    async fn chat(&self, message: &ChatRequest) -> Result<ChatReply, ApiError> {
        let request = self.request(Endpoint::Chat).json(message);
        let response = self.execute(Endpoint::Chat, request).await?;
        Self::decode(response).await
    }

    async fn feedback(&self, record: &FeedbackRecord) -> Result<(), ApiError> {
        let request = self.request(Endpoint::Feedback).json(record);
        self.execute(Endpoint::Feedback, request).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_table() {
        assert_eq!(Endpoint::GetProfile.method(), Method::GET);
        assert_eq!(Endpoint::UpdateProfile.method(), Method::PUT);
        assert_eq!(Endpoint::Logout.method(), Method::POST);
        assert_eq!(Endpoint::GetProfile.path(), Endpoint::UpdateProfile.path());
        assert_eq!(Endpoint::Feedback.path(), "/feedback");
    }

    #[test]
    fn test_urls_join_base_and_path() {
        let backend = HttpBackend::new("http://localhost:5000/");
        assert_eq!(backend.url(Endpoint::Chat), "http://localhost:5000/chat");
        assert_eq!(backend.url(Endpoint::Login), "http://localhost:5000/login");
    }

    #[test]
    fn test_same_origin_relies_on_browser_cookie() {
        let backend = HttpBackend::for_page("https://wellbot.test/", "https://wellbot.test");
        assert!(!backend.includes_credentials());
        assert!(!HttpBackend::new("https://wellbot.test").includes_credentials());
    }

    #[test]
    fn test_cross_origin_sends_credentials() {
        let backend = HttpBackend::for_page("http://localhost:5000", "http://localhost:8080");
        assert!(backend.includes_credentials());
        assert_eq!(backend.url(Endpoint::Chat), "http://localhost:5000/chat");

        // no page origin off the browser
        assert!(HttpBackend::for_page("http://localhost:5000", "").includes_credentials());
    }
}
