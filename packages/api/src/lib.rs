//! # API crate: the WellBot backend as seen from the browser
//!
//! Every page of the WellBot client talks to the same Flask backend over JSON. This
//! crate owns that contract: the request/response bodies, the error model, and the
//! [`Backend`] trait with its two implementations.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Wire bodies (`Credentials`, `Registration`, `Profile`, `FeedbackRecord`, ...) and the `Language`/`Rating` enums |
//! | [`error`] | [`ApiError`]: application-level (non-2xx) vs transport-level failures |
//! | [`backend`] | The [`Backend`] trait, the [`Endpoint`] table, and [`HttpBackend`] built on `reqwest` |
//! | [`memory`] | [`MemoryBackend`], a scripted in-process backend that records requests |
//!
//! ## Endpoints
//!
//! | Call | Method | Request body | Success body |
//! |------|--------|--------------|--------------|
//! | `/login` | POST | [`Credentials`] | ignored (sets the session cookie) |
//! | `/register` | POST | [`Registration`] | ignored |
//! | `/logout` | POST | none | ignored |
//! | `/profile` | GET | none | [`Profile`] |
//! | `/profile` | PUT | [`ProfileUpdate`] | ignored |
//! | `/chat` | POST | [`ChatRequest`] | [`ChatReply`] |
//! | `/feedback` | POST | [`FeedbackRecord`] | ignored |
//!
//! The session cookie is attached by the browser. Nothing in this crate reads or sets it.

pub mod backend;
pub mod error;
mod memory;
pub mod models;

pub use backend::{Backend, Endpoint, HttpBackend};
pub use error::ApiError;
pub use memory::{MemoryBackend, Request};
pub use models::{
    ChatReply, ChatRequest, Credentials, ErrorBody, FeedbackRecord, Language, Profile,
    ProfileUpdate, Rating, Registration,
};
