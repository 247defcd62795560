//! This crate contains all shared UI for the WellBot client: the widgets, the
//! per-widget state machines and the handlers that talk to the backend.

pub mod actions;
pub mod browser;
pub mod config;
pub mod transcript;

mod client;
pub use client::{use_client, ClientContext, ClientProvider};

pub use config::ClientConfig;

mod options;
pub use options::{AgeGroupSelect, LanguageSelect, AGE_GROUPS, LANGUAGES};

mod auth;
pub use auth::{LoginForm, LogoutButton, RegisterForm};

mod profile;
pub use profile::ProfileForm;

mod chat;
pub use chat::ChatPanel;

pub mod feedback;
pub use feedback::{FeedbackControls, FeedbackStage, FeedbackWidget};

pub mod language;
pub use language::{LanguageSwitch, LanguageToggle};

pub use transcript::{ChatMessage, Sender, Transcript};
