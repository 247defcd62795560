//! # Client configuration: `wellbot.toml`
//!
//! The web package embeds a small TOML file and hands the parsed
//! [`ClientConfig`] to [`ClientProvider`](crate::ClientProvider).
//!
//! ```toml
//! [api]
//! base_url = ""            # empty = the page's own origin
//!
//! [pages]
//! chat = "/chat_page"
//! login = "/login_page"
//! register = "/register_page"
//! profile = "/profile_page"
//! ```
//!
//! Every field has a default, so a missing or empty file is equivalent to the
//! default configuration.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub pages: PagesConfig,
}

/// Where the backend lives.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme and host of the backend. Empty means the page origin. A backend on
    /// another origin must allow credentialed CORS requests from the page.
    #[serde(default)]
    pub base_url: String,
}

/// Navigation targets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PagesConfig {
    #[serde(default = "default_chat_page")]
    pub chat: String,
    #[serde(default = "default_login_page")]
    pub login: String,
    #[serde(default = "default_register_page")]
    pub register: String,
    #[serde(default = "default_profile_page")]
    pub profile: String,
}

fn default_chat_page() -> String {
    "/chat_page".to_string()
}

fn default_login_page() -> String {
    "/login_page".to_string()
}

fn default_register_page() -> String {
    "/register_page".to_string()
}

fn default_profile_page() -> String {
    "/profile_page".to_string()
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            chat: default_chat_page(),
            login: default_login_page(),
            register: default_register_page(),
            profile: default_profile_page(),
        }
    }
}

impl ClientConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "wellbot.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse, logging and falling back to the defaults on error.
    pub fn from_toml_or_default(s: &str) -> Self {
        match Self::from_toml(s) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Invalid {}, using defaults: {}", Self::filename(), e);
                Self::default()
            }
        }
    }

    /// Backend base URL, using `origin` when none is configured.
    pub fn base_url_or(&self, origin: &str) -> String {
        if self.api.base_url.trim().is_empty() {
            origin.to_string()
        } else {
            self.api.base_url.trim().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.pages.chat, "/chat_page");
        assert_eq!(config.pages.login, "/login_page");
        assert!(config.api.base_url.is_empty());
    }

    #[test]
    fn test_partial_override() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "http://localhost:5000"

            [pages]
            login = "/signin"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.pages.login, "/signin");
        assert_eq!(config.pages.chat, "/chat_page");
    }

    #[test]
    fn test_invalid_falls_back() {
        let config = ClientConfig::from_toml_or_default("[api\nbase_url = 3");
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_base_url_falls_back_to_origin() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url_or("https://wellbot.test"), "https://wellbot.test");

        let mut config = ClientConfig::default();
        config.api.base_url = "http://api.local ".to_string();
        assert_eq!(config.base_url_or("https://wellbot.test"), "http://api.local");
    }
}
