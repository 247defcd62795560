//! Errors returned by [`Backend`](crate::Backend) calls.
//!
//! The UI distinguishes only two classes. An **application** error is a completed
//! request with a non-2xx status; the server usually explains itself in the body and
//! that text is shown verbatim. A **transport** error means no usable response
//! arrived; the UI substitutes a fixed message. An undecodable success body counts
//! as transport-level.

use crate::models::ErrorBody;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("server responded with status {status}")]
    Application { status: u16, body: ErrorBody },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::Decode(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Application { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 401 and 422 mean the session cookie is missing, expired or malformed.
    pub fn is_session_invalid(&self) -> bool {
        matches!(self.status(), Some(401) | Some(422))
    }

    /// The server's `msg` field, if any.
    pub fn server_msg(&self) -> Option<&str> {
        match self {
            ApiError::Application { body, .. } => body.msg.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    /// The server's `error` field, falling back to `msg`.
    pub fn server_error(&self) -> Option<&str> {
        match self {
            ApiError::Application { body, .. } => body
                .error
                .as_deref()
                .filter(|m| !m.is_empty())
                .or_else(|| self.server_msg()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(status: u16, error: Option<&str>, msg: Option<&str>) -> ApiError {
        ApiError::Application {
            status,
            body: ErrorBody {
                error: error.map(str::to_string),
                msg: msg.map(str::to_string),
            },
        }
    }

    #[test]
    fn test_session_invalid_statuses() {
        assert!(app(401, None, None).is_session_invalid());
        assert!(app(422, None, None).is_session_invalid());
        assert!(!app(403, None, None).is_session_invalid());
        assert!(!app(500, None, None).is_session_invalid());
        assert!(!ApiError::Transport("offline".into()).is_session_invalid());
    }

    #[test]
    fn test_server_messages() {
        let err = app(400, Some("No message provided"), Some("ignored"));
        assert_eq!(err.server_error(), Some("No message provided"));
        assert_eq!(err.server_msg(), Some("ignored"));

        let err = app(401, None, Some("Token has expired"));
        assert_eq!(err.server_error(), Some("Token has expired"));

        let err = app(500, Some(""), None);
        assert_eq!(err.server_error(), None);
    }

    #[test]
    fn test_transport_classification() {
        assert!(ApiError::Transport("x".into()).is_transport());
        assert!(ApiError::Decode("x".into()).is_transport());
        assert!(!app(500, None, None).is_transport());
    }
}
