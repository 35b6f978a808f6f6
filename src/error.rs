// src/error.rs
// =============================================================================
// Error type for the library side of repo-glance.
//
// Every failure the API layer can produce ends up as one GlanceError:
// - NotFound:       the API answered 404 (e.g. the user does not exist)
// - ReadmeNotFound: 404 on the README endpoint, an expected condition
// - Api:            any other non-2xx answer, with GitHub's message if given
// - Transport:      the request never produced a status (DNS, TLS, ...)
//                   or the body could not be read off the connection
// - InvalidResponse: a 2xx body that is not the JSON shape we expect
// - Decode:         README content was not valid base64
//
// The binary wraps these in anyhow::Error at the very top, but library
// callers get the typed enum so they can match on it.
// =============================================================================

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, GlanceError>;

/// Message used when the README endpoint answers 404
pub const README_NOT_FOUND: &str = "README not found for this repository";

#[derive(Debug, Error)]
pub enum GlanceError {
    /// 404 from the user or repository endpoints
    #[error("{message}")]
    NotFound { message: String },

    /// 404 from the README endpoint
    #[error("{}", README_NOT_FOUND)]
    ReadmeNotFound,

    /// Any other non-2xx response
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Network-level failure before a status was obtained,
    /// or a body we could not read
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Successful status, but the body did not match the expected schema
    #[error("unexpected response from GitHub: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// README content was not valid base64
    #[error("failed to decode README content: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Caller handed us something we refuse to send (e.g. empty username)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl GlanceError {
    /// HTTP status carried by this failure, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            GlanceError::NotFound { .. } | GlanceError::ReadmeNotFound => Some(404),
            GlanceError::Api { status, .. } => Some(*status),
            GlanceError::Transport(e) => e.status().map(|s| s.as_u16()),
            GlanceError::InvalidResponse(_)
            | GlanceError::Decode(_)
            | GlanceError::InvalidInput(_) => None,
        }
    }

    /// True for both flavours of 404
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GlanceError::NotFound { .. } | GlanceError::ReadmeNotFound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_for_api_error() {
        let err = GlanceError::Api {
            status: 403,
            message: "API rate limit exceeded".to_string(),
        };
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.to_string(), "API rate limit exceeded");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_readme_not_found_is_distinct_from_user_not_found() {
        let user = GlanceError::NotFound {
            message: "Not Found".to_string(),
        };
        let readme = GlanceError::ReadmeNotFound;

        // Same status, different call sites
        assert_eq!(user.status(), readme.status());
        assert!(matches!(user, GlanceError::NotFound { .. }));
        assert!(matches!(readme, GlanceError::ReadmeNotFound));
        assert_eq!(readme.to_string(), README_NOT_FOUND);
    }

    #[test]
    fn test_input_errors_have_no_status() {
        let err = GlanceError::InvalidInput("username is empty".to_string());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_schema_mismatch_is_its_own_variant() {
        let parse = serde_json::from_str::<Vec<u32>>("{\"message\": \"hi\"}").unwrap_err();
        let err = GlanceError::from(parse);

        assert!(matches!(err, GlanceError::InvalidResponse(_)));
        assert_eq!(err.status(), None);
        assert!(err.to_string().starts_with("unexpected response from GitHub"));
    }
}
