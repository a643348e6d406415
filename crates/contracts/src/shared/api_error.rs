use thiserror::Error;

/// Failure of a client operation.
///
/// None of these are fatal to the page: the caller keeps its previous state
/// and the user can retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Blocked before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// The server answered `{success: false, error}`.
    #[error("{0}")]
    Rejected(String),

    /// Network, HTTP status or decoding failure.
    #[error("Request failed: {0}")]
    Transport(String),
}

impl ApiError {
    /// Server rejection without a message falls back to a generic text.
    pub fn rejected(message: Option<String>) -> Self {
        match message {
            Some(m) if !m.trim().is_empty() => ApiError::Rejected(m),
            _ => ApiError::Rejected("Request was rejected by the server".to_string()),
        }
    }

    pub fn transport(err: impl std::fmt::Display) -> Self {
        ApiError::Transport(err.to_string())
    }

    /// Text shown to the user in an alert.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation(m) | ApiError::Rejected(m) => m.clone(),
            ApiError::Transport(_) => "Network error, please try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_falls_back_on_blank_message() {
        assert_eq!(
            ApiError::rejected(Some("Insufficient stock".into())),
            ApiError::Rejected("Insufficient stock".into())
        );
        assert!(matches!(ApiError::rejected(Some("  ".into())), ApiError::Rejected(m) if !m.trim().is_empty()));
        assert!(matches!(ApiError::rejected(None), ApiError::Rejected(_)));
    }

    #[test]
    fn test_transport_message_is_generic_for_users() {
        let err = ApiError::transport("connection reset");
        assert_eq!(err.to_string(), "Request failed: connection reset");
        assert_eq!(err.user_message(), "Network error, please try again.");
    }
}
