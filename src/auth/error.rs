use thiserror::Error;

/// Inline message the login surface shows when an email is not recognised.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// Errors from mutating session operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required registration field was absent or blank.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("session storage failed: {0:#}")]
    Storage(#[source] anyhow::Error),

    #[error("failed to serialize session: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AuthError {
    /// The single inline string the login form shows for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingField("userType") => "Please select a user type",
            Self::MissingField(_) => "Please fill in all required fields",
            Self::Storage(_) | Self::Serialize(_) => "Registration failed",
        }
    }
}

/// Why the durable session could not be loaded.
#[derive(Debug, Error)]
pub enum SessionLoadError {
    #[error("session storage unreadable: {0:#}")]
    Storage(#[source] anyhow::Error),

    /// Something is stored, but it is not a valid identity.
    #[error("stored session is corrupt: {reason}")]
    Corrupt { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages() {
        assert_eq!(
            AuthError::MissingField("userType").user_message(),
            "Please select a user type"
        );
        assert_eq!(
            AuthError::MissingField("email").user_message(),
            "Please fill in all required fields"
        );
        assert_eq!(
            AuthError::Storage(anyhow::anyhow!("disk full")).user_message(),
            "Registration failed"
        );
    }

    #[test]
    fn display_includes_context() {
        let err = AuthError::Storage(anyhow::anyhow!("disk full").context("writing slot"));
        let text = err.to_string();
        assert!(text.contains("writing slot"));
        assert!(text.contains("disk full"));

        let err = SessionLoadError::Corrupt {
            reason: "expected value".into(),
        };
        assert!(err.to_string().contains("corrupt"));
    }
}
