//! Veo client error types.

use thiserror::Error;

pub type VeoResult<T> = Result<T, VeoError>;

/// What a remote failure means for the caller.
///
/// Classified once, at the client boundary, from the operation error's
/// gRPC status string, numeric code, and message. Callers match on this
/// instead of pattern-matching error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Quota or rate limit hit; retrying later may succeed
    RateLimited,
    /// The configured credential is invalid, revoked, or unknown
    InvalidCredential,
    /// Remote-side hiccup; retrying may succeed
    Transient,
    /// Anything the classification does not recognize
    Unknown,
}

#[derive(Debug, Error)]
pub enum VeoError {
    #[error("API key is not configured. Please select an API key.")]
    CredentialMissing,

    #[error("Video generation failed: {message}")]
    GenerationFailed { kind: FailureKind, message: String },

    #[error("Video generation completed, but no video URL was returned.")]
    NoResultReturned,

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl VeoError {
    pub fn generation_failed(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::GenerationFailed {
            kind,
            message: message.into(),
        }
    }

    /// Whether this failure means the configured credential is bad and
    /// should be invalidated before any further attempt.
    pub fn is_invalid_credential(&self) -> bool {
        matches!(
            self,
            VeoError::GenerationFailed {
                kind: FailureKind::InvalidCredential,
                ..
            }
        )
    }
}

/// Translate a remote error payload into a [`FailureKind`].
///
/// The legacy clients matched on the literal "Requested entity was not
/// found." message to detect a bad key; that heuristic lives here and
/// nowhere else.
pub fn classify_failure(code: i64, status: Option<&str>, message: &str) -> FailureKind {
    match status {
        Some("RESOURCE_EXHAUSTED") => return FailureKind::RateLimited,
        Some("NOT_FOUND") | Some("PERMISSION_DENIED") | Some("UNAUTHENTICATED") => {
            return FailureKind::InvalidCredential
        }
        Some("UNAVAILABLE") | Some("DEADLINE_EXCEEDED") | Some("INTERNAL") => {
            return FailureKind::Transient
        }
        _ => {}
    }

    match code {
        429 => return FailureKind::RateLimited,
        401 | 403 | 404 => return FailureKind::InvalidCredential,
        500..=504 => return FailureKind::Transient,
        _ => {}
    }

    if message.contains("Requested entity was not found.") || message.contains("API key not valid")
    {
        return FailureKind::InvalidCredential;
    }

    FailureKind::Unknown
}
