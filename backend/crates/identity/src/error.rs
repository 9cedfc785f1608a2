//! Identity Error Types
//!
//! Error variants for the credential subsystem's application layer.
//! Everything propagates synchronously to the immediate caller; the
//! uniform user-facing message ("invalid email or password") is owned
//! by the transport layer, not produced here.

use credential::password::CredentialError;
use thiserror::Error;

/// Identity-specific result type alias
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Identity-specific error variants
#[derive(Debug, Error)]
pub enum IdentityError {
    /// No credential record stored for the subject
    #[error("Credential not found")]
    CredentialNotFound,

    /// Secret failed validation before any hashing work
    #[error("Secret validation failed: {0}")]
    SecretValidation(String),

    /// Stored credential does not parse as a valid hash.
    /// Distinct from a mismatch so callers can trigger account recovery
    /// instead of reporting a wrong password.
    #[error("Stored credential is corrupt")]
    CorruptCredential,

    /// Failure inside the hashing primitives
    #[error("Credential error: {0}")]
    Credential(CredentialError),

    /// Error from the backing data store
    #[error("Store error: {0}")]
    Store(String),

    /// Internal error (e.g. a hashing worker thread died)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CredentialError> for IdentityError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::CorruptHash => IdentityError::CorruptCredential,
            other => IdentityError::Credential(other),
        }
    }
}
