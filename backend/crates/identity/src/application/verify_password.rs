//! Verify Password Use Case
//!
//! Loads the stored credential for a subject and checks a supplied secret
//! against it. Returns only a boolean; issuing a session on success is the
//! caller's concern.

use std::sync::Arc;

use crate::domain::repository::CredentialStore;
use crate::domain::value_object::raw_secret::RawSecret;
use crate::error::{IdentityError, IdentityResult};

/// Verify password input
pub struct VerifyPasswordInput {
    /// Opaque subject identifier from the identity layer
    pub subject_id: String,
    /// Plaintext secret to check
    pub secret: String,
}

/// Verify password use case
pub struct VerifyPasswordUseCase<S>
where
    S: CredentialStore,
{
    store: Arc<S>,
}

impl<S> VerifyPasswordUseCase<S>
where
    S: CredentialStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, input: VerifyPasswordInput) -> IdentityResult<bool> {
        let secret = RawSecret::new(input.secret)
            .map_err(|e| IdentityError::SecretValidation(e.to_string()))?;

        let credential = self
            .store
            .find(&input.subject_id)
            .await?
            .ok_or(IdentityError::CredentialNotFound)?;

        // The record carries its own flow tag and cost, so verification
        // needs no configuration. Same offload rules as hashing.
        let outcome = tokio::task::spawn_blocking(move || credential.verify(&secret))
            .await
            .map_err(|e| IdentityError::Internal(e.to_string()))?;

        match outcome {
            Ok(matched) => {
                if matched {
                    tracing::info!(subject_id = %input.subject_id, "Credential verified");
                } else {
                    tracing::debug!(subject_id = %input.subject_id, "Credential mismatch");
                }
                Ok(matched)
            }
            Err(e) => {
                let err = IdentityError::from(e);
                if matches!(err, IdentityError::CorruptCredential) {
                    tracing::warn!(
                        subject_id = %input.subject_id,
                        "Stored credential is corrupt"
                    );
                }
                Err(err)
            }
        }
    }
}
