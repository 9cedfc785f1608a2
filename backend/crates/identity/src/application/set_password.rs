//! Set Password Use Case
//!
//! Hashes a new secret and persists the credential record. Covers both
//! registration and password change; the record is replaced wholesale, so
//! a flow switch in configuration takes effect on the next set.

use std::sync::Arc;

use crate::application::config::{HashingFlow, IdentityConfig};
use crate::domain::repository::CredentialStore;
use crate::domain::value_object::{raw_secret::RawSecret, stored_credential::StoredCredential};
use crate::error::{IdentityError, IdentityResult};

/// Set password input
pub struct SetPasswordInput {
    /// Opaque subject identifier from the identity layer
    pub subject_id: String,
    /// New plaintext secret
    pub secret: String,
}

/// Set password use case
pub struct SetPasswordUseCase<S>
where
    S: CredentialStore,
{
    store: Arc<S>,
    config: Arc<IdentityConfig>,
}

impl<S> SetPasswordUseCase<S>
where
    S: CredentialStore,
{
    pub fn new(store: Arc<S>, config: Arc<IdentityConfig>) -> Self {
        Self { store, config }
    }

    pub async fn execute(&self, input: SetPasswordInput) -> IdentityResult<()> {
        // Validate before any hashing work
        let secret = RawSecret::new(input.secret)
            .map_err(|e| IdentityError::SecretValidation(e.to_string()))?;

        // bcrypt is CPU-bound and deliberately slow; keep it off the async
        // executor. The task is not cancellable mid-hash and runs to
        // completion even if the caller stops waiting.
        let config = Arc::clone(&self.config);
        let credential = tokio::task::spawn_blocking(move || match config.flow {
            HashingFlow::SelfSalted => StoredCredential::self_salted(&secret, &config.hash),
            HashingFlow::ExternallySalted => {
                StoredCredential::externally_salted(&secret, &config.hash)
            }
        })
        .await
        .map_err(|e| IdentityError::Internal(e.to_string()))??;

        self.store.upsert(&input.subject_id, &credential).await?;

        tracing::info!(subject_id = %input.subject_id, "Credential set");

        Ok(())
    }
}
