//! Repository Traits
//!
//! Interfaces for credential persistence. The concrete store (document
//! database, SQL, in-memory) lives with the external data layer; this
//! crate only consumes the stored strings.

use crate::domain::value_object::stored_credential::StoredCredential;
use crate::error::IdentityResult;

/// Credential store trait
///
/// Subjects are identified by an opaque id assigned by the surrounding
/// identity layer.
#[trait_variant::make(CredentialStore: Send)]
pub trait LocalCredentialStore {
    /// Load the credential record for a subject
    async fn find(&self, subject_id: &str) -> IdentityResult<Option<StoredCredential>>;

    /// Create or replace the credential record for a subject
    async fn upsert(
        &self,
        subject_id: &str,
        credential: &StoredCredential,
    ) -> IdentityResult<()>;
}
