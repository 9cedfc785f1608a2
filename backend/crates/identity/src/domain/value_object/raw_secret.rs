//! Raw Secret Value Object
//!
//! Plaintext secret from user input. Never persisted; exists only for the
//! lifetime of a single request. Memory is zeroized on drop and `Debug`
//! output is redacted.
//!
//! Validation is deliberately minimal: the existing credential store
//! accepted arbitrary non-empty secrets, and tightening the policy here
//! (length minimums, normalization) would lock those users out.

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretPolicyError {
    /// Secret is empty or contains only whitespace
    #[error("Secret cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,
}

/// Plaintext secret with automatic memory zeroization
///
/// Does not implement `Clone`, so accidental copies of secret material
/// cannot outlive the request that carried it.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct RawSecret(String);

impl RawSecret {
    /// Create a new raw secret, rejecting empty input.
    pub fn new(raw: String) -> Result<Self, SecretPolicyError> {
        if raw.trim().is_empty() {
            return Err(SecretPolicyError::EmptyOrWhitespace);
        }
        Ok(Self(raw))
    }

    /// Access the plaintext for hashing. Crate-internal so every use of the
    /// secret goes through the hashing primitives.
    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RawSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawSecret").field(&"[REDACTED]").finish()
    }
}
