//! Secret Hashing and Verification
//!
//! bcrypt-based password hashing with two supported flows:
//! - **Self-salted**: bcrypt generates and embeds its own salt; the output
//!   is a single self-describing `$2b$<cost>$...` string.
//! - **Externally salted**: a separately generated hex salt is concatenated
//!   onto the secret (`secret || salt`, no separator) before hashing, and
//!   stored alongside the resulting hash.
//!
//! ## Security Notes
//! - Digest comparison is done inside the bcrypt crate in constant time;
//!   it is never re-implemented byte-by-byte here.
//! - A stored hash that is not a well-formed bcrypt string surfaces as
//!   [`CredentialError::CorruptHash`], never as a silent mismatch, so
//!   callers can distinguish "wrong password" from "corrupted data".
//! - bcrypt only considers the first 72 bytes of its input; longer inputs
//!   are truncated by the algorithm itself.

use thiserror::Error;
use zeroize::Zeroizing;

use crate::config::{HashConfig, MAX_COST, MIN_COST};

/// Salt and digest portion of a bcrypt string: 22 + 31 radix-64 characters
const SALT_DIGEST_LEN: usize = 53;

// ============================================================================
// Error Types
// ============================================================================

/// Credential hashing/verification errors
#[derive(Debug, Error)]
pub enum CredentialError {
    /// Secret is empty; detected before any hashing work begins
    #[error("secret must not be empty")]
    EmptySecret,

    /// Salt is not a non-empty hex string
    #[error("invalid hex salt: {0}")]
    InvalidSalt(String),

    /// Requested cost is outside bcrypt's supported range
    #[error("cost {0} is outside the supported range 4..=31")]
    CostOutOfRange(u32),

    /// Stored hash is not a well-formed bcrypt string
    #[error("stored hash is not a valid bcrypt string")]
    CorruptHash,

    /// The bcrypt primitive itself failed
    #[error("bcrypt failure: {0}")]
    Hashing(#[from] bcrypt::BcryptError),
}

/// Credential result type alias
pub type CredentialResult<T> = Result<T, CredentialError>;

// ============================================================================
// Hashing
// ============================================================================

/// Hash a secret with bcrypt's internally generated salt.
///
/// Each call embeds a fresh random salt, so hashing the same secret twice
/// yields two different strings that both verify against it.
///
/// ## Returns
/// A 60-character self-describing hash string carrying the algorithm
/// identifier, cost, salt, and digest.
pub fn hash_secret(secret: &str, config: &HashConfig) -> CredentialResult<String> {
    ensure_secret(secret)?;
    Ok(bcrypt::hash(secret.as_bytes(), config.cost())?)
}

/// Hash a secret concatenated with an externally stored hex salt.
///
/// The hashed input is exactly `secret || salt` with no separator. The
/// concatenation order is load-bearing: an existing credential store hashed
/// this way can only be verified by preserving it.
pub fn hash_secret_with_salt(
    secret: &str,
    salt: &str,
    config: &HashConfig,
) -> CredentialResult<String> {
    ensure_secret(secret)?;
    validate_salt(salt)?;
    let salted = salted_input(secret, salt);
    Ok(bcrypt::hash(salted.as_bytes(), config.cost())?)
}

// ============================================================================
// Verification
// ============================================================================

/// Verify a secret against a self-salted stored hash.
///
/// Re-derives using the cost and salt embedded in `stored_hash`; the digest
/// comparison happens in constant time inside the bcrypt crate. Returns the
/// match result only, never the derived hash.
pub fn verify_secret(secret: &str, stored_hash: &str) -> CredentialResult<bool> {
    ensure_secret(secret)?;
    HashShape::parse(stored_hash)?;
    Ok(bcrypt::verify(secret.as_bytes(), stored_hash)?)
}

/// Verify a secret against an externally salted stored hash.
///
/// Recomputes over `secret || salt` and compares the same way as
/// [`verify_secret`].
pub fn verify_secret_with_salt(
    secret: &str,
    salt: &str,
    stored_hash: &str,
) -> CredentialResult<bool> {
    ensure_secret(secret)?;
    validate_salt(salt)?;
    HashShape::parse(stored_hash)?;
    let salted = salted_input(secret, salt);
    Ok(bcrypt::verify(salted.as_bytes(), stored_hash)?)
}

// ============================================================================
// Hash Format Inspection
// ============================================================================

/// Parsed structure of a bcrypt hash string
///
/// Used to tell corrupt stored credentials apart from plain mismatches
/// before any expensive re-derivation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashShape<'a> {
    version: &'a str,
    cost: u32,
    salt_and_digest: &'a str,
}

impl<'a> HashShape<'a> {
    /// Parse `$<version>$<cost>$<salt+digest>` or fail with
    /// [`CredentialError::CorruptHash`].
    pub fn parse(hash: &'a str) -> CredentialResult<Self> {
        let mut parts = hash.split('$');
        if parts.next() != Some("") {
            return Err(CredentialError::CorruptHash);
        }
        let version = match parts.next() {
            Some(v @ ("2a" | "2b" | "2x" | "2y")) => v,
            _ => return Err(CredentialError::CorruptHash),
        };
        let cost_field = parts.next().ok_or(CredentialError::CorruptHash)?;
        if cost_field.len() != 2 {
            return Err(CredentialError::CorruptHash);
        }
        let cost: u32 = cost_field
            .parse()
            .map_err(|_| CredentialError::CorruptHash)?;
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(CredentialError::CorruptHash);
        }
        let salt_and_digest = parts.next().ok_or(CredentialError::CorruptHash)?;
        if parts.next().is_some() {
            return Err(CredentialError::CorruptHash);
        }
        if salt_and_digest.len() != SALT_DIGEST_LEN
            || !salt_and_digest.chars().all(is_bcrypt_radix64)
        {
            return Err(CredentialError::CorruptHash);
        }
        Ok(Self {
            version,
            cost,
            salt_and_digest,
        })
    }

    /// Algorithm version identifier (e.g. `2b`)
    pub fn version(&self) -> &'a str {
        self.version
    }

    /// Embedded cost
    pub fn cost(&self) -> u32 {
        self.cost
    }
}

/// Check that a salt is a non-empty hex string.
pub fn validate_salt(salt: &str) -> CredentialResult<()> {
    if salt.is_empty() {
        return Err(CredentialError::InvalidSalt("salt is empty".to_string()));
    }
    hex::decode(salt).map_err(|e| CredentialError::InvalidSalt(e.to_string()))?;
    Ok(())
}

// ============================================================================
// Helper Functions
// ============================================================================

fn ensure_secret(secret: &str) -> CredentialResult<()> {
    if secret.is_empty() {
        return Err(CredentialError::EmptySecret);
    }
    Ok(())
}

/// Build the `secret || salt` input, wiped from memory on drop.
fn salted_input(secret: &str, salt: &str) -> Zeroizing<String> {
    Zeroizing::new(format!("{secret}{salt}"))
}

fn is_bcrypt_radix64(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '/'
}

// ============================================================================
// Tests
// ============================================================================
