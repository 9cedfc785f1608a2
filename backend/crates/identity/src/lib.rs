//! Identity Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - value objects and repository traits
//! - `application/` - use cases and configuration
//!
//! ## Features
//! - Secret validation with automatic memory zeroization
//! - Flow-discriminated stored credentials (self-salted vs externally salted)
//! - Set/verify password use cases over an abstract credential store
//!
//! ## Security Model
//! - Secrets are hashed with bcrypt at an injected, per-deployment cost
//! - Hashing runs on blocking worker threads, off the async executor
//! - Corrupt stored hashes surface as a distinct error, never as "wrong password"
//! - Secret material is never logged and never appears in errors

pub mod application;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use application::config::{HashingFlow, IdentityConfig};
pub use application::set_password::{SetPasswordInput, SetPasswordUseCase};
pub use application::verify_password::{VerifyPasswordInput, VerifyPasswordUseCase};
pub use domain::repository::CredentialStore;
pub use domain::value_object::raw_secret::RawSecret;
pub use domain::value_object::stored_credential::StoredCredential;
pub use error::{IdentityError, IdentityResult};
