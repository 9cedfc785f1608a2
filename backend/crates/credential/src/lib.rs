//! Credential Crate - Password Credential Primitives
//!
//! This crate provides the technical foundations for password credentials:
//! - Random salt generation (OS CSPRNG, hex-encoded)
//! - Adaptive one-way hashing (bcrypt, self-describing hash strings)
//! - Verification with constant-time digest comparison
//! - Injected cost configuration
//!
//! Everything here is pure and stateless: no I/O, no shared mutable state.
//! Hashing is deliberately CPU-expensive; callers in async contexts should
//! dispatch it to a blocking worker thread.

pub mod config;
pub mod password;
pub mod salt;

// Re-exports for convenience
pub use config::HashConfig;
pub use password::{CredentialError, CredentialResult};
pub use salt::generate_salt;
