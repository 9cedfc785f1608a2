//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod set_password;
pub mod verify_password;

// Re-exports
pub use config::{HashingFlow, IdentityConfig};
pub use set_password::{SetPasswordInput, SetPasswordUseCase};
pub use verify_password::{VerifyPasswordInput, VerifyPasswordUseCase};
