//! Value Object Module

pub mod raw_secret;
pub mod stored_credential;
