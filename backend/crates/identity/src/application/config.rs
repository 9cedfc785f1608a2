//! Application Configuration
//!
//! Configuration for the identity application layer. The bcrypt cost and
//! the hashing flow are injected per deployment; there is no module-level
//! mutable state to tune.

use credential::config::HashConfig;
use credential::password::CredentialResult;

/// Hashing flow applied when a credential is set or replaced
///
/// Existing records keep the flow they were created with; the verifier
/// dispatches on the record itself, not on this setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HashingFlow {
    /// Single self-describing hash string; bcrypt embeds its own salt
    #[default]
    SelfSalted,
    /// Hash of `secret || salt` with the hex salt stored alongside
    ExternallySalted,
}

/// Identity application configuration
#[derive(Debug, Clone, Default)]
pub struct IdentityConfig {
    /// Work factor for newly created hashes
    pub hash: HashConfig,
    /// Flow used for newly set credentials
    pub flow: HashingFlow,
}

impl IdentityConfig {
    /// Create a config with an explicit bcrypt cost
    pub fn with_cost(cost: u32) -> CredentialResult<Self> {
        Ok(Self {
            hash: HashConfig::new(cost)?,
            ..Self::default()
        })
    }

    /// Switch newly set credentials to the externally salted flow
    pub fn externally_salted(mut self) -> Self {
        self.flow = HashingFlow::ExternallySalted;
        self
    }
}
