//! Stored Credential Value Object
//!
//! Persistence-facing credential record, tagged with the hashing flow that
//! produced it. The tag makes "verified with the wrong flow" bugs
//! unrepresentable: callers cannot pick a verify function, the record
//! dispatches to the one that matches how it was created.
//!
//! Serialized layout matches the existing credential store: a
//! `passwordHash` field, plus `passwordSalt` only for externally salted
//! records. The flow discriminator is recovered from the presence of
//! `passwordSalt` on load.

use std::fmt;

use credential::config::HashConfig;
use credential::password::{self, CredentialResult, HashShape};
use credential::salt::{DEFAULT_SALT_LEN, generate_salt};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::raw_secret::RawSecret;

/// Wire/storage representation of a credential record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CredentialRecord {
    password_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    password_salt: Option<String>,
}

/// Hashed credential, tagged with its hashing flow
///
/// Exactly one record variant is active per subject at any time; replacing
/// a secret replaces the whole record, never mutates it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CredentialRecord", into = "CredentialRecord")]
pub enum StoredCredential {
    /// Single self-describing hash string; bcrypt embedded its own salt
    SelfSalted {
        /// bcrypt hash string (`$2b$<cost>$...`)
        hash: String,
    },
    /// Hash of `secret || salt` with the hex salt stored alongside
    ExternallySalted {
        /// bcrypt hash string over the salted input
        hash: String,
        /// Hex salt concatenated onto the secret at hash time
        salt: String,
    },
}

impl StoredCredential {
    /// Hash a secret with bcrypt's internally generated salt.
    pub fn self_salted(secret: &RawSecret, config: &HashConfig) -> CredentialResult<Self> {
        let hash = password::hash_secret(secret.expose(), config)?;
        Ok(Self::SelfSalted { hash })
    }

    /// Generate a fresh external salt and hash `secret || salt`.
    ///
    /// A new salt is drawn for every credential-set event; salts are never
    /// reused across records or across password changes.
    pub fn externally_salted(secret: &RawSecret, config: &HashConfig) -> CredentialResult<Self> {
        let salt = generate_salt(DEFAULT_SALT_LEN);
        let hash = password::hash_secret_with_salt(secret.expose(), &salt, config)?;
        Ok(Self::ExternallySalted { hash, salt })
    }

    /// Verify a secret against this record, dispatching on the flow that
    /// created it. Returns only the match result.
    pub fn verify(&self, secret: &RawSecret) -> CredentialResult<bool> {
        match self {
            Self::SelfSalted { hash } => password::verify_secret(secret.expose(), hash),
            Self::ExternallySalted { hash, salt } => {
                password::verify_secret_with_salt(secret.expose(), salt, hash)
            }
        }
    }

    /// The stored hash string
    pub fn hash(&self) -> &str {
        match self {
            Self::SelfSalted { hash } | Self::ExternallySalted { hash, .. } => hash,
        }
    }

    /// The external salt, if this record was created with one
    pub fn salt(&self) -> Option<&str> {
        match self {
            Self::SelfSalted { .. } => None,
            Self::ExternallySalted { salt, .. } => Some(salt),
        }
    }
}

impl TryFrom<CredentialRecord> for StoredCredential {
    type Error = credential::password::CredentialError;

    fn try_from(record: CredentialRecord) -> Result<Self, Self::Error> {
        HashShape::parse(&record.password_hash)?;
        match record.password_salt {
            None => Ok(Self::SelfSalted {
                hash: record.password_hash,
            }),
            Some(salt) => {
                password::validate_salt(&salt)?;
                Ok(Self::ExternallySalted {
                    hash: record.password_hash,
                    salt,
                })
            }
        }
    }
}

impl From<StoredCredential> for CredentialRecord {
    fn from(credential: StoredCredential) -> Self {
        match credential {
            StoredCredential::SelfSalted { hash } => Self {
                password_hash: hash,
                password_salt: None,
            },
            StoredCredential::ExternallySalted { hash, salt } => Self {
                password_hash: hash,
                password_salt: Some(salt),
            },
        }
    }
}

impl fmt::Debug for StoredCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfSalted { .. } => f
                .debug_struct("SelfSalted")
                .field("hash", &"[HASH]")
                .finish(),
            Self::ExternallySalted { salt, .. } => f
                .debug_struct("ExternallySalted")
                .field("hash", &"[HASH]")
                .field("salt", salt)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use credential::password::CredentialError;

    fn fast_config() -> HashConfig {
        HashConfig::new(4).unwrap()
    }

    fn secret(s: &str) -> RawSecret {
        RawSecret::new(s.to_string()).unwrap()
    }

    #[test]
    fn test_self_salted_roundtrip() {
        let credential = StoredCredential::self_salted(&secret("mypw"), &fast_config()).unwrap();
        assert!(credential.salt().is_none());
        assert!(credential.verify(&secret("mypw")).unwrap());
        assert!(!credential.verify(&secret("other")).unwrap());
    }

    #[test]
    fn test_externally_salted_roundtrip() {
        let credential =
            StoredCredential::externally_salted(&secret("mypw"), &fast_config()).unwrap();
        assert_eq!(credential.salt().unwrap().len(), 32);
        assert!(credential.verify(&secret("mypw")).unwrap());
        assert!(!credential.verify(&secret("other")).unwrap());
    }

    #[test]
    fn test_serde_layout_self_salted() {
        let credential = StoredCredential::self_salted(&secret("mypw"), &fast_config()).unwrap();
        let json = serde_json::to_value(&credential).unwrap();
        assert!(json.get("passwordHash").is_some());
        assert!(json.get("passwordSalt").is_none());
    }

    #[test]
    fn test_serde_layout_externally_salted() {
        let credential =
            StoredCredential::externally_salted(&secret("mypw"), &fast_config()).unwrap();
        let json = serde_json::to_value(&credential).unwrap();
        assert!(json.get("passwordHash").is_some());
        assert!(json.get("passwordSalt").is_some());
    }

    #[test]
    fn test_serde_roundtrip_preserves_flow() {
        let original =
            StoredCredential::externally_salted(&secret("mypw"), &fast_config()).unwrap();
        let json = serde_json::to_string(&original).unwrap();
        let restored: StoredCredential = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
        assert!(restored.verify(&secret("mypw")).unwrap());
    }

    #[test]
    fn test_deserialize_rejects_corrupt_hash() {
        let result: Result<StoredCredential, _> =
            serde_json::from_str(r#"{"passwordHash": "not-a-bcrypt-hash"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_bad_salt() {
        let credential = StoredCredential::self_salted(&secret("mypw"), &fast_config()).unwrap();
        let json = format!(
            r#"{{"passwordHash": "{}", "passwordSalt": "not-hex"}}"#,
            credential.hash()
        );
        let result: Result<StoredCredential, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }

    #[test]
    fn test_corrupt_record_surfaces_distinct_error() {
        // Simulates a store whose hash column was damaged after validation
        let damaged = StoredCredential::SelfSalted {
            hash: "damaged".to_string(),
        };
        assert!(matches!(
            damaged.verify(&secret("mypw")),
            Err(CredentialError::CorruptHash)
        ));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let credential = StoredCredential::self_salted(&secret("mypw"), &fast_config()).unwrap();
        let debug = format!("{:?}", credential);
        assert!(debug.contains("[HASH]"));
        assert!(!debug.contains("$2b$"));
    }
}
