//! Random Salt Generation

use rand::{RngCore, rngs::OsRng};

/// Default salt length in bytes (128 bits)
pub const DEFAULT_SALT_LEN: usize = 16;

/// Generate a fresh random salt, hex-encoded.
///
/// Draws `byte_length` bytes from the OS CSPRNG and returns them as a
/// lowercase hex string of `2 * byte_length` characters. `OsRng` treats
/// entropy-source failure as fatal, so this cannot return a weak value.
pub fn generate_salt(byte_length: usize) -> String {
    let mut bytes = vec![0u8; byte_length];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_salt_length() {
        assert_eq!(generate_salt(DEFAULT_SALT_LEN).len(), 32);
        assert_eq!(generate_salt(8).len(), 16);
        assert_eq!(generate_salt(0).len(), 0);
    }

    #[test]
    fn test_salt_is_lowercase_hex() {
        let salt = generate_salt(DEFAULT_SALT_LEN);
        assert!(salt.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_salt_not_all_zeros() {
        let salt = generate_salt(32);
        assert!(
            salt.chars().any(|c| c != '0'),
            "Random salt should not be all zeros"
        );
    }

    #[test]
    fn test_no_collisions_over_many_samples() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(
                seen.insert(generate_salt(DEFAULT_SALT_LEN)),
                "Duplicate salt generated"
            );
        }
    }
}
