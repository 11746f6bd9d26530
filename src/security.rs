//! Credential hashing.
//!
//! The rest of the application treats this as an opaque one-way function:
//! deterministic, collision-resistant in practice, identical for account
//! passwords and PINs. Lookups compare stored hashes by exact (ordinal)
//! string equality, so the output must be stable across runs and platforms.

/// Hashes a secret (password or PIN) to a lowercase hex digest.
pub fn hash_secret(plaintext: &str) -> String {
    blake3::hash(plaintext.as_bytes()).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(hash_secret("Passw0rd!"), hash_secret("Passw0rd!"));
    }

    #[test]
    fn test_hash_differs_by_input() {
        assert_ne!(hash_secret("1234"), hash_secret("4321"));
        assert_ne!(hash_secret("Passw0rd!"), hash_secret("passw0rd!"));
    }

    #[test]
    fn test_hash_is_hex_encoded() {
        let hash = hash_secret("1234");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
