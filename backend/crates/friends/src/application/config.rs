//! Application Configuration
//!
//! Configuration for the Friends application layer.

use platform::password::{Argon2Hasher, HashCost, PasswordHashError, PasswordPolicy};

/// Friends application configuration
#[derive(Debug, Clone, Default)]
pub struct FriendsConfig {
    /// Length bounds for new passwords (4..=30)
    pub password_policy: PasswordPolicy,
    /// Argon2id work factor for new hashes
    pub hash_cost: HashCost,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl FriendsConfig {
    /// Create config for development (no pepper)
    pub fn development() -> Self {
        Self::default()
    }

    /// Cheapest hashing argon2 allows, so tests stay fast
    pub fn testing() -> Self {
        Self {
            hash_cost: HashCost::minimal(),
            ..Self::default()
        }
    }

    /// Set the pepper
    pub fn with_pepper(mut self, pepper: Vec<u8>) -> Self {
        self.password_pepper = Some(pepper);
        self
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Build the Argon2id hasher this configuration describes
    pub fn hasher(&self) -> Result<Argon2Hasher, PasswordHashError> {
        Argon2Hasher::new(self.hash_cost, self.password_pepper.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::{ClearTextPassword, CredentialHasher};

    #[test]
    fn test_default_policy() {
        let config = FriendsConfig::default();
        assert_eq!(config.password_policy.min_length, 4);
        assert_eq!(config.password_policy.max_length, 30);
        assert!(config.pepper().is_none());
    }

    #[test]
    fn test_pepper_reaches_hasher() {
        let peppered = FriendsConfig::testing().with_pepper(b"pepper".to_vec());
        let plain = FriendsConfig::testing();

        let password = ClearTextPassword::unchecked("secret1".to_string());
        let hash = peppered.hasher().unwrap().hash(&password).unwrap();

        assert!(peppered.hasher().unwrap().verify(&password, &hash));
        assert!(!plain.hasher().unwrap().verify(&password, &hash));
    }

    #[test]
    fn test_invalid_cost_is_reported() {
        let config = FriendsConfig {
            hash_cost: HashCost {
                memory_kib: 0,
                iterations: 0,
                parallelism: 0,
            },
            ..FriendsConfig::testing()
        };
        assert!(config.hasher().is_err());
    }
}
