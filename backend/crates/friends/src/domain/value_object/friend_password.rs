//! Friend Password Value Objects
//!
//! Domain wrappers around `platform::password`:
//! - [`RawPassword`] is what the client sent (zeroized on drop)
//! - [`FriendPassword`] is what the store keeps (Argon2id PHC string)
//!
//! Hashing itself is done by an injected `CredentialHasher`, not here.

use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicy,
};
use std::fmt;

use super::field_error::FieldError;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// A new password chosen by the client, checked against `policy`
    pub fn new(raw: String, policy: &PasswordPolicy) -> Result<Self, FieldError> {
        ClearTextPassword::new(raw, policy)
            .map(Self)
            .map_err(FieldError::from_password_policy)
    }

    /// A candidate presented for verification
    ///
    /// Never rejected: a candidate that could not be a valid password simply
    /// fails to verify.
    pub fn candidate(raw: String) -> Self {
        Self(ClearTextPassword::unchecked(raw))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Friend Password (Hashed, for storage)
// ============================================================================

#[derive(Clone, PartialEq, Eq)]
pub struct FriendPassword(HashedPassword);

impl FriendPassword {
    /// Create from PHC string (from database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> Result<Self, PasswordHashError> {
        HashedPassword::from_phc_string(phc_string).map(Self)
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    pub(crate) fn inner(&self) -> &HashedPassword {
        &self.0
    }
}

impl From<HashedPassword> for FriendPassword {
    fn from(hashed: HashedPassword) -> Self {
        Self(hashed)
    }
}

impl fmt::Debug for FriendPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FriendPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

impl fmt::Display for FriendPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[HASHED_PASSWORD]")
    }
}
