//! Email Value Object
//!
//! A friend's email is their natural lookup key. Stored trimmed and
//! lowercased; lookups go through [`Email::normalize`] so they compare equal.

use serde::{Deserialize, Serialize};

use super::field_error::FieldError;

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Maximum local part length (per RFC 5321)
const LOCAL_PART_MAX_LENGTH: usize = 64;

/// Shortest top-level domain in use
const TLD_MIN_LENGTH: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl AsRef<str>) -> Result<Self, FieldError> {
        let email = Self::normalize(email.as_ref());

        if email.is_empty() {
            return Err(FieldError::Required { field: "email" });
        }

        if email.len() > EMAIL_MAX_LENGTH || !Self::is_valid_format(&email) {
            return Err(FieldError::InvalidEmail);
        }

        Ok(Self(email))
    }

    /// Canonical form used for storage and lookups
    ///
    /// No validation: a malformed lookup key simply matches nothing.
    pub fn normalize(email: &str) -> String {
        email.trim().to_lowercase()
    }

    fn is_valid_format(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if local.is_empty() || local.len() > LOCAL_PART_MAX_LENGTH {
            return false;
        }

        if local
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || c == '@')
        {
            return false;
        }

        if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
            return false;
        }

        // Domain: dot-separated labels of [a-z0-9-], at least two labels
        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 {
            return false;
        }

        // TLD: at least two characters, not purely numeric
        let tld = labels[labels.len() - 1];
        if tld.chars().count() < TLD_MIN_LENGTH || tld.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }

        labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_db(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
