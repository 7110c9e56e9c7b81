//! First and last name value objects
//!
//! Stored exactly as supplied. Nothing is trimmed or normalized.
//!
//! ## Invariants
//! - First name: 2-40 characters
//! - Last name: 2-50 characters

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::field_error::FieldError;

pub const FIRST_NAME_MIN_LENGTH: usize = 2;
pub const FIRST_NAME_MAX_LENGTH: usize = 40;
pub const LAST_NAME_MIN_LENGTH: usize = 2;
pub const LAST_NAME_MAX_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct FirstName(String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct LastName(String);

impl FirstName {
    pub fn new(input: impl AsRef<str>) -> Result<Self, FieldError> {
        validate_name(
            "firstName",
            input.as_ref(),
            FIRST_NAME_MIN_LENGTH,
            FIRST_NAME_MAX_LENGTH,
        )
        .map(Self)
    }

    /// Create from database value (assumed already validated)
    #[inline]
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl LastName {
    pub fn new(input: impl AsRef<str>) -> Result<Self, FieldError> {
        validate_name(
            "lastName",
            input.as_ref(),
            LAST_NAME_MIN_LENGTH,
            LAST_NAME_MAX_LENGTH,
        )
        .map(Self)
    }

    #[inline]
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate_name(
    field: &'static str,
    input: &str,
    min: usize,
    max: usize,
) -> Result<String, FieldError> {
    if input.is_empty() {
        return Err(FieldError::Required { field });
    }

    let length = input.chars().count();
    if length < min {
        return Err(FieldError::TooShort { field, min });
    }
    if length > max {
        return Err(FieldError::TooLong { field, max });
    }

    Ok(input.to_string())
}
