//! Friend payload validation
//!
//! Fields are checked in a fixed order (first name, last name, password,
//! email) and the first violation is reported.

use platform::password::PasswordPolicy;

use crate::domain::value_object::{
    email::Email,
    friend_password::RawPassword,
    person_name::{FirstName, LastName},
};
use crate::error::FriendResult;

/// Unvalidated friend payload, as supplied by the caller
#[derive(Debug, Clone, Default)]
pub struct FriendInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Friend payload whose every field passed validation
#[derive(Debug)]
pub struct ValidatedFriend {
    pub first_name: FirstName,
    pub last_name: LastName,
    pub email: Email,
    pub password: RawPassword,
}

impl FriendInput {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(self, policy: &PasswordPolicy) -> FriendResult<ValidatedFriend> {
        let first_name = FirstName::new(&self.first_name)?;
        let last_name = LastName::new(&self.last_name)?;
        let password = RawPassword::new(self.password, policy)?;
        let email = Email::new(&self.email)?;

        Ok(ValidatedFriend {
            first_name,
            last_name,
            email,
            password,
        })
    }
}
