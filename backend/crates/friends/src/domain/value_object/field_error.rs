//! Field validation errors
//!
//! Field names are the wire names (`firstName`, not `first_name`) since the
//! message goes back to the client as-is.

use std::fmt;

use platform::password::PasswordPolicyError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Missing, empty or whitespace only
    Required { field: &'static str },

    TooShort { field: &'static str, min: usize },

    TooLong { field: &'static str, max: usize },

    /// Present but not a JSON string
    NotAString { field: &'static str },

    InvalidEmail,
}

impl FieldError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::Required { field }
            | Self::TooShort { field, .. }
            | Self::TooLong { field, .. }
            | Self::NotAString { field } => *field,
            Self::InvalidEmail => "email",
        }
    }

    /// User-facing hint
    pub fn action(&self) -> &'static str {
        match self {
            Self::Required { .. } => "Please fill in every required field",
            Self::TooShort { .. } | Self::TooLong { .. } => "Please adjust the length of the field",
            Self::NotAString { .. } => "Please send the field as text",
            Self::InvalidEmail => "Please enter a valid email address",
        }
    }

    /// Map a password policy violation onto the `password` field
    pub fn from_password_policy(err: PasswordPolicyError) -> Self {
        const FIELD: &str = "password";
        match err {
            PasswordPolicyError::Empty => Self::Required { field: FIELD },
            PasswordPolicyError::TooShort { min, .. } => Self::TooShort { field: FIELD, min },
            PasswordPolicyError::TooLong { max, .. } => Self::TooLong { field: FIELD, max },
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field } => write!(f, "\"{field}\" is required"),
            Self::TooShort { field, min } => {
                write!(f, "\"{field}\" length must be at least {min} characters long")
            }
            Self::TooLong { field, max } => write!(
                f,
                "\"{field}\" length must be less than or equal to {max} characters long"
            ),
            Self::NotAString { field } => write!(f, "\"{field}\" must be a string"),
            Self::InvalidEmail => write!(f, "\"email\" must be a valid email"),
        }
    }
}

impl std::error::Error for FieldError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            FieldError::Required { field: "lastName" }.to_string(),
            r#""lastName" is required"#
        );
        assert_eq!(
            FieldError::TooShort {
                field: "firstName",
                min: 2
            }
            .to_string(),
            r#""firstName" length must be at least 2 characters long"#
        );
        assert_eq!(
            FieldError::TooLong {
                field: "lastName",
                max: 50
            }
            .to_string(),
            r#""lastName" length must be less than or equal to 50 characters long"#
        );
        assert_eq!(
            FieldError::NotAString { field: "password" }.to_string(),
            r#""password" must be a string"#
        );
    }

    #[test]
    fn test_from_password_policy() {
        let err = FieldError::from_password_policy(PasswordPolicyError::TooShort {
            min: 4,
            actual: 3,
        });
        assert_eq!(
            err,
            FieldError::TooShort {
                field: "password",
                min: 4
            }
        );
        assert_eq!(err.field(), "password");

        let err = FieldError::from_password_policy(PasswordPolicyError::Empty);
        assert_eq!(err, FieldError::Required { field: "password" });
    }
}
