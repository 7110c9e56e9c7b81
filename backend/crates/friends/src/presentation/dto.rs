//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::FriendInput;
use crate::domain::entity::friend::{Friend, FriendProfile};
use crate::domain::value_object::field_error::FieldError;

// ============================================================================
// Add / Edit
// ============================================================================

/// Friend payload for add and edit
///
/// Fields are taken as raw JSON so that type errors become field errors.
/// Missing and `null` fields fail validation as "required".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FriendRequest {
    pub first_name: Option<Value>,
    pub last_name: Option<Value>,
    pub email: Option<Value>,
    pub password: Option<Value>,
}

impl TryFrom<FriendRequest> for FriendInput {
    type Error = FieldError;

    fn try_from(req: FriendRequest) -> Result<Self, Self::Error> {
        // Same field order as validation
        Ok(FriendInput {
            first_name: text_field("firstName", req.first_name)?,
            last_name: text_field("lastName", req.last_name)?,
            password: text_field("password", req.password)?,
            email: text_field("email", req.email)?,
        })
    }
}

fn text_field(field: &'static str, value: Option<Value>) -> Result<String, FieldError> {
    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(text)) => Ok(text),
        Some(_) => Err(FieldError::NotAString { field }),
    }
}

/// Add response
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// Edit response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifiedResponse {
    pub modified_count: u64,
}

/// Delete response
#[derive(Debug, Clone, Serialize)]
pub struct DeletedResponse {
    pub deleted: bool,
}

// ============================================================================
// Verify
// ============================================================================

/// Credential check request
///
/// Not validated: anything that is not a string simply fails to verify.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VerifyRequest {
    pub email: Option<Value>,
    pub password: Option<Value>,
}

impl VerifyRequest {
    pub fn into_credentials(self) -> (String, String) {
        (
            text_field("email", self.email).unwrap_or_default(),
            text_field("password", self.password).unwrap_or_default(),
        )
    }
}

// ============================================================================
// Friend
// ============================================================================

/// Friend as returned over HTTP. Never carries the password.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}

impl From<FriendProfile> for FriendResponse {
    fn from(profile: FriendProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            first_name: profile.first_name.to_string(),
            last_name: profile.last_name.to_string(),
            email: profile.email.into_db(),
            role: profile.role.code().to_string(),
        }
    }
}

impl From<Friend> for FriendResponse {
    fn from(friend: Friend) -> Self {
        friend.into_profile().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> FriendRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_missing_and_null_become_empty() {
        let input = FriendInput::try_from(request(json!({
            "firstName": null,
            "lastName": "Doe"
        })))
        .unwrap();

        assert_eq!(input.first_name, "");
        assert_eq!(input.last_name, "Doe");
        assert_eq!(input.email, "");
    }

    #[test]
    fn test_non_string_field() {
        let err = FriendInput::try_from(request(json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@x.com",
            "password": 123
        })))
        .unwrap_err();

        assert_eq!(err, FieldError::NotAString { field: "password" });
    }

    #[test]
    fn test_verify_request_non_strings_are_empty() {
        let req: VerifyRequest =
            serde_json::from_value(json!({ "email": "jane@x.com", "password": 123 })).unwrap();
        assert_eq!(
            req.into_credentials(),
            ("jane@x.com".to_string(), String::new())
        );
    }
}
