use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned role. New friends are always `User`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FriendRole {
    #[default]
    User,
}

impl FriendRole {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            FriendRole::User => "user",
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "user" => Some(FriendRole::User),
            _ => None,
        }
    }
}

impl fmt::Display for FriendRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_user() {
        assert_eq!(FriendRole::default(), FriendRole::User);
    }

    #[test]
    fn test_friend_role_from_code() {
        assert_eq!(FriendRole::from_code("user"), Some(FriendRole::User));
        assert_eq!(FriendRole::from_code("root"), None);
    }

    #[test]
    fn test_friend_role_display() {
        assert_eq!(FriendRole::User.to_string(), "user");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&FriendRole::User).unwrap(), r#""user""#);
    }
}
