//! Friend Entity
//!
//! A registered friend as the store holds it, hash included. Anything that
//! leaves the process goes through [`FriendProfile`] instead.

use crate::domain::value_object::{
    email::Email,
    friend_id::FriendId,
    friend_password::FriendPassword,
    friend_role::FriendRole,
    person_name::{FirstName, LastName},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Friend {
    /// Store-assigned identifier
    pub id: FriendId,
    pub first_name: FirstName,
    pub last_name: LastName,
    /// Natural lookup key (trimmed, lowercased)
    pub email: Email,
    /// Argon2id hash, never plaintext
    pub password: FriendPassword,
    pub role: FriendRole,
}

impl Friend {
    /// Password-free view of this friend
    pub fn profile(&self) -> FriendProfile {
        FriendProfile {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }

    pub fn into_profile(self) -> FriendProfile {
        FriendProfile {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            role: self.role,
        }
    }
}

/// Friend without the password hash
#[derive(Debug, Clone, PartialEq)]
pub struct FriendProfile {
    pub id: FriendId,
    pub first_name: FirstName,
    pub last_name: LastName,
    pub email: Email,
    pub role: FriendRole,
}

impl From<Friend> for FriendProfile {
    fn from(friend: Friend) -> Self {
        friend.into_profile()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Friend {
        Friend {
            id: FriendId::new(),
            first_name: FirstName::new("Jane").unwrap(),
            last_name: LastName::new("Doe").unwrap(),
            email: Email::new("jane@x.com").unwrap(),
            password: FriendPassword::from_phc_string(
                "$argon2id$v=19$m=8,t=1,p=1$c29tZXNhbHQ$aGFzaGhhc2hoYXNoaGFzaA",
            )
            .unwrap(),
            role: FriendRole::User,
        }
    }

    #[test]
    fn test_profile_drops_password() {
        let friend = sample();
        let profile = friend.profile();

        assert_eq!(profile.id, friend.id);
        assert_eq!(profile.email.as_str(), "jane@x.com");
        assert_eq!(profile.first_name.as_str(), "Jane");
        assert_eq!(profile, FriendProfile::from(friend));
    }
}
