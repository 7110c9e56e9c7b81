//! Collection Trait
//!
//! Document-store style interface for friend records: exact-match filters,
//! single-document writes. Implementations live in the infrastructure layer.

use crate::domain::entity::friend::Friend;
use crate::domain::value_object::{
    email::Email,
    friend_id::FriendId,
    friend_password::FriendPassword,
    friend_role::FriendRole,
    person_name::{FirstName, LastName},
};
use crate::error::FriendResult;

/// Exact-match filter over friend records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FriendFilter {
    All,
    ByEmail(String),
}

impl FriendFilter {
    /// Filter on a lookup key, normalized like stored emails
    pub fn by_email(email: &str) -> Self {
        FriendFilter::ByEmail(Email::normalize(email))
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            FriendFilter::All => None,
            FriendFilter::ByEmail(email) => Some(email),
        }
    }

    pub fn matches(&self, friend: &Friend) -> bool {
        match self {
            FriendFilter::All => true,
            FriendFilter::ByEmail(email) => friend.email.as_str() == email,
        }
    }
}

/// A record to insert; the store assigns the id
#[derive(Debug, Clone)]
pub struct FriendDocument {
    pub first_name: FirstName,
    pub last_name: LastName,
    pub email: Email,
    pub password: FriendPassword,
    pub role: FriendRole,
}

impl FriendDocument {
    pub fn into_friend(self, id: FriendId) -> Friend {
        Friend {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password,
            role: self.role,
        }
    }
}

/// Fields overwritten by an update. Role and id are left alone.
#[derive(Debug, Clone)]
pub struct FriendChanges {
    pub first_name: FirstName,
    pub last_name: LastName,
    pub email: Email,
    pub password: FriendPassword,
}

impl FriendChanges {
    pub fn apply_to(&self, friend: &mut Friend) {
        friend.first_name = self.first_name.clone();
        friend.last_name = self.last_name.clone();
        friend.email = self.email.clone();
        friend.password = self.password.clone();
    }
}

/// Friend collection trait
#[trait_variant::make(FriendCollection: Send)]
pub trait LocalFriendCollection {
    /// Insert one document, returning the assigned id if the store reports one
    async fn insert_one(&self, document: &FriendDocument) -> FriendResult<Option<FriendId>>;

    /// Update the first matching document, returning the modified count
    async fn update_one(&self, filter: &FriendFilter, changes: &FriendChanges)
    -> FriendResult<u64>;

    /// Delete the first matching document, returning the deleted count
    async fn delete_one(&self, filter: &FriendFilter) -> FriendResult<u64>;

    async fn find_one(&self, filter: &FriendFilter) -> FriendResult<Option<Friend>>;

    /// All matching documents in insertion order
    async fn find_all(&self, filter: &FriendFilter) -> FriendResult<Vec<Friend>>;
}
