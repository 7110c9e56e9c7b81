//! In-memory Collection Implementation
//!
//! Keeps friends in insertion order behind a `tokio::sync::RwLock`.
//! Enforces the same unique email constraint as the `friends` table.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entity::friend::Friend;
use crate::domain::repository::{FriendChanges, FriendCollection, FriendDocument, FriendFilter};
use crate::domain::value_object::friend_id::FriendId;
use crate::error::{FriendError, FriendResult};

/// Process-local friend collection. Clones share the same records.
#[derive(Clone, Default)]
pub struct InMemoryFriendCollection {
    friends: Arc<RwLock<Vec<Friend>>>,
}

impl InMemoryFriendCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.friends.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.friends.read().await.is_empty()
    }
}

impl FriendCollection for InMemoryFriendCollection {
    async fn insert_one(&self, document: &FriendDocument) -> FriendResult<Option<FriendId>> {
        let mut friends = self.friends.write().await;

        if friends.iter().any(|f| f.email == document.email) {
            return Err(FriendError::DuplicateEmail);
        }

        let friend_id = FriendId::new();
        friends.push(document.clone().into_friend(friend_id));

        Ok(Some(friend_id))
    }

    async fn update_one(&self, filter: &FriendFilter, changes: &FriendChanges) -> FriendResult<u64> {
        let mut friends = self.friends.write().await;

        let Some(index) = friends.iter().position(|f| filter.matches(f)) else {
            return Ok(0);
        };

        let taken = friends
            .iter()
            .enumerate()
            .any(|(i, f)| i != index && f.email == changes.email);
        if taken {
            return Err(FriendError::DuplicateEmail);
        }

        changes.apply_to(&mut friends[index]);
        Ok(1)
    }

    async fn delete_one(&self, filter: &FriendFilter) -> FriendResult<u64> {
        let mut friends = self.friends.write().await;

        match friends.iter().position(|f| filter.matches(f)) {
            Some(index) => {
                friends.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn find_one(&self, filter: &FriendFilter) -> FriendResult<Option<Friend>> {
        let friends = self.friends.read().await;
        Ok(friends.iter().find(|f| filter.matches(f)).cloned())
    }

    async fn find_all(&self, filter: &FriendFilter) -> FriendResult<Vec<Friend>> {
        let friends = self.friends.read().await;
        Ok(friends.iter().filter(|f| filter.matches(f)).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{
        email::Email,
        friend_password::FriendPassword,
        friend_role::FriendRole,
        person_name::{FirstName, LastName},
    };

    const HASH: &str = "$argon2id$v=19$m=8,t=1,p=1$c29tZXNhbHQ$aGFzaGhhc2hoYXNoaGFzaA";

    fn document(email: &str) -> FriendDocument {
        FriendDocument {
            first_name: FirstName::new("Jane").unwrap(),
            last_name: LastName::new("Doe").unwrap(),
            email: Email::new(email).unwrap(),
            password: FriendPassword::from_phc_string(HASH).unwrap(),
            role: FriendRole::User,
        }
    }

    fn changes(email: &str) -> FriendChanges {
        FriendChanges {
            first_name: FirstName::new("Janet").unwrap(),
            last_name: LastName::new("Roe").unwrap(),
            email: Email::new(email).unwrap(),
            password: FriendPassword::from_phc_string(HASH).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_distinct_ids() {
        let collection = InMemoryFriendCollection::new();

        let a = collection.insert_one(&document("a@x.com")).await.unwrap();
        let b = collection.insert_one(&document("b@x.com")).await.unwrap();

        assert!(a.is_some());
        assert_ne!(a, b);
        assert_eq!(collection.len().await, 2);
    }

    #[tokio::test]
    async fn test_unique_email() {
        let collection = InMemoryFriendCollection::new();
        collection.insert_one(&document("a@x.com")).await.unwrap();
        collection.insert_one(&document("b@x.com")).await.unwrap();

        let err = collection.insert_one(&document("a@x.com")).await.unwrap_err();
        assert!(matches!(err, FriendError::DuplicateEmail));

        // Renaming onto another friend's email is rejected too
        let err = collection
            .update_one(&FriendFilter::by_email("b@x.com"), &changes("a@x.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, FriendError::DuplicateEmail));

        // Keeping one's own email is fine
        let modified = collection
            .update_one(&FriendFilter::by_email("a@x.com"), &changes("a@x.com"))
            .await
            .unwrap();
        assert_eq!(modified, 1);
    }

    #[tokio::test]
    async fn test_find_and_delete() {
        let collection = InMemoryFriendCollection::new();
        collection.insert_one(&document("a@x.com")).await.unwrap();
        collection.insert_one(&document("b@x.com")).await.unwrap();

        let all = collection.find_all(&FriendFilter::All).await.unwrap();
        assert_eq!(all[0].email.as_str(), "a@x.com");
        assert_eq!(all[1].email.as_str(), "b@x.com");

        let found = collection
            .find_one(&FriendFilter::by_email("B@x.com"))
            .await
            .unwrap();
        assert_eq!(found.map(|f| f.email), Some(Email::from_db("b@x.com")));

        let filter = FriendFilter::by_email("a@x.com");
        assert_eq!(collection.delete_one(&filter).await.unwrap(), 1);
        assert_eq!(collection.delete_one(&filter).await.unwrap(), 0);
        assert!(collection.find_one(&filter).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_no_match() {
        let collection = InMemoryFriendCollection::new();
        let modified = collection
            .update_one(&FriendFilter::by_email("a@x.com"), &changes("b@x.com"))
            .await
            .unwrap();
        assert_eq!(modified, 0);
    }
}
