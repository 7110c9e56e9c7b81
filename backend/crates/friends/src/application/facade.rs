//! Friends Facade
//!
//! Sits between the HTTP handlers and the collection. Validates payloads,
//! hashes passwords before they are stored and checks credentials.
//!
//! Every operation is one independent unit of work: at most one hashing
//! computation and one collection round trip. Consistency is the
//! collection's business.

use std::sync::Arc;

use platform::password::CredentialHasher;

use crate::application::config::FriendsConfig;
use crate::application::input::{FriendInput, ValidatedFriend};
use crate::domain::entity::friend::{Friend, FriendProfile};
use crate::domain::repository::{FriendChanges, FriendCollection, FriendDocument, FriendFilter};
use crate::domain::value_object::{
    friend_id::FriendId,
    friend_password::{FriendPassword, RawPassword},
    friend_role::FriendRole,
};
use crate::error::{FriendError, FriendResult};

pub struct FriendsFacade<C, H>
where
    C: FriendCollection + Send + Sync + 'static,
    H: CredentialHasher,
{
    collection: Arc<C>,
    hasher: Arc<H>,
    config: Arc<FriendsConfig>,
}

impl<C, H> Clone for FriendsFacade<C, H>
where
    C: FriendCollection + Send + Sync + 'static,
    H: CredentialHasher,
{
    fn clone(&self) -> Self {
        Self {
            collection: Arc::clone(&self.collection),
            hasher: Arc::clone(&self.hasher),
            config: Arc::clone(&self.config),
        }
    }
}

impl<C, H> FriendsFacade<C, H>
where
    C: FriendCollection + Send + Sync + 'static,
    H: CredentialHasher,
{
    pub fn new(collection: Arc<C>, hasher: Arc<H>, config: Arc<FriendsConfig>) -> Self {
        Self {
            collection,
            hasher,
            config,
        }
    }

    pub fn config(&self) -> &FriendsConfig {
        &self.config
    }

    /// Register a new friend and return the id the store assigned
    pub async fn add_friend(&self, input: FriendInput) -> FriendResult<FriendId> {
        let friend = input.validate(&self.config.password_policy)?;
        let password = self.hash_password(friend.password).await?;

        let document = FriendDocument {
            first_name: friend.first_name,
            last_name: friend.last_name,
            email: friend.email,
            password,
            role: FriendRole::default(),
        };

        let friend_id = self
            .collection
            .insert_one(&document)
            .await?
            .ok_or_else(|| FriendError::Internal("Store did not return an id".to_string()))?;

        tracing::info!(friend_id = %friend_id, email = %document.email, "Friend added");

        Ok(friend_id)
    }

    /// Overwrite the friend registered under `current_email`
    ///
    /// Returns the number of modified records. 0 means nothing matched.
    pub async fn edit_friend(&self, current_email: &str, input: FriendInput) -> FriendResult<u64> {
        let ValidatedFriend {
            first_name,
            last_name,
            email,
            password,
        } = input.validate(&self.config.password_policy)?;

        // Always rehashed, even if the password did not change
        let password = self.hash_password(password).await?;

        let filter = FriendFilter::by_email(current_email);
        let changes = FriendChanges {
            first_name,
            last_name,
            email,
            password,
        };

        let modified = self.collection.update_one(&filter, &changes).await?;

        tracing::info!(
            email = filter.email().unwrap_or_default(),
            new_email = %changes.email,
            modified,
            "Friend edited"
        );

        Ok(modified)
    }

    /// Returns `true` iff exactly one friend was removed
    pub async fn delete_friend(&self, email: &str) -> FriendResult<bool> {
        let filter = FriendFilter::by_email(email);
        let deleted = self.collection.delete_one(&filter).await?;

        tracing::info!(email = filter.email().unwrap_or_default(), deleted, "Friend deleted");

        Ok(deleted == 1)
    }

    /// All friends in store order, without password hashes
    pub async fn get_all_friends(&self) -> FriendResult<Vec<FriendProfile>> {
        let friends = self.collection.find_all(&FriendFilter::All).await?;
        Ok(friends.into_iter().map(Friend::into_profile).collect())
    }

    /// All friends including password hashes. Privileged callers only.
    pub async fn get_all_friend_records(&self) -> FriendResult<Vec<Friend>> {
        self.collection.find_all(&FriendFilter::All).await
    }

    pub async fn get_friend(&self, email: &str) -> FriendResult<Friend> {
        self.collection
            .find_one(&FriendFilter::by_email(email))
            .await?
            .ok_or(FriendError::NotFound)
    }

    /// The friend behind `email`, if `password` matches its stored hash
    ///
    /// Unknown email and wrong password both give `None`.
    pub async fn get_verified_friend(
        &self,
        email: &str,
        password: String,
    ) -> FriendResult<Option<Friend>> {
        let candidate = RawPassword::candidate(password);

        let Some(friend) = self
            .collection
            .find_one(&FriendFilter::by_email(email))
            .await?
        else {
            tracing::debug!("Credential check failed");
            return Ok(None);
        };

        let hasher = Arc::clone(&self.hasher);
        let stored = friend.password.clone();
        let verified =
            tokio::task::spawn_blocking(move || hasher.verify(candidate.inner(), stored.inner()))
                .await?;

        if !verified {
            tracing::debug!("Credential check failed");
            return Ok(None);
        }

        Ok(Some(friend))
    }

    async fn hash_password(&self, password: RawPassword) -> FriendResult<FriendPassword> {
        let hasher = Arc::clone(&self.hasher);
        let hashed = tokio::task::spawn_blocking(move || hasher.hash(password.inner())).await??;
        Ok(hashed.into())
    }
}
