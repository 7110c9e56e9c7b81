//! Friends Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Friend entity, value objects, collection trait
//! - `application/` - The friends facade, input validation, configuration
//! - `infra/` - PostgreSQL and in-memory collections
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Security Model
//! - Passwords hashed with Argon2id before they reach the store
//! - Stored hashes never leave the crate through HTTP responses
//! - Credential checks do not reveal whether the email or the password was wrong

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{FriendInput, FriendsConfig, FriendsFacade};
pub use error::{FriendError, FriendResult};
pub use infra::{InMemoryFriendCollection, PgFriendCollection};
pub use presentation::router::{friends_router, friends_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::friend::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
