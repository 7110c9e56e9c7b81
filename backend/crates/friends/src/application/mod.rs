//! Application Layer
//!
//! The friends facade and what it needs: input validation and configuration.

pub mod config;
pub mod facade;
pub mod input;

// Re-exports
pub use config::FriendsConfig;
pub use facade::FriendsFacade;
pub use input::{FriendInput, ValidatedFriend};
