//! Domain Layer
//!
//! Contains the friend entity, value objects, and the collection trait.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::friend::{Friend, FriendProfile};
pub use repository::{FriendChanges, FriendCollection, FriendDocument, FriendFilter};
