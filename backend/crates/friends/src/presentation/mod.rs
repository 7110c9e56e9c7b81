//! Presentation Layer
//!
//! HTTP handlers, DTOs, extractors, and router.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod router;

pub use handlers::FriendsAppState;
pub use router::{friends_router, friends_router_generic};
