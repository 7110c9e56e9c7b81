//! Infrastructure Layer
//!
//! Collection implementations: PostgreSQL for deployments, in-memory for
//! tests and database-less development.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryFriendCollection;
pub use postgres::PgFriendCollection;
