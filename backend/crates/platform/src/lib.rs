//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations that carry no business meaning:
//! - Password policy checks (length, counted as supplied)
//! - Password hashing and verification (Argon2id) behind the
//!   [`password::CredentialHasher`] trait

pub mod password;
