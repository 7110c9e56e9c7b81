//! Value Object Module

pub mod email;
pub mod field_error;
pub mod friend_id;
pub mod friend_password;
pub mod friend_role;
pub mod person_name;
