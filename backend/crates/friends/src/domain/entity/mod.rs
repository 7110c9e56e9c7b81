//! Entity Module

pub mod friend;
