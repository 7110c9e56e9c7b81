//! Shared Kernel
//!
//! Vocabulary shared by every backend crate:
//! - Unified error type, error kinds and result aliases
//! - Typed ID wrappers
//!
//! Only things with the same meaning everywhere belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
