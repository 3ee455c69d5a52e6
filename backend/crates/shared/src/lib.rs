//! Shared Kernel - Domain-crossing minimal core
//!
//! The smallest vocabulary shared by every dashboard crate:
//! - Unified error type and result alias
//! - Error classification mapped onto HTTP status codes
//! - Problem-details HTTP rendering (feature `axum`)
//!
//! Only things that mean the same in every crate belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
