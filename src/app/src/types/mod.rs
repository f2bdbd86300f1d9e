//! Domain-based type organization
//!
//! - request: remote request lifecycle
//! - reset: account-recovery reset types
//! - signup: signup verify step types

pub mod request;
pub mod reset;
pub mod signup;

pub use request::*;
pub use reset::*;
pub use signup::*;
