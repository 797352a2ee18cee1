//! Utility modules for the Platter API.
//!
//! - [`errors`]: Application error type and HTTP response conversion
//! - [`jwt`]: JWT claims, token creation and verification
//! - [`permissions`]: Permission string constants

pub mod errors;
pub mod jwt;
pub mod permissions;
