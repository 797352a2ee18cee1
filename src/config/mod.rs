//! Configuration modules for the Platter API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables with sensible development defaults.
//!
//! # Modules
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`jwt`]: JWT authentication configuration
//!
//! # Environment Variables
//!
//! See each submodule for variable names and defaults. `.env` files are
//! honored via dotenvy at startup.

pub mod cors;
pub mod jwt;
