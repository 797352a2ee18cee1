//! # Platter API
//!
//! A menu item catalog REST API built with Rust and Axum, with public reads
//! and JWT-protected, permission-guarded writes.
//!
//! ## Overview
//!
//! - **Authentication**: bearer JWTs verified on every protected route
//! - **Permission-Based Access Control**: mutating operations require a
//!   named capability (`items:create`, `items:update`, `items:delete`)
//!   carried in the token claims
//! - **Item Catalog**: list, fetch, create, update-or-create, and delete
//!   operations over a single `items` resource
//!
//! ## Architecture
//!
//! The codebase follows a modular architecture inspired by NestJS:
//!
//! ```text
//! src/
//! ├── config/           # Configuration modules (JWT, CORS)
//! ├── middleware/       # Auth middleware and permission extractors
//! ├── modules/          # Feature modules
//! │   └── items/       # Item catalog
//! └── utils/           # Shared utilities (errors, JWT, permissions)
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: Business logic and storage
//! - `model.rs`: Data models and DTOs
//! - `router.rs`: Axum router configuration
//!
//! ## Request Pipeline
//!
//! Guards run strictly before handlers: the `AuthUser` extractor rejects
//! unauthenticated requests with 401, the `RequireItems*` extractors reject
//! callers lacking the required capability with 403, and only then does the
//! handler touch the item store. Every failure is an
//! [`utils::errors::AppError`] and becomes an HTTP response in exactly one
//! place.
//!
//! ## Quick Start
//!
//! ### Environment Variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! JWT_ACCESS_EXPIRY=3600
//! ALLOWED_ORIGINS=http://localhost:5173
//! ```
//!
//! ### API Documentation
//!
//! When the server is running, API documentation is available at:
//!
//! - Swagger UI: `http://localhost:3000/swagger-ui`
//! - Scalar: `http://localhost:3000/scalar`
//!
//! ## Security Considerations
//!
//! - JWT secrets should be cryptographically random
//! - Tokens are minted by the identity provider; this service only verifies
//!   them and never issues credentials itself

pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
