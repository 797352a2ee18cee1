//! Middleware modules for request processing.
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. `AuthUser` extractor validates the JWT and extracts claims
//! 3. Permission extractors check if the caller has required permissions
//! 4. Handler executes if all checks pass
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::{AuthUser, RequireItemsCreate};
//!
//! // Basic authentication (any valid token)
//! async fn whoami(auth_user: AuthUser) -> impl IntoResponse {
//!     let user_id = auth_user.user_id()?;
//!     // ...
//! }
//!
//! // Permission-based access control
//! async fn create_item(
//!     RequireItemsCreate(auth_user): RequireItemsCreate,
//! ) -> impl IntoResponse {
//!     // Only executes if the caller has "items:create" permission
//! }
//! ```

pub mod auth;
