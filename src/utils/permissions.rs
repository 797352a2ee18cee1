//! Permission constants for the Platter API.
//!
//! Centralized permission strings so call sites never spell a capability
//! by hand.
//!
//! # Example
//!
//! ```ignore
//! use crate::utils::permissions;
//!
//! if auth_user.has_permission(permissions::ITEMS_CREATE) {
//!     // Create item
//! }
//! ```

/// Permission to create items
pub const ITEMS_CREATE: &str = "items:create";
/// Permission to update items
pub const ITEMS_UPDATE: &str = "items:update";
/// Permission to delete items
pub const ITEMS_DELETE: &str = "items:delete";

/// All item permissions, in the order they appear on tokens minted for
/// full-access callers.
pub const ALL_ITEM_PERMISSIONS: [&str; 3] = [ITEMS_CREATE, ITEMS_UPDATE, ITEMS_DELETE];
