use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted catalog item. The identifier is assigned by the store and
/// never reused, even after deletion.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Item {
    pub id: i64,
    pub name: String,
    /// Price in minor currency units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payload for creating an item, and the whole-resource replacement body
/// for PUT. Deliberately unvalidated beyond its shape.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateItemDto {
    pub name: String,
    pub price: Option<i64>,
    pub description: Option<String>,
}
