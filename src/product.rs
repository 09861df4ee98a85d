//! Product - The catalog entity.

use serde::{Deserialize, Serialize};

/// One product in the catalog.
///
/// The serialized field names (`ID`, `Name`, `Type`, `Count`, `Price`) are
/// the persisted file format; snapshots written by earlier deployments of
/// the service decode unchanged. Products are never mutated in place — the
/// catalog only ever appends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned by the repository at creation time.
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "Name")]
    pub name: String,
    /// Product category. Serialized as `Type`.
    #[serde(rename = "Type")]
    pub kind: String,
    /// Stock count. Expected non-negative but not validated at this layer.
    #[serde(rename = "Count")]
    pub count: i64,
    #[serde(rename = "Price")]
    pub price: f64,
}
