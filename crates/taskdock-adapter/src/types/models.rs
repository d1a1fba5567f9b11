/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// A single to-do item as stored by the server.
///
/// `id` is assigned by the server on creation and is the item's identity;
/// `label` and `is_done` are mutable. Extra response fields (e.g. an owner
/// back-reference) are ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub label: String,
    pub is_done: bool,
}
