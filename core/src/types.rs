//! Wire DTOs for the items API.
//!
//! # Design
//! Defined independently of the server crate; the end-to-end test catches
//! schema drift. Fields mirror the server's nullable storage, so `name` and
//! `is_complete` are optional on items returned by create and update.

use serde::{Deserialize, Serialize};

/// A to-do item as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    pub name: Option<String>,
    pub is_complete: Option<bool>,
}

/// Request payload for `POST /items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    pub name: String,
    #[serde(default)]
    pub is_complete: bool,
}

/// Request payload for `PUT /items/{id}`. Omitted fields stay unchanged on
/// the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_complete: Option<bool>,
}
