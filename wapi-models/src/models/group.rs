//! Group entity model.

use serde::{Deserialize, Serialize};

/// A group chat the session participates in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Whether the session's account administers the group.
    #[serde(default, alias = "is_admin")]
    pub is_admin: bool,
    /// Whether the session's account may post (announcement groups restrict this).
    #[serde(default, alias = "can_post")]
    pub can_post: bool,
}
