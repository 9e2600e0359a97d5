//! Comment records as served by the remote dataset.

use serde::{Deserialize, Serialize};

/// A comment attached to a single post. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}
