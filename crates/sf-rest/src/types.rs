//! Response types for search, limits and invocable actions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Result of a SOSL search.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResult<T> {
    #[serde(rename = "searchRecords")]
    pub search_records: Vec<T>,
}

/// One entry of the org limits map (`DailyApiRequests`, `DataStorageMB`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Limit {
    #[serde(rename = "Max")]
    pub max: i64,
    #[serde(rename = "Remaining")]
    pub remaining: i64,
}

impl Limit {
    pub fn used(&self) -> i64 {
        self.max - self.remaining
    }
}

/// Org limits keyed by limit name.
///
/// Some entries carry nested per-application maps; only `Max` and
/// `Remaining` are kept.
pub type Limits = HashMap<String, Limit>;

/// Result of one input to an invocable action.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokableResult<O> {
    pub action_name: String,
    #[serde(default)]
    pub errors: Option<Vec<InvokableError>>,
    pub is_success: bool,
    pub output_values: Option<O>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokableError {
    pub status_code: String,
    pub message: String,
    #[serde(default)]
    pub fields: Vec<String>,
}
