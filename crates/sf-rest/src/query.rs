//! SOQL query result pages.

use serde::{Deserialize, Serialize};

/// One page of SOQL query results.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryResult<T> {
    /// Total number of records matching the query, across all pages.
    #[serde(rename = "totalSize")]
    pub total_size: u64,

    /// Whether this is the last page.
    pub done: bool,

    /// Instance-relative URL of the next page.
    #[serde(rename = "nextRecordsUrl", default)]
    pub next_records_url: Option<String>,

    pub records: Vec<T>,
}

impl<T> QueryResult<T> {
    /// The next page's URL, if there is one to fetch.
    pub fn next_page(&self) -> Option<&str> {
        if self.done {
            None
        } else {
            self.next_records_url.as_deref()
        }
    }
}
