use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::error::Result;
use crate::types::SearchResult;

impl super::SalesforceRestClient {
    /// Execute a SOSL search.
    ///
    /// # Security
    ///
    /// Escape user-provided search terms with
    /// `busbar_sf_client::security::soql::escape_string()`.
    #[instrument(skip(self))]
    pub async fn search<T: DeserializeOwned>(&self, sosl: &str) -> Result<SearchResult<T>> {
        let url = self
            .client
            .rest_url(&format!("search?q={}", urlencoding::encode(sosl)));
        self.client.get_json(&url).await.map_err(Into::into)
    }
}
