use busbar_sf_client::ApiUsage;
use tracing::instrument;

use crate::error::Result;
use crate::types::Limits;

impl super::SalesforceRestClient {
    /// Get the org's limits.
    #[instrument(skip(self))]
    pub async fn limits(&self) -> Result<Limits> {
        self.client.rest_get("limits").await.map_err(Into::into)
    }

    /// API usage from the latest response that reported it.
    ///
    /// Updated by every request, so this is usually fresher than calling
    /// [`limits`](Self::limits).
    pub fn api_usage(&self) -> Option<ApiUsage> {
        self.client.api_usage()
    }
}
