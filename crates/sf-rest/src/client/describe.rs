use busbar_sf_client::security::soql;
use busbar_sf_soql::SObjectType;
use tracing::instrument;

use crate::describe::DescribeSObjectResult;
use crate::error::{Error, ErrorKind, Result};

impl super::SalesforceRestClient {
    /// Describe an SObject by API name.
    #[instrument(skip(self))]
    pub async fn describe_sobject(&self, sobject: &str) -> Result<DescribeSObjectResult> {
        if !soql::is_safe_sobject_name(sobject) {
            return Err(Error::new(ErrorKind::InvalidName(sobject.to_string())));
        }
        let path = format!("sobjects/{sobject}/describe");
        self.client.rest_get(&path).await.map_err(Into::into)
    }

    /// Describe the SObject behind a typed record.
    pub async fn describe<T: SObjectType>(&self) -> Result<DescribeSObjectResult> {
        self.describe_sobject(T::api_name()).await
    }
}
