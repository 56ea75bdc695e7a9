use busbar_sf_client::security::soql;
use serde::{de::DeserializeOwned, Serialize};
use tracing::instrument;

use crate::error::{Error, ErrorKind, Result};
use crate::types::InvokableResult;

#[derive(Serialize)]
struct ActionRequest<'a, I> {
    inputs: &'a [I],
}

impl super::SalesforceRestClient {
    /// Call an invocable Apex action with one input per invocation.
    ///
    /// Namespaced actions must include their prefix (`ns__ScoreLead`).
    /// Results are in input order.
    #[instrument(skip(self, inputs), fields(count = inputs.len()))]
    pub async fn invoke_action<I, O>(
        &self,
        action: &str,
        inputs: &[I],
    ) -> Result<Vec<InvokableResult<O>>>
    where
        I: Serialize,
        O: DeserializeOwned,
    {
        if !soql::is_safe_field_name(action) {
            return Err(Error::new(ErrorKind::InvalidName(action.to_string())));
        }
        let path = format!("actions/custom/apex/{action}");
        self.client
            .rest_post(&path, &ActionRequest { inputs })
            .await
            .map_err(Into::into)
    }
}
