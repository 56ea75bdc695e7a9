//! Salesforce REST API client.
//!
//! This client wraps `SalesforceClient` from `sf-client` and adds typed
//! query, retrieve, search, describe and SObject Collections operations.

use busbar_sf_client::{ClientConfig, SalesforceClient};

use crate::error::Result;

mod actions;
mod collections;
mod describe;
mod limits;
mod query;
mod search;

/// Salesforce REST API client.
///
/// - SOQL queries, raw or built from descriptor tables
/// - SOSL search
/// - Describe and limits
/// - Invocable Apex actions
/// - SObject Collections insert, update, upsert and delete
///
/// # Example
///
/// ```rust,ignore
/// use busbar_sf_rest::{InsertOptions, SalesforceRestClient, UpdateOptions};
///
/// let client = SalesforceRestClient::new(
///     "https://myorg.my.salesforce.com",
///     "access_token_here",
/// )?;
///
/// let mut contacts: Vec<Contact> = client
///     .retrieve(|f| Ok(QueryParams::new().select(f.all()).limit(10)))
///     .await?;
///
/// contacts[0].set_email("ada@example.com");
/// client.update(&mut contacts, UpdateOptions::default()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct SalesforceRestClient {
    client: SalesforceClient,
}

impl SalesforceRestClient {
    /// Create a new REST client with the given instance URL and access token.
    pub fn new(instance_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        let client = SalesforceClient::new(instance_url, access_token)?;
        Ok(Self { client })
    }

    /// Create a new REST client with custom HTTP configuration.
    pub fn with_config(
        instance_url: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let client = SalesforceClient::with_config(instance_url, access_token, config)?;
        Ok(Self { client })
    }

    /// Create a REST client from `SF_INSTANCE_URL` / `SF_ACCESS_TOKEN`.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            client: SalesforceClient::from_env()?,
        })
    }

    /// Create a REST client from an existing SalesforceClient.
    pub fn from_client(client: SalesforceClient) -> Self {
        Self { client }
    }

    /// Get the underlying SalesforceClient.
    pub fn inner(&self) -> &SalesforceClient {
        &self.client
    }

    pub fn instance_url(&self) -> &str {
        self.client.instance_url()
    }

    pub fn api_version(&self) -> &str {
        self.client.api_version()
    }

    /// Set the API version. SObject Collections need 42.0 or later.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.client = self.client.with_api_version(version);
        self
    }
}
