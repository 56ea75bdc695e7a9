//! Authenticated Salesforce client with typed JSON methods.
//!
//! `SalesforceClient` binds an [`SfHttpClient`] to one org: instance URL,
//! bearer token and API version. Higher-level crates build on it.
//!
//! ## Security
//!
//! - Access tokens are redacted in Debug output
//! - Request bodies are skipped in tracing spans

use std::sync::{Arc, Mutex};

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument};

use crate::client::SfHttpClient;
use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::RequestBuilder;
use crate::response::{ApiUsage, Response};
use crate::DEFAULT_API_VERSION;

/// High-level Salesforce API client.
///
/// Cloning is cheap; clones share the connection pool and the recorded
/// API usage.
///
/// # Example
///
/// ```rust,ignore
/// use busbar_sf_client::SalesforceClient;
///
/// let client = SalesforceClient::new("https://myorg.my.salesforce.com", token)?
///     .with_api_version("61.0");
///
/// let limits: serde_json::Value = client.rest_get("limits").await?;
/// ```
#[derive(Clone)]
pub struct SalesforceClient {
    http: SfHttpClient,
    instance_url: String,
    access_token: String,
    api_version: String,
    api_usage: Arc<Mutex<Option<ApiUsage>>>,
}

impl std::fmt::Debug for SalesforceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesforceClient")
            .field("instance_url", &self.instance_url)
            .field("access_token", &"[REDACTED]")
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl SalesforceClient {
    /// Create a new Salesforce client with the given instance URL and access token.
    pub fn new(instance_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(instance_url, access_token, ClientConfig::default())
    }

    /// Create a new Salesforce client with custom configuration.
    ///
    /// Fails with [`ErrorKind::InvalidUrl`] unless the instance URL is an
    /// absolute `http` or `https` URL.
    pub fn with_config(
        instance_url: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let instance_url = instance_url.into().trim_end_matches('/').to_string();
        let parsed = url::Url::parse(&instance_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::new(ErrorKind::InvalidUrl(format!(
                "unsupported scheme '{}' in instance URL",
                parsed.scheme()
            ))));
        }

        Ok(Self {
            http: SfHttpClient::new(config)?,
            instance_url,
            access_token: access_token.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            api_usage: Arc::new(Mutex::new(None)),
        })
    }

    /// Build a client from environment variables.
    ///
    /// Reads `SF_INSTANCE_URL` and `SF_ACCESS_TOKEN` (or the `SALESFORCE_`
    /// prefixed forms), plus an optional `SF_API_VERSION` /
    /// `SALESFORCE_API_VERSION`.
    pub fn from_env() -> Result<Self> {
        let instance_url = env_var(&["SF_INSTANCE_URL", "SALESFORCE_INSTANCE_URL"])
            .ok_or_else(|| Error::new(ErrorKind::Config("SF_INSTANCE_URL is not set".into())))?;
        let access_token = env_var(&["SF_ACCESS_TOKEN", "SALESFORCE_ACCESS_TOKEN"])
            .ok_or_else(|| Error::new(ErrorKind::Config("SF_ACCESS_TOKEN is not set".into())))?;

        let client = Self::new(instance_url, access_token)?;
        Ok(match env_var(&["SF_API_VERSION", "SALESFORCE_API_VERSION"]) {
            Some(version) => client.with_api_version(version),
            None => client,
        })
    }

    /// Set the API version (e.g., "62.0"). A leading `v` is dropped.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        let version = version.into();
        self.api_version = version.trim_start_matches('v').to_string();
        self
    }

    /// Get the instance URL.
    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    /// Get the access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Get the API version.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// API usage reported by the most recent response that carried a
    /// `Sforce-Limit-Info` header.
    pub fn api_usage(&self) -> Option<ApiUsage> {
        self.api_usage.lock().ok().and_then(|usage| *usage)
    }

    /// Build the full URL for a path.
    ///
    /// Absolute URLs are returned as-is; anything else is joined to the
    /// instance URL. `nextRecordsUrl` values from query results are
    /// instance-relative paths and go through here.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.instance_url, path)
        } else {
            format!("{}/{}", self.instance_url, path)
        }
    }

    /// Build the REST API URL for a path.
    ///
    /// Example: `rest_url("sobjects/Account")` -> `{instance}/services/data/v62.0/sobjects/Account`
    pub fn rest_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!(
            "{}/services/data/v{}/{}",
            self.instance_url, self.api_version, path
        )
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        self.http.get(url).bearer_auth(&self.access_token)
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        self.http.post(url).bearer_auth(&self.access_token)
    }

    pub fn patch(&self, url: &str) -> RequestBuilder {
        self.http.patch(url).bearer_auth(&self.access_token)
    }

    pub fn delete(&self, url: &str) -> RequestBuilder {
        self.http.delete(url).bearer_auth(&self.access_token)
    }

    /// Execute a request and return the raw response, recording API usage.
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let response = self.http.execute(request).await?;
        if let Some(usage) = response.api_usage() {
            if self.http.config().enable_tracing {
                debug!(used = usage.used, limit = usage.limit, "API usage");
            }
            if let Ok(mut slot) = self.api_usage.lock() {
                *slot = Some(usage);
            }
        }
        Ok(response)
    }

    /// Execute a request and deserialize the JSON response.
    pub async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        self.execute(request).await?.json().await
    }

    /// GET request with JSON response deserialization.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let request = self.get(&self.url(url));
        self.send_json(request).await
    }

    /// GET request to REST API with JSON response.
    pub async fn rest_get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_json(&self.rest_url(path)).await
    }

    /// POST request with JSON body and response.
    #[instrument(skip(self, body), fields(url = %url))]
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.post(&self.url(url)).json(body)?;
        self.send_json(request).await
    }

    /// POST request to REST API with JSON body and response.
    pub async fn rest_post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.post_json(&self.rest_url(path), body).await
    }

    /// PATCH request with JSON body and response.
    ///
    /// Use `T = ()` for endpoints that answer `204 No Content`.
    #[instrument(skip(self, body), fields(url = %url))]
    pub async fn patch_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.patch(&self.url(url)).json(body)?;
        self.send_json(request).await
    }

    /// PATCH request to REST API with JSON body and response.
    pub async fn rest_patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.patch_json(&self.rest_url(path), body).await
    }
}

fn env_var(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}
