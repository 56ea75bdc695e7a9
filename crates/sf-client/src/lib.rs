//! # sf-client
//!
//! HTTP transport for the typed Salesforce SDK.
//!
//! This crate is the only place that talks to the network. It provides:
//! - An authenticated client bound to an instance URL, access token and API version
//! - Typed JSON helpers for GET, POST, PATCH and DELETE
//! - Mapping of Salesforce error bodies into structured errors
//! - Tracking of the `Sforce-Limit-Info` API usage header
//! - Escaping helpers for SOQL literals and URL parameters
//!
//! Requests are issued once. There is no retry or backoff at this layer;
//! callers that want retries wrap the returned errors themselves.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │          busbar-sf-rest (query, retrieve, collections)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   SalesforceClient                          │
//! │  - Holds instance URL, bearer token, API version            │
//! │  - Typed JSON methods (get_json, post_json, patch_json...)  │
//! │  - Records the latest API usage header                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SfHttpClient                             │
//! │  - Single-attempt HTTP over reqwest                         │
//! │  - Status and error body handling                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use busbar_sf_client::SalesforceClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), busbar_sf_client::Error> {
//!     let client = SalesforceClient::from_env()?;
//!
//!     let limits: serde_json::Value = client.rest_get("limits").await?;
//!     println!("{limits}");
//!
//!     if let Some(usage) = client.api_usage() {
//!         println!("{} of {} API calls used", usage.used, usage.limit);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;
mod salesforce_client;
pub mod security;

pub use client::SfHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use request::{RequestBuilder, RequestMethod};
pub use response::{ApiUsage, Response};
pub use salesforce_client::SalesforceClient;

/// Default Salesforce API version
pub const DEFAULT_API_VERSION: &str = "62.0";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("busbar-sf-typed/", env!("CARGO_PKG_VERSION"));
