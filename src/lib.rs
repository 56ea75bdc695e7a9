//! # busbar-sf-typed
//!
//! Typed Salesforce SDK: a SOQL builder driven by static field descriptors
//! and an SObject Collections client that keeps records in sync with what
//! the server saved.
//!
//! ## Crates
//!
//! - **busbar-sf-client** - HTTP transport, error mapping, API usage tracking, escaping helpers
//! - **busbar-sf-soql** - Field descriptors, field resolver, conditions and the query composer
//! - **busbar-sf-rest** - SObject model, query/retrieve, and batch insert/update/upsert/delete
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use busbar_sf_typed::rest::{InsertOptions, SalesforceRestClient};
//! use busbar_sf_typed::soql::{Condition, OrderBy, QueryParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SalesforceRestClient::from_env()?;
//!
//!     let accounts: Vec<Account> = client
//!         .retrieve(|f| {
//!             Ok(QueryParams::new()
//!                 .select(f.select(&["id", "name"])?)
//!                 .filter(Condition::in_list(f.field("industry")?, ["Energy", "Utilities"]))
//!                 .order_by(OrderBy::asc(f.field("name")?))
//!                 .limit(10))
//!         })
//!         .await?;
//!
//!     let mut contacts: Vec<Contact> = accounts.iter().map(Contact::primary_for).collect();
//!     let results = client.insert(&mut contacts, InsertOptions::default()).await?;
//!     println!("{} saved", results.iter().filter(|r| r.success).count());
//!     Ok(())
//! }
//! ```

#[cfg(feature = "client")]
pub use busbar_sf_client as client;
#[cfg(feature = "rest")]
pub use busbar_sf_rest as rest;
#[cfg(feature = "soql")]
pub use busbar_sf_soql as soql;

#[cfg(feature = "client")]
pub use busbar_sf_client::{ClientConfig, SalesforceClient};
#[cfg(feature = "rest")]
pub use busbar_sf_rest::{SObject, SalesforceRestClient};
#[cfg(feature = "soql")]
pub use busbar_sf_soql::{build_query, build_query_object, compose_query, SObjectType};
