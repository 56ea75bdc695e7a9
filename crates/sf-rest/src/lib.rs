//! # sf-rest
//!
//! Typed Salesforce REST client built on descriptor tables.
//!
//! ## Features
//!
//! - **SObject model** - typed records with DML serialization and modified-field tracking
//! - **SObject Collections** - insert, update, upsert and delete of up to 200 records
//! - **SOQL Query** - raw queries with pagination, or typed retrieval through `busbar-sf-soql`
//! - **SOSL Search** - Full-text search across objects
//! - **Describe** - Object and field metadata
//! - **Limits** - Org limits and per-response API usage
//! - **Invocable actions** - Custom Apex actions
//!
//! ## Example
//!
//! ```rust,ignore
//! use busbar_sf_rest::{InsertOptions, SalesforceRestClient, UpdateOptions};
//! use busbar_sf_soql::{Condition, QueryParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), busbar_sf_rest::Error> {
//!     let client = SalesforceRestClient::from_env()?;
//!
//!     let mut contacts: Vec<Contact> = client
//!         .retrieve(|f| {
//!             Ok(QueryParams::new()
//!                 .select(f.all())
//!                 .filter(Condition::eq(f.field("email")?, None::<String>)))
//!         })
//!         .await?;
//!
//!     for contact in &mut contacts {
//!         contact.set_email("unknown@example.com");
//!     }
//!     for chunk in contacts.chunks_mut(busbar_sf_rest::MAX_COLLECTION_SIZE) {
//!         let results = client.update(chunk, UpdateOptions::default()).await?;
//!         for failed in results.iter().filter(|r| !r.success) {
//!             eprintln!("{:?}", failed.errors);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod collections;
mod describe;
mod error;
mod query;
mod sobject;
mod types;

#[cfg(test)]
mod test_fixtures;

pub use client::SalesforceRestClient;

pub use collections::{
    delete_ids, ensure_batch_size, external_id_field, insert_request, reconcile_saved,
    update_request, upsert_request, CollectionRequest, InsertOptions, UpdateOptions,
    MAX_COLLECTION_SIZE,
};
pub use describe::{ChildRelationship, DescribeSObjectResult, FieldDescribe};
pub use error::{Error, ErrorKind, Result};
pub use query::QueryResult;
pub use sobject::{
    serialize_record, DeleteResult, DmlMode, ModifiedFields, SObject, SObjectAttributes,
    SalesforceError, SaveResult,
};
pub use types::{InvokableError, InvokableResult, Limit, Limits, SearchResult};

// Re-export dependencies for convenience
pub use busbar_sf_client::{ApiUsage, ClientConfig, ClientConfigBuilder, SalesforceClient};
pub use busbar_sf_soql::SObjectType;
