//! # sf-soql
//!
//! Typed SOQL construction over static entity metadata.
//!
//! - **Descriptors** - per-entity field tables ([`SObjectDescriptor`], [`FieldDescriptor`])
//! - **Field resolver** - checked field references, parent traversal, functions, child subqueries
//! - **Conditions** - AND/OR/NOT trees with comparison and list operators
//! - **Composer** - one canonical SOQL string per [`SoqlQuery`]
//!
//! Nothing here performs I/O. Composition is synchronous and only reads
//! `'static` descriptor data, so it can run from any thread.
//!
//! ## Example
//!
//! ```rust,ignore
//! use busbar_sf_soql::{build_query, Condition, OrderBy, QueryParams};
//!
//! let soql = build_query::<Contact, _>(|f| {
//!     Ok(QueryParams::new()
//!         .select(f.select(&["id", "last_name"])?)
//!         .select([f.parent("account")?.field("name")?])
//!         .filter(Condition::and([
//!             Condition::eq(f.field("last_name")?, "Lovelace"),
//!             Condition::in_list(f.parent("account")?.field("industry")?, ["Energy", "Utilities"]),
//!         ]))
//!         .order_by(OrderBy::asc(f.field("last_name")?))
//!         .limit(10))
//! })?;
//! // SELECT Id, LastName, Account.Name FROM Contact
//! //   WHERE LastName = 'Lovelace' AND Account.Industry IN ('Energy', 'Utilities')
//! //   ORDER BY LastName ASC LIMIT 10
//! ```

mod builder;
mod condition;
mod descriptor;
mod error;
mod field;
mod literal;
mod query;
mod resolver;

#[cfg(test)]
mod test_fixtures;

pub use builder::{build_query, build_query_for, build_query_object, build_query_object_for};
pub use condition::{Condition, ListOperand, ListOperator, LogicalOperator, Operator};
pub use descriptor::{FieldDescriptor, SObjectDescriptor, SObjectType, SalesforceFieldType};
pub use error::{Error, ErrorKind, Result};
pub use field::{FieldRef, FunctionField, SoqlFunction};
pub use literal::Literal;
pub use query::{
    compose_query, ForClause, GroupBy, GroupByKind, NullsOrder, OrderBy, QueryParams, SoqlQuery,
    SortDirection, UpdateClause,
};
pub use resolver::FieldResolver;
