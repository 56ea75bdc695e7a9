//! Entry points that tie the resolver, the callback and the composer together.

use crate::descriptor::{SObjectDescriptor, SObjectType};
use crate::error::Result;
use crate::query::{compose_query, QueryParams, SoqlQuery};
use crate::resolver::FieldResolver;

/// Build a query specification for `T`.
///
/// `build` gets a resolver bound to `T` and returns everything but the
/// `FROM` target, which is always `T`'s API name.
///
/// ```rust,ignore
/// let spec = build_query_object::<Contact, _>(|f| {
///     Ok(QueryParams::new()
///         .select(f.select(&["id", "last_name"])?)
///         .select([f.parent("account")?.field("name")?])
///         .filter(Condition::eq(f.field("email")?, "ada@example.com"))
///         .limit(1))
/// })?;
/// ```
pub fn build_query_object<T, F>(build: F) -> Result<SoqlQuery>
where
    T: SObjectType,
    F: FnOnce(&FieldResolver) -> Result<QueryParams>,
{
    build_query_object_for(T::descriptor(), build)
}

/// Build and compose a query for `T` in one step.
pub fn build_query<T, F>(build: F) -> Result<String>
where
    T: SObjectType,
    F: FnOnce(&FieldResolver) -> Result<QueryParams>,
{
    compose_query(&build_query_object::<T, F>(build)?)
}

/// [`build_query_object`] for a descriptor chosen at runtime.
pub fn build_query_object_for<F>(sobject: &'static SObjectDescriptor, build: F) -> Result<SoqlQuery>
where
    F: FnOnce(&FieldResolver) -> Result<QueryParams>,
{
    let resolver = FieldResolver::new(sobject);
    let params = build(&resolver)?;
    Ok(SoqlQuery::new(sobject.api_name, params))
}

/// [`build_query`] for a descriptor chosen at runtime.
pub fn build_query_for<F>(sobject: &'static SObjectDescriptor, build: F) -> Result<String>
where
    F: FnOnce(&FieldResolver) -> Result<QueryParams>,
{
    compose_query(&build_query_object_for(sobject, build)?)
}
