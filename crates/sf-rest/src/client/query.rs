use busbar_sf_soql::{build_query, compose_query, FieldResolver, QueryParams, SoqlQuery};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::query::QueryResult;
use crate::sobject::SObject;

impl super::SalesforceRestClient {
    fn query_url(&self, endpoint: &str, soql: &str) -> String {
        self.client
            .rest_url(&format!("{endpoint}?q={}", urlencoding::encode(soql)))
    }

    /// Execute a SOQL query and return the first page.
    ///
    /// # Security
    ///
    /// Queries built with [`retrieve`](Self::retrieve) or
    /// `busbar_sf_soql` escape string literals. When writing SOQL by hand,
    /// escape user input with `busbar_sf_client::security::soql::escape_string()`.
    #[instrument(skip(self))]
    pub async fn query<T: DeserializeOwned>(&self, soql: &str) -> Result<QueryResult<T>> {
        let url = self.query_url("query", soql);
        self.client.get_json(&url).await.map_err(Into::into)
    }

    /// Execute a SOQL query and follow `nextRecordsUrl` until the last page.
    #[instrument(skip(self))]
    pub async fn query_all<T: DeserializeOwned>(&self, soql: &str) -> Result<Vec<T>> {
        let first = self.query(soql).await?;
        self.collect_pages(first).await
    }

    /// Execute a SOQL query against `queryAll`, which also returns deleted
    /// and archived records. Returns the first page.
    #[instrument(skip(self))]
    pub async fn query_including_deleted<T: DeserializeOwned>(
        &self,
        soql: &str,
    ) -> Result<QueryResult<T>> {
        let url = self.query_url("queryAll", soql);
        self.client.get_json(&url).await.map_err(Into::into)
    }

    /// Fetch the page behind a `nextRecordsUrl`.
    #[instrument(skip(self))]
    pub async fn query_more<T: DeserializeOwned>(
        &self,
        next_records_url: &str,
    ) -> Result<QueryResult<T>> {
        self.client
            .get_json(next_records_url)
            .await
            .map_err(Into::into)
    }

    async fn collect_pages<T: DeserializeOwned>(&self, first: QueryResult<T>) -> Result<Vec<T>> {
        let mut next = first.next_page().map(str::to_string);
        let mut records = first.records;
        while let Some(url) = next {
            let page: QueryResult<T> = self.query_more(&url).await?;
            debug!(fetched = page.records.len(), total = page.total_size, "Fetched query page");
            next = page.next_page().map(str::to_string);
            records.extend(page.records);
        }
        Ok(records)
    }

    /// Compose `query` and fetch every matching record.
    #[instrument(skip(self, query), fields(sobject = %query.from))]
    pub async fn query_spec<T: DeserializeOwned>(&self, query: &SoqlQuery) -> Result<Vec<T>> {
        let soql = compose_query(query)?;
        self.query_all(&soql).await
    }

    /// Build a query for `T`, run it, and load every row as a `T`.
    ///
    /// `build` works as in [`busbar_sf_soql::build_query`]: it gets a
    /// resolver for `T` and returns the query without its `FROM`. Loaded
    /// records start with an empty modified set.
    ///
    /// ```rust,ignore
    /// let contacts: Vec<Contact> = client
    ///     .retrieve(|f| {
    ///         Ok(QueryParams::new()
    ///             .select(f.all())
    ///             .filter(Condition::eq(f.parent("account")?.field("name")?, "Acme")))
    ///     })
    ///     .await?;
    /// ```
    #[instrument(skip(self, build), fields(sobject = T::api_name()))]
    pub async fn retrieve<T, F>(&self, build: F) -> Result<Vec<T>>
    where
        T: SObject,
        F: FnOnce(&FieldResolver) -> busbar_sf_soql::Result<QueryParams>,
    {
        let soql = build_query::<T, F>(build)?;
        debug!(soql = %soql, "Retrieving records");
        self.query_all(&soql).await
    }
}
