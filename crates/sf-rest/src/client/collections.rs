use tracing::{debug, instrument};

use crate::collections::{
    delete_ids, external_id_field, insert_request, reconcile_saved, update_request,
    upsert_request, InsertOptions, UpdateOptions,
};
use crate::error::Result;
use crate::sobject::{DeleteResult, SObject, SaveResult};

const COLLECTIONS_PATH: &str = "composite/sobjects";

impl super::SalesforceRestClient {
    /// Insert up to 200 records in one request.
    ///
    /// Results are in input order. Each successful record gets its id (when
    /// `options.set_id`) and has its modified set cleared; failed records
    /// are left untouched so they can be inspected and resent.
    #[instrument(skip(self, records), fields(sobject = T::api_name(), count = records.len()))]
    pub async fn insert<T: SObject>(
        &self,
        records: &mut [T],
        options: InsertOptions,
    ) -> Result<Vec<SaveResult>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }
        let request = insert_request(records, options.all_or_none)?;
        debug!(all_or_none = options.all_or_none, "Submitting collection insert");

        let results: Vec<SaveResult> = self.client.rest_post(COLLECTIONS_PATH, &request).await?;
        reconcile_saved(records, &results, options.set_id)?;
        Ok(results)
    }

    /// Update up to 200 records in one request.
    ///
    /// Sends only modified fields unless `options.send_all_fields` is set.
    /// Every record must have an Id.
    #[instrument(skip(self, records), fields(sobject = T::api_name(), count = records.len()))]
    pub async fn update<T: SObject>(
        &self,
        records: &mut [T],
        options: UpdateOptions,
    ) -> Result<Vec<SaveResult>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }
        let request = update_request(records, &options)?;
        debug!(
            all_or_none = options.all_or_none,
            send_all_fields = options.send_all_fields,
            "Submitting collection update"
        );

        let results: Vec<SaveResult> = self.client.rest_patch(COLLECTIONS_PATH, &request).await?;
        reconcile_saved(records, &results, false)?;
        Ok(results)
    }

    /// Upsert up to 200 records keyed on an external id field.
    ///
    /// `external_id` is a property key or API name of a field flagged as an
    /// external id on `T`. Bodies are built as for [`update`](Self::update),
    /// plus the external id value. Ids of created records are written back.
    #[instrument(skip(self, records), fields(sobject = T::api_name(), count = records.len()))]
    pub async fn upsert<T: SObject>(
        &self,
        records: &mut [T],
        external_id: &str,
        options: UpdateOptions,
    ) -> Result<Vec<SaveResult>> {
        let field = external_id_field::<T>(external_id)?;
        if records.is_empty() {
            return Ok(Vec::new());
        }
        let request = upsert_request(records, field, &options)?;
        debug!(external_id = field, "Submitting collection upsert");

        let path = format!("{COLLECTIONS_PATH}/{}/{field}", T::api_name());
        let results: Vec<SaveResult> = self.client.rest_patch(&path, &request).await?;
        reconcile_saved(records, &results, true)?;
        Ok(results)
    }

    /// Delete up to 200 records in one request.
    ///
    /// Records are not modified; the results say which deletes succeeded.
    #[instrument(skip(self, records), fields(sobject = T::api_name(), count = records.len()))]
    pub async fn delete<T: SObject>(
        &self,
        records: &[T],
        all_or_none: bool,
    ) -> Result<Vec<DeleteResult>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }
        let ids = delete_ids(records)?;
        debug!(all_or_none, "Submitting collection delete");

        let request = self
            .client
            .delete(&self.client.rest_url(COLLECTIONS_PATH))
            .query("ids", ids)
            .query("allOrNone", all_or_none.to_string());
        self.client.send_json(request).await.map_err(Into::into)
    }
}
