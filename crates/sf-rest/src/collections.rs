//! SObject Collections payloads and result reconciliation.
//!
//! A collection call carries at most [`MAX_COLLECTION_SIZE`] records of one
//! type. Results come back in request order and are matched to records by
//! position. Only records whose own result reports `success` are touched.

use busbar_sf_client::security::url as url_security;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{Error, ErrorKind, Result};
use crate::sobject::{DmlMode, SObject, SaveResult};

/// Most records a single SObject Collections request accepts.
pub const MAX_COLLECTION_SIZE: usize = 200;

/// Request body for SObject Collections create, update and upsert.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionRequest {
    #[serde(rename = "allOrNone")]
    pub all_or_none: bool,
    pub records: Vec<Map<String, Value>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertOptions {
    /// Roll back the whole batch if any record fails.
    pub all_or_none: bool,
    /// Write returned ids back onto the inserted records.
    pub set_id: bool,
}

impl Default for InsertOptions {
    fn default() -> Self {
        Self {
            all_or_none: true,
            set_id: true,
        }
    }
}

impl InsertOptions {
    pub fn all_or_none(mut self, all_or_none: bool) -> Self {
        self.all_or_none = all_or_none;
        self
    }

    pub fn set_id(mut self, set_id: bool) -> Self {
        self.set_id = set_id;
        self
    }
}

/// Options shared by update and upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOptions {
    /// Roll back the whole batch if any record fails.
    pub all_or_none: bool,
    /// Send every updateable field instead of only modified ones.
    pub send_all_fields: bool,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            all_or_none: true,
            send_all_fields: false,
        }
    }
}

impl UpdateOptions {
    pub fn all_or_none(mut self, all_or_none: bool) -> Self {
        self.all_or_none = all_or_none;
        self
    }

    pub fn send_all_fields(mut self, send_all_fields: bool) -> Self {
        self.send_all_fields = send_all_fields;
        self
    }

    fn dml_mode(&self) -> DmlMode {
        if self.send_all_fields {
            DmlMode::Update
        } else {
            DmlMode::UpdateModifiedOnly
        }
    }
}

/// Fail with [`ErrorKind::BatchTooLarge`] past the collection limit.
pub fn ensure_batch_size(size: usize) -> Result<()> {
    if size > MAX_COLLECTION_SIZE {
        return Err(Error::new(ErrorKind::BatchTooLarge {
            size,
            max: MAX_COLLECTION_SIZE,
        }));
    }
    Ok(())
}

fn record_id<T: SObject>(index: usize, record: &T) -> Result<&str> {
    let id = record
        .id()
        .ok_or_else(|| Error::new(ErrorKind::MissingRecordId { index }))?;
    if !url_security::is_valid_salesforce_id(id) {
        return Err(Error::new(ErrorKind::InvalidRecordId {
            index,
            id: id.to_string(),
        }));
    }
    Ok(id)
}

/// Body for a collection insert.
pub fn insert_request<T: SObject>(records: &[T], all_or_none: bool) -> Result<CollectionRequest> {
    ensure_batch_size(records.len())?;
    let records = records
        .iter()
        .map(|record| record.to_record(DmlMode::Insert))
        .collect::<Result<Vec<_>>>()?;
    Ok(CollectionRequest {
        all_or_none,
        records,
    })
}

/// Body for a collection update. Every record must carry a valid Id.
pub fn update_request<T: SObject>(
    records: &[T],
    options: &UpdateOptions,
) -> Result<CollectionRequest> {
    ensure_batch_size(records.len())?;
    let records = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let id = record_id(index, record)?;
            let mut body = record.to_record(options.dml_mode())?;
            body.insert("Id".to_string(), Value::String(id.to_string()));
            Ok(body)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(CollectionRequest {
        all_or_none: options.all_or_none,
        records,
    })
}

/// Resolve an upsert key to its API name.
///
/// Accepts the descriptor property (`account_number`) or the API name
/// (`AccountNumber__c`); the field must be flagged as an external id.
pub fn external_id_field<T: SObject>(field: &str) -> Result<&'static str> {
    let descriptor = T::descriptor();
    descriptor
        .field(field)
        .or_else(|| descriptor.field_by_api_name(field))
        .filter(|f| f.external_id || f.api_name == "Id")
        .map(|f| f.api_name)
        .ok_or_else(|| {
            Error::new(ErrorKind::InvalidExternalIdField {
                sobject: descriptor.api_name.to_string(),
                field: field.to_string(),
            })
        })
}

/// Body for a collection upsert keyed on `external_id_field` (an API name).
///
/// Built like an update body, except that the Id is optional and the
/// external id value is always sent, even when it is not modified.
pub fn upsert_request<T: SObject>(
    records: &[T],
    external_id_field: &str,
    options: &UpdateOptions,
) -> Result<CollectionRequest> {
    ensure_batch_size(records.len())?;
    let records = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let mut body = record.to_record(options.dml_mode())?;
            if let Some(id) = record.id() {
                body.insert("Id".to_string(), Value::String(id.to_string()));
            }
            if !body.contains_key(external_id_field) {
                let key = match serde_json::to_value(record)? {
                    Value::Object(mut full) => full.remove(external_id_field),
                    _ => None,
                };
                match key {
                    Some(value) if !value.is_null() => {
                        body.insert(external_id_field.to_string(), value);
                    }
                    _ if external_id_field != "Id" => {
                        return Err(Error::new(ErrorKind::MissingExternalId {
                            index,
                            field: external_id_field.to_string(),
                        }))
                    }
                    _ => {}
                }
            }
            Ok(body)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(CollectionRequest {
        all_or_none: options.all_or_none,
        records,
    })
}

/// Comma-joined ids for a collection delete.
pub fn delete_ids<T: SObject>(records: &[T]) -> Result<String> {
    ensure_batch_size(records.len())?;
    let ids = records
        .iter()
        .enumerate()
        .map(|(index, record)| record_id(index, record))
        .collect::<Result<Vec<_>>>()?;
    Ok(ids.join(","))
}

/// Apply save results to the records they belong to.
///
/// Successful records get their modified set cleared and, with `set_id`,
/// the returned id. Failed records are left exactly as they were. A result
/// array of the wrong length is rejected before anything is touched.
pub fn reconcile_saved<T: SObject>(
    records: &mut [T],
    results: &[SaveResult],
    set_id: bool,
) -> Result<()> {
    if records.len() != results.len() {
        return Err(Error::new(ErrorKind::ResultCountMismatch {
            expected: records.len(),
            actual: results.len(),
        }));
    }

    for (index, (record, result)) in records.iter_mut().zip(results).enumerate() {
        if !result.success {
            warn!(
                sobject = T::api_name(),
                index,
                errors = ?result.errors,
                "Record was not saved"
            );
            continue;
        }
        if set_id {
            if let Some(id) = &result.id {
                record.set_id(id.clone());
            }
        }
        record.modified_mut().clear();
    }
    Ok(())
}
