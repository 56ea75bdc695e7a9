//! SObject instance model: DML serialization, modified-field tracking and
//! per-record results.

use std::collections::BTreeSet;

use busbar_sf_soql::SObjectType;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, ErrorKind, Result};

/// The `attributes` block Salesforce attaches to every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SObjectAttributes {
    #[serde(rename = "type")]
    pub sobject_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl SObjectAttributes {
    pub fn new(sobject_type: impl Into<String>) -> Self {
        Self {
            sobject_type: sobject_type.into(),
            url: None,
        }
    }
}

/// Which fields a record carries when it is sent for DML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DmlMode {
    /// Createable fields that hold a value.
    Insert,
    /// Every updateable field, including nulls.
    Update,
    /// Updateable fields in the modified set.
    UpdateModifiedOnly,
}

/// Properties changed since the record was loaded or last saved.
///
/// Entries are descriptor property keys (`"last_name"`), not API names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifiedFields(BTreeSet<String>);

impl ModifiedFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, property: impl Into<String>) {
        self.0.insert(property.into());
    }

    pub fn contains(&self, property: &str) -> bool {
        self.0.contains(property)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ModifiedFields {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// A typed record that can be queried and saved.
///
/// Implementors serialize with API names as keys (`#[serde(rename = "Name")]`)
/// and keep their modified set out of the wire format with `#[serde(skip)]`.
/// Setters are expected to call [`ModifiedFields::mark`].
///
/// ```rust,ignore
/// #[derive(Debug, Default, Serialize, Deserialize)]
/// pub struct Account {
///     #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
///     pub id: Option<String>,
///     #[serde(rename = "Name", default)]
///     name: Option<String>,
///     #[serde(skip)]
///     modified: ModifiedFields,
/// }
///
/// impl Account {
///     pub fn set_name(&mut self, name: impl Into<String>) {
///         self.name = Some(name.into());
///         self.modified.mark("name");
///     }
/// }
/// ```
pub trait SObject: SObjectType + Serialize + DeserializeOwned {
    fn id(&self) -> Option<&str>;

    fn set_id(&mut self, id: String);

    fn modified(&self) -> &ModifiedFields;

    fn modified_mut(&mut self) -> &mut ModifiedFields;

    fn attributes(&self) -> SObjectAttributes {
        SObjectAttributes::new(Self::api_name())
    }

    /// The flat `ApiName -> value` body sent for `mode`.
    fn to_record(&self, mode: DmlMode) -> Result<Map<String, Value>> {
        serialize_record(self, mode)
    }
}

/// Default [`SObject::to_record`]: filters the serialized record through the
/// type's descriptor table.
///
/// Relationship and compound (address, location) fields are never sent.
/// Keys that are not in the descriptor table are dropped.
pub fn serialize_record<T: SObject>(sobject: &T, mode: DmlMode) -> Result<Map<String, Value>> {
    let mut source = match serde_json::to_value(sobject)? {
        Value::Object(map) => map,
        other => {
            return Err(Error::new(ErrorKind::Serialization(format!(
                "{} serialized to {other} instead of an object",
                T::api_name()
            ))))
        }
    };

    let mut record = Map::new();
    record.insert(
        "attributes".to_string(),
        serde_json::to_value(sobject.attributes())?,
    );

    for field in T::descriptor().fields() {
        if field.is_relationship() || field.field_type.is_compound() {
            continue;
        }
        let include = match mode {
            DmlMode::Insert => field.createable,
            DmlMode::Update => field.updateable,
            DmlMode::UpdateModifiedOnly => {
                field.updateable && sobject.modified().contains(field.property)
            }
        };
        if !include {
            continue;
        }
        match source.remove(field.api_name) {
            Some(Value::Null) if mode == DmlMode::Insert => {}
            Some(value) => {
                record.insert(field.api_name.to_string(), value);
            }
            None if mode == DmlMode::UpdateModifiedOnly => {
                record.insert(field.api_name.to_string(), Value::Null);
            }
            None => {}
        }
    }

    Ok(record)
}

/// Result of one record in an insert, update or upsert batch.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SaveResult {
    #[serde(default)]
    pub id: Option<String>,
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<SalesforceError>,
    #[serde(default)]
    pub warnings: Vec<Value>,
    /// Set by upsert: `true` when the record was inserted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<bool>,
}

/// Result of one record in a delete batch.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeleteResult {
    #[serde(default)]
    pub id: Option<String>,
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<SalesforceError>,
}

/// Salesforce error in operation results.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SalesforceError {
    #[serde(rename = "statusCode")]
    pub status_code: String,
    pub message: String,
    #[serde(default)]
    pub fields: Vec<String>,
}
