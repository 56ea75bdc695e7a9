//! SObject describe results.
//!
//! Only the parts needed to check or generate descriptor tables are kept:
//! object identity and capabilities, fields, and child relationships.

use busbar_sf_soql::SalesforceFieldType;
use serde::{Deserialize, Serialize};

/// Result of `sobjects/{name}/describe`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DescribeSObjectResult {
    pub name: String,
    pub label: String,
    #[serde(rename = "labelPlural")]
    pub label_plural: Option<String>,
    #[serde(rename = "keyPrefix")]
    pub key_prefix: Option<String>,
    #[serde(default)]
    pub custom: bool,
    #[serde(default)]
    pub createable: bool,
    #[serde(default)]
    pub updateable: bool,
    #[serde(default)]
    pub deletable: bool,
    #[serde(default)]
    pub queryable: bool,
    pub fields: Vec<FieldDescribe>,
    #[serde(rename = "childRelationships", default)]
    pub child_relationships: Vec<ChildRelationship>,
}

impl DescribeSObjectResult {
    /// Field by API name, case-insensitively.
    pub fn field(&self, name: &str) -> Option<&FieldDescribe> {
        self.fields.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Fields usable as an upsert key.
    pub fn external_id_fields(&self) -> impl Iterator<Item = &FieldDescribe> {
        self.fields.iter().filter(|f| f.external_id)
    }
}

/// Metadata for one field.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FieldDescribe {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub createable: bool,
    #[serde(default)]
    pub updateable: bool,
    #[serde(default)]
    pub nillable: bool,
    #[serde(rename = "defaultedOnCreate", default)]
    pub defaulted_on_create: bool,
    #[serde(rename = "externalId", default)]
    pub external_id: bool,
    #[serde(rename = "referenceTo", default)]
    pub reference_to: Vec<String>,
    #[serde(rename = "relationshipName")]
    pub relationship_name: Option<String>,
}

impl FieldDescribe {
    /// The typed field type, or `None` for types the descriptor model does
    /// not cover (`json`, `complexvalue`, ...).
    pub fn salesforce_type(&self) -> Option<SalesforceFieldType> {
        serde_json::from_value(serde_json::Value::String(self.field_type.clone())).ok()
    }

    /// Whether a new record must supply this field.
    pub fn is_required(&self) -> bool {
        self.createable && !self.nillable && !self.defaulted_on_create
    }
}

/// A child relationship: records of `child_sobject` pointing at this object
/// through `field`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChildRelationship {
    #[serde(rename = "childSObject")]
    pub child_sobject: String,
    pub field: String,
    #[serde(rename = "relationshipName")]
    pub relationship_name: Option<String>,
    #[serde(rename = "cascadeDelete", default)]
    pub cascade_delete: bool,
}
