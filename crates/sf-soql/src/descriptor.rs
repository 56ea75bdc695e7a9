//! Static field metadata for entity types.
//!
//! Descriptor tables are plain `const`/`static` data, usually emitted by a
//! code generator from an org's describe output:
//!
//! ```rust
//! use busbar_sf_soql::{FieldDescriptor, SObjectDescriptor, SObjectType, SalesforceFieldType};
//!
//! struct Account;
//!
//! static ACCOUNT: SObjectDescriptor = SObjectDescriptor::new(
//!     "Account",
//!     &[
//!         FieldDescriptor::new("id", "Id", SalesforceFieldType::Id),
//!         FieldDescriptor::new("name", "Name", SalesforceFieldType::String)
//!             .editable()
//!             .with_required(true),
//!     ],
//! );
//!
//! impl SObjectType for Account {
//!     fn descriptor() -> &'static SObjectDescriptor {
//!         &ACCOUNT
//!     }
//! }
//!
//! assert_eq!(Account::api_name(), "Account");
//! assert_eq!(ACCOUNT.field("name").map(|f| f.api_name), Some("Name"));
//! ```

use serde::{Deserialize, Serialize};

/// Wire type of a field as reported by describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalesforceFieldType {
    Date,
    DateTime,
    Boolean,
    Double,
    Integer,
    Currency,
    Reference,
    String,
    Picklist,
    TextArea,
    Address,
    Phone,
    Url,
    MultiPicklist,
    Percent,
    Email,
    Int,
    Location,
    Id,
    Base64,
    AnyType,
    Time,
    EncryptedString,
    ComboBox,
}

impl SalesforceFieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Boolean => "boolean",
            Self::Double => "double",
            Self::Integer => "integer",
            Self::Currency => "currency",
            Self::Reference => "reference",
            Self::String => "string",
            Self::Picklist => "picklist",
            Self::TextArea => "textarea",
            Self::Address => "address",
            Self::Phone => "phone",
            Self::Url => "url",
            Self::MultiPicklist => "multipicklist",
            Self::Percent => "percent",
            Self::Email => "email",
            Self::Int => "int",
            Self::Location => "location",
            Self::Id => "id",
            Self::Base64 => "base64",
            Self::AnyType => "anytype",
            Self::Time => "time",
            Self::EncryptedString => "encryptedstring",
            Self::ComboBox => "combobox",
        }
    }

    /// Compound types (address, location) can be selected but never written.
    pub fn is_compound(&self) -> bool {
        matches!(self, Self::Address | Self::Location)
    }
}

impl std::fmt::Display for SalesforceFieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for one field of an entity type.
///
/// `property` is the key callers use when resolving fields (the Rust field
/// name of the generated struct); `api_name` is what goes on the wire.
/// For relationship properties (`reference` set), `api_name` is the
/// relationship name, such as `Account` or `Contacts`.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub property: &'static str,
    pub api_name: &'static str,
    pub field_type: SalesforceFieldType,
    pub required: bool,
    pub createable: bool,
    pub updateable: bool,
    pub external_id: bool,
    pub child_relationship: bool,
    pub reference: Option<fn() -> &'static SObjectDescriptor>,
}

impl FieldDescriptor {
    /// A read-only field with no relationship.
    pub const fn new(
        property: &'static str,
        api_name: &'static str,
        field_type: SalesforceFieldType,
    ) -> Self {
        Self {
            property,
            api_name,
            field_type,
            required: false,
            createable: false,
            updateable: false,
            external_id: false,
            child_relationship: false,
            reference: None,
        }
    }

    pub const fn with_createable(mut self, createable: bool) -> Self {
        self.createable = createable;
        self
    }

    pub const fn with_updateable(mut self, updateable: bool) -> Self {
        self.updateable = updateable;
        self
    }

    /// Shorthand for createable and updateable.
    pub const fn editable(self) -> Self {
        self.with_createable(true).with_updateable(true)
    }

    pub const fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub const fn with_external_id(mut self, external_id: bool) -> Self {
        self.external_id = external_id;
        self
    }

    /// Mark this property as a parent relationship to `target`.
    pub const fn with_reference(mut self, target: fn() -> &'static SObjectDescriptor) -> Self {
        self.reference = Some(target);
        self
    }

    /// Mark this property as a child relationship (a list of `target` records).
    pub const fn with_child_relationship(
        mut self,
        target: fn() -> &'static SObjectDescriptor,
    ) -> Self {
        self.reference = Some(target);
        self.child_relationship = true;
        self
    }

    /// True for parent and child relationship properties.
    pub fn is_relationship(&self) -> bool {
        self.reference.is_some()
    }

    /// The related entity's descriptor, for relationship properties.
    pub fn target(&self) -> Option<&'static SObjectDescriptor> {
        self.reference.map(|target| target())
    }
}

/// Metadata for an entity type: its API name and ordered field table.
#[derive(Debug)]
pub struct SObjectDescriptor {
    pub api_name: &'static str,
    fields: &'static [FieldDescriptor],
}

impl SObjectDescriptor {
    /// `fields` must not be empty; resolvers assert this in debug builds.
    pub const fn new(api_name: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        Self { api_name, fields }
    }

    /// All fields in declaration order.
    pub fn fields(&self) -> &'static [FieldDescriptor] {
        self.fields
    }

    /// Look up a field by property name.
    pub fn field(&self, property: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.property == property)
    }

    /// Look up a field by wire name. Matching is case-insensitive, like SOQL.
    pub fn field_by_api_name(&self, api_name: &str) -> Option<&'static FieldDescriptor> {
        self.fields
            .iter()
            .find(|f| f.api_name.eq_ignore_ascii_case(api_name))
    }
}

/// Implemented by every typed entity.
pub trait SObjectType {
    fn descriptor() -> &'static SObjectDescriptor;

    fn api_name() -> &'static str {
        Self::descriptor().api_name
    }
}
