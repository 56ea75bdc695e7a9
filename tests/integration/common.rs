//! Typed records and helpers shared by the integration tests.
//!
//! The descriptor tables and structs mirror what a code generator would emit
//! from the orgs' describe output.

use std::sync::Once;

use busbar_sf_typed::rest::{ModifiedFields, SObject, SalesforceRestClient};
use busbar_sf_typed::soql::{
    FieldDescriptor, SObjectDescriptor, SObjectType, SalesforceFieldType as T,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use wiremock::MockServer;

static TRACING: Once = Once::new();

/// Route test logs through `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub async fn mock_client() -> (MockServer, SalesforceRestClient) {
    init_tracing();
    let server = MockServer::start().await;
    let client = SalesforceRestClient::new(server.uri(), "00Dxx0000000001!token")
        .expect("mock server URI is valid");
    (server, client)
}

pub static ACCOUNT: SObjectDescriptor = SObjectDescriptor::new(
    "Account",
    &[
        FieldDescriptor::new("id", "Id", T::Id),
        FieldDescriptor::new("name", "Name", T::String)
            .editable()
            .with_required(true),
        FieldDescriptor::new("industry", "Industry", T::Picklist).editable(),
        FieldDescriptor::new("annual_revenue", "AnnualRevenue", T::Currency).editable(),
        FieldDescriptor::new("external_key", "External_Key__c", T::String)
            .editable()
            .with_external_id(true),
        FieldDescriptor::new("owner_id", "OwnerId", T::Reference).editable(),
        FieldDescriptor::new("owner", "Owner", T::Reference).with_reference(user),
        FieldDescriptor::new("contacts", "Contacts", T::Reference).with_child_relationship(contact),
    ],
);

pub static CONTACT: SObjectDescriptor = SObjectDescriptor::new(
    "Contact",
    &[
        FieldDescriptor::new("id", "Id", T::Id),
        FieldDescriptor::new("first_name", "FirstName", T::String).editable(),
        FieldDescriptor::new("last_name", "LastName", T::String)
            .editable()
            .with_required(true),
        FieldDescriptor::new("email", "Email", T::Email).editable(),
        FieldDescriptor::new("birthdate", "Birthdate", T::Date).editable(),
        FieldDescriptor::new("hobbies", "Hobbies__c", T::MultiPicklist).editable(),
        FieldDescriptor::new("account_id", "AccountId", T::Reference).editable(),
        FieldDescriptor::new("account", "Account", T::Reference).with_reference(account),
    ],
);

pub static USER: SObjectDescriptor = SObjectDescriptor::new(
    "User",
    &[
        FieldDescriptor::new("id", "Id", T::Id),
        FieldDescriptor::new("name", "Name", T::String),
        FieldDescriptor::new("is_active", "IsActive", T::Boolean),
    ],
);

fn account() -> &'static SObjectDescriptor {
    &ACCOUNT
}

fn contact() -> &'static SObjectDescriptor {
    &CONTACT
}

fn user() -> &'static SObjectDescriptor {
    &USER
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Industry", default)]
    pub industry: Option<String>,
    #[serde(rename = "AnnualRevenue", default)]
    pub annual_revenue: Option<f64>,
    #[serde(rename = "External_Key__c", default)]
    pub external_key: Option<String>,
    #[serde(rename = "OwnerId", default)]
    pub owner_id: Option<String>,
    #[serde(skip)]
    modified: ModifiedFields,
}

impl Account {
    pub fn new(name: &str) -> Self {
        let mut account = Self::default();
        account.set_name(name);
        account
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = Some(name.to_string());
        self.modified.mark("name");
    }

    pub fn set_industry(&mut self, industry: &str) {
        self.industry = Some(industry.to_string());
        self.modified.mark("industry");
    }

    pub fn set_external_key(&mut self, key: &str) {
        self.external_key = Some(key.to_string());
        self.modified.mark("external_key");
    }
}

impl SObjectType for Account {
    fn descriptor() -> &'static SObjectDescriptor {
        &ACCOUNT
    }
}

impl SObject for Account {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn modified(&self) -> &ModifiedFields {
        &self.modified
    }

    fn modified_mut(&mut self) -> &mut ModifiedFields {
        &mut self.modified
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "FirstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "LastName", default)]
    pub last_name: Option<String>,
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
    #[serde(rename = "Birthdate", default)]
    pub birthdate: Option<NaiveDate>,
    #[serde(rename = "AccountId", default)]
    pub account_id: Option<String>,
    #[serde(rename = "Account", default, skip_serializing_if = "Option::is_none")]
    pub account: Option<Box<Account>>,
    #[serde(skip)]
    modified: ModifiedFields,
}

impl Contact {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        let mut contact = Self::default();
        contact.first_name = Some(first_name.to_string());
        contact.last_name = Some(last_name.to_string());
        contact.modified.mark("first_name");
        contact.modified.mark("last_name");
        contact
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = Some(email.to_string());
        self.modified.mark("email");
    }

    pub fn set_birthdate(&mut self, birthdate: NaiveDate) {
        self.birthdate = Some(birthdate);
        self.modified.mark("birthdate");
    }

    pub fn modified_fields(&self) -> Vec<&str> {
        self.modified.iter().collect()
    }
}

impl SObjectType for Contact {
    fn descriptor() -> &'static SObjectDescriptor {
        &CONTACT
    }
}

impl SObject for Contact {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn modified(&self) -> &ModifiedFields {
        &self.modified
    }

    fn modified_mut(&mut self) -> &mut ModifiedFields {
        &mut self.modified
    }
}

/// An 18-character record id with the given key prefix.
pub fn record_id(prefix: &str, n: usize) -> String {
    format!("{prefix}xx{n:013}")
}
