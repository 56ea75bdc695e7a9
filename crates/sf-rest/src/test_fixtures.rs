//! Typed records shared by the unit tests.

use busbar_sf_soql::{FieldDescriptor, SObjectDescriptor, SObjectType, SalesforceFieldType as T};
use serde::{Deserialize, Serialize};

use crate::sobject::{ModifiedFields, SObject};

pub static ACCOUNT: SObjectDescriptor = SObjectDescriptor::new(
    "Account",
    &[
        FieldDescriptor::new("id", "Id", T::Id),
        FieldDescriptor::new("name", "Name", T::String)
            .editable()
            .with_required(true),
        FieldDescriptor::new("industry", "Industry", T::Picklist).editable(),
        FieldDescriptor::new("account_number", "AccountNumber__c", T::String)
            .editable()
            .with_external_id(true),
        FieldDescriptor::new("billing_address", "BillingAddress", T::Address),
        FieldDescriptor::new("contacts", "Contacts", T::Reference).with_child_relationship(contact),
    ],
);

pub static CONTACT: SObjectDescriptor = SObjectDescriptor::new(
    "Contact",
    &[
        FieldDescriptor::new("id", "Id", T::Id),
        FieldDescriptor::new("name", "Name", T::String),
        FieldDescriptor::new("first_name", "FirstName", T::String).editable(),
        FieldDescriptor::new("last_name", "LastName", T::String)
            .editable()
            .with_required(true),
        FieldDescriptor::new("email", "Email", T::Email).editable(),
        FieldDescriptor::new("account_id", "AccountId", T::Reference).editable(),
        FieldDescriptor::new("account", "Account", T::Reference).with_reference(account),
    ],
);

fn account() -> &'static SObjectDescriptor {
    &ACCOUNT
}

fn contact() -> &'static SObjectDescriptor {
    &CONTACT
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Industry", default)]
    pub industry: Option<String>,
    #[serde(rename = "AccountNumber__c", default)]
    pub account_number: Option<String>,
    #[serde(rename = "BillingAddress", default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<serde_json::Value>,
    #[serde(skip)]
    pub modified: ModifiedFields,
}

impl Account {
    pub fn named(name: &str) -> Self {
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

    pub fn set_account_number(&mut self, number: &str) {
        self.account_number = Some(number.to_string());
        self.modified.mark("account_number");
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
    #[serde(rename = "Name", default, skip_serializing)]
    pub name: Option<String>,
    #[serde(rename = "FirstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "LastName", default)]
    pub last_name: Option<String>,
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
    #[serde(rename = "AccountId", default)]
    pub account_id: Option<String>,
    #[serde(rename = "Account", default, skip_serializing_if = "Option::is_none")]
    pub account: Option<Box<Account>>,
    #[serde(skip)]
    pub modified: ModifiedFields,
}

impl Contact {
    pub fn set_last_name(&mut self, last_name: &str) {
        self.last_name = Some(last_name.to_string());
        self.modified.mark("last_name");
    }

    pub fn set_email(&mut self, email: Option<String>) {
        self.email = email;
        self.modified.mark("email");
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
