//! Descriptor tables shared by the unit tests.

use crate::descriptor::{FieldDescriptor, SObjectDescriptor, SObjectType, SalesforceFieldType as T};

pub struct Account;
pub struct Contact;
pub struct User;

pub static ACCOUNT: SObjectDescriptor = SObjectDescriptor::new(
    "Account",
    &[
        FieldDescriptor::new("id", "Id", T::Id),
        FieldDescriptor::new("name", "Name", T::String)
            .editable()
            .with_required(true),
        FieldDescriptor::new("industry", "Industry", T::Picklist).editable(),
        FieldDescriptor::new("annual_revenue", "AnnualRevenue", T::Currency).editable(),
        FieldDescriptor::new("account_number", "AccountNumber__c", T::String)
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
        FieldDescriptor::new("interests", "Interests__c", T::MultiPicklist).editable(),
        FieldDescriptor::new("birthdate", "Birthdate", T::Date).editable(),
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
        FieldDescriptor::new("manager", "Manager", T::Reference).with_reference(user),
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

impl SObjectType for Account {
    fn descriptor() -> &'static SObjectDescriptor {
        &ACCOUNT
    }
}

impl SObjectType for Contact {
    fn descriptor() -> &'static SObjectDescriptor {
        &CONTACT
    }
}

impl SObjectType for User {
    fn descriptor() -> &'static SObjectDescriptor {
        &USER
    }
}
