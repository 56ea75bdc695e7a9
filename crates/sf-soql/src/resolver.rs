//! Field resolution against descriptor tables.

use crate::descriptor::{FieldDescriptor, SObjectDescriptor, SObjectType};
use crate::error::{Error, Result};
use crate::field::{FieldRef, FunctionField, SoqlFunction};
use crate::query::{compose_query, QueryParams, SoqlQuery};

/// Hands out field references for one entity type.
///
/// A resolver for the queried entity renders plain names (`Name`). One
/// reached through [`parent`](Self::parent) prefixes the relationship path
/// (`Account.Owner.Name`). Properties are looked up by their descriptor key;
/// unknown or mismatched properties fail with
/// [`ErrorKind::InvalidFieldReference`](crate::ErrorKind::InvalidFieldReference).
#[derive(Debug, Clone)]
pub struct FieldResolver {
    sobject: &'static SObjectDescriptor,
    path: Vec<&'static str>,
    in_subquery: bool,
}

impl FieldResolver {
    pub fn new(sobject: &'static SObjectDescriptor) -> Self {
        debug_assert!(
            !sobject.fields().is_empty(),
            "{} has an empty descriptor table",
            sobject.api_name
        );
        Self {
            sobject,
            path: Vec::new(),
            in_subquery: false,
        }
    }

    pub fn for_type<T: SObjectType>() -> Self {
        Self::new(T::descriptor())
    }

    /// The entity this resolver addresses.
    pub fn sobject(&self) -> &'static SObjectDescriptor {
        self.sobject
    }

    fn descriptor(&self, property: &str) -> Result<&'static FieldDescriptor> {
        self.sobject
            .field(property)
            .ok_or_else(|| Error::invalid_field(self.sobject.api_name, property, "unknown field"))
    }

    fn reference(&self, descriptor: &FieldDescriptor) -> FieldRef {
        if self.path.is_empty() {
            FieldRef::Plain(descriptor.api_name.to_string())
        } else {
            FieldRef::Relationship {
                path: self.path.iter().map(|p| p.to_string()).collect(),
                field: descriptor.api_name.to_string(),
            }
        }
    }

    /// A scalar field.
    pub fn field(&self, property: &str) -> Result<FieldRef> {
        let descriptor = self.descriptor(property)?;
        if descriptor.is_relationship() {
            return Err(Error::invalid_field(
                self.sobject.api_name,
                property,
                "is a relationship; use parent() or subquery()",
            ));
        }
        Ok(self.reference(descriptor))
    }

    /// Several scalar fields, in the given order.
    pub fn select(&self, properties: &[&str]) -> Result<Vec<FieldRef>> {
        properties.iter().map(|p| self.field(p)).collect()
    }

    /// Every scalar field, in declaration order.
    pub fn all(&self) -> Vec<FieldRef> {
        self.sobject
            .fields()
            .iter()
            .filter(|f| !f.is_relationship())
            .map(|f| self.reference(f))
            .collect()
    }

    /// Follow a parent relationship: `contact.parent("account")?.field("name")?`
    /// yields `Account.Name`.
    pub fn parent(&self, property: &str) -> Result<FieldResolver> {
        let descriptor = self.descriptor(property)?;
        let target = match descriptor.target() {
            Some(target) if !descriptor.child_relationship => target,
            Some(_) => {
                return Err(Error::invalid_field(
                    self.sobject.api_name,
                    property,
                    "is a child relationship; use subquery()",
                ))
            }
            None => {
                return Err(Error::invalid_field(
                    self.sobject.api_name,
                    property,
                    "is not a reference field",
                ))
            }
        };

        let mut path = self.path.clone();
        path.push(descriptor.api_name);
        Ok(FieldResolver {
            sobject: target,
            path,
            in_subquery: self.in_subquery,
        })
    }

    /// Apply a function to one field: `function(SoqlFunction::Max, "amount")`.
    pub fn function(&self, function: SoqlFunction, property: &str) -> Result<FunctionField> {
        Ok(FunctionField::new(function, vec![self.field(property)?]))
    }

    /// `COUNT()`.
    pub fn count(&self) -> FunctionField {
        FunctionField::count()
    }

    /// A child-relationship subquery for the select list.
    ///
    /// `build` receives a resolver for the child entity and returns the
    /// subquery's parameters; the relationship name becomes its `FROM`.
    /// Only allowed on the queried entity itself, and not inside another
    /// subquery.
    pub fn subquery<F>(&self, property: &str, build: F) -> Result<FieldRef>
    where
        F: FnOnce(&FieldResolver) -> Result<QueryParams>,
    {
        let descriptor = self.descriptor(property)?;
        let target = match descriptor.target() {
            Some(target) if descriptor.child_relationship => target,
            _ => {
                return Err(Error::invalid_field(
                    self.sobject.api_name,
                    property,
                    "is not a child relationship",
                ))
            }
        };
        if !self.path.is_empty() || self.in_subquery {
            return Err(Error::invalid_field(
                self.sobject.api_name,
                property,
                "subqueries are only allowed on the queried entity",
            ));
        }

        let child = FieldResolver {
            sobject: target,
            path: Vec::new(),
            in_subquery: true,
        };
        let params = build(&child)?;
        let composed = compose_query(&SoqlQuery::new(descriptor.api_name, params))?;
        Ok(FieldRef::Subquery(format!("({composed})")))
    }
}
