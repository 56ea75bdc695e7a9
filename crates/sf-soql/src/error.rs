//! Error types for sf-soql.
//!
//! Every error here is a composition error: it is raised synchronously,
//! before any request is made, and points at a mistake in the code that
//! built the query.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    pub(crate) fn invalid_field(
        sobject: &str,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::InvalidFieldReference {
            sobject: sobject.to_string(),
            field: field.into(),
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("query has no SELECT fields")]
    MissingSelectFields,

    #[error("query has no FROM target")]
    MissingFromTarget,

    #[error("invalid field reference {sobject}.{field}: {reason}")]
    InvalidFieldReference {
        sobject: String,
        field: String,
        reason: String,
    },

    #[error("unsupported literal: {0}")]
    LiteralType(String),

    #[error("empty value list for {field}")]
    EmptyListOperand { field: String },

    #[error("condition group has no children")]
    EmptyConditionGroup,

    #[error("GROUP BY without fields")]
    EmptyGroupBy,
}
