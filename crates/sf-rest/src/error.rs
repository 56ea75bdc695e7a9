//! Error types for sf-rest.

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

    /// Whether the request was rejected locally, before any I/O.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Query(_)
                | ErrorKind::InvalidName(_)
                | ErrorKind::BatchTooLarge { .. }
                | ErrorKind::MissingRecordId { .. }
                | ErrorKind::InvalidRecordId { .. }
                | ErrorKind::MissingExternalId { .. }
                | ErrorKind::InvalidExternalIdField { .. }
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("Client error: {0}")]
    Client(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Invalid API name: {0}")]
    InvalidName(String),

    #[error("Batch of {size} records exceeds the collection limit of {max}")]
    BatchTooLarge { size: usize, max: usize },

    #[error("Record at index {index} has no Id")]
    MissingRecordId { index: usize },

    #[error("Record at index {index} has a malformed Id: {id}")]
    InvalidRecordId { index: usize, id: String },

    #[error("Record at index {index} has no value for external id {field}")]
    MissingExternalId { index: usize, field: String },

    #[error("{field} is not an external id field on {sobject}")]
    InvalidExternalIdField { sobject: String, field: String },

    #[error("Expected {expected} results, received {actual}")]
    ResultCountMismatch { expected: usize, actual: usize },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("{0}")]
    Other(String),
}

impl From<busbar_sf_client::Error> for Error {
    fn from(err: busbar_sf_client::Error) -> Self {
        Error {
            kind: ErrorKind::Client(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<busbar_sf_soql::Error> for Error {
    fn from(err: busbar_sf_soql::Error) -> Self {
        Error {
            kind: ErrorKind::Query(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            kind: ErrorKind::Serialization(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}
