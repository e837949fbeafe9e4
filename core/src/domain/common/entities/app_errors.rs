use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Not found")]
    NotFound,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Missing credentials for {0}")]
    MissingCredentials(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error")]
    InternalServerError,
}
