use thiserror::Error;

/// Business errors for the customer workflows.
///
/// Validation outcomes of the input filter and fetch-by-id misses are not
/// errors; they travel as return values. These variants cover the faults:
/// bad wiring, a missing update target, and storage failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{} not found", entity))
    }

    pub fn not_wired(component: &str) -> Self {
        Self::Configuration(format!("{} was not set", component))
    }
}

impl From<models::errors::ModelError> for ServiceError {
    fn from(err: models::errors::ModelError) -> Self {
        match err {
            models::errors::ModelError::NotFound => Self::not_found("customer"),
            models::errors::ModelError::Db(msg) => Self::Db(msg),
        }
    }
}
