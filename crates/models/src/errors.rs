use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("row not found")]
    NotFound,
    #[error("database error: {0}")]
    Db(String),
}
