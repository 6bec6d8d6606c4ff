use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Persistence error: {0}")]
    Persistence(String),
    #[error("Publish error: {0}")]
    Publish(String),
    #[error("Handler '{handler}' is already registered for event '{event}'")]
    DuplicateHandler { event: String, handler: String },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OrderError>;
