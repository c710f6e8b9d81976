use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write the report to its destination: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize the report: {0}")]
    Serialization(#[from] serde_json::Error),
}
