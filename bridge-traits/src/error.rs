use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Invalid JavaScript identifier: {0:?}")]
    InvalidName(String),

    #[error("Payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Script execution failed: {0}")]
    Execution(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
