use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignalError {
    #[error("Unknown horizon key: {0}")]
    UnknownHorizon(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
