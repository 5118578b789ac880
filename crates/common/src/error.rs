use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid bid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid bid stage: {0}")]
    InvalidStage(String),

    #[error("Invalid risk level: {0}")]
    InvalidRiskLevel(String),

    #[error("Invalid channel: {0}")]
    InvalidChannel(String),

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
