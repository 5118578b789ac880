use thiserror::Error;

/// Why a bid request to the BidsFlow API did not succeed
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// The API answered with an unexpected status
    #[error("BidsFlow API returned status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The request could not be sent or its response could not be read
    #[error("Connection error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A bid id that cannot address a single stored bid
    #[error("Invalid bid id: {0:?}")]
    InvalidBidId(String),

    #[error("Invalid BidsFlow API URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to encode bid payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SubmissionError {
    /// HTTP status carried by a rejection, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            SubmissionError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SubmissionError>;
