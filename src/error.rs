use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("invalid channel reference: {reference}")]
    InvalidReference { reference: String },

    #[error("no channel found for '{query}'")]
    ChannelNotFound { query: String },

    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("API request returned {status}: {body}")]
    ApiStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HarvestError>;
