use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No feed selected for data operation")]
    MissingFeedError,

    #[error("Adafruit IO responded with {status}: {body}")]
    ApiStatusError { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, ViewerError>;
