use thiserror::Error;

/// Errors from the OMDb API client.
#[derive(Debug, Error)]
pub enum OmdbError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The API answered 200 but flagged the request as failed
    /// ("Movie not found!", "Invalid API key!", ...). The message is
    /// shown to the user as-is.
    #[error("{0}")]
    Rejected(String),

    #[error("parse error: {0}")]
    Parse(String),
}
