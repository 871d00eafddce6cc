use thiserror::Error;

#[derive(Debug, Error)]
pub enum KinologError {
    #[error("parse failed: {0}")]
    Parse(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
