use thiserror::Error;

#[derive(Debug, Error)]
pub enum DropselError {
    #[error("Invalid options: entry {index}: {reason}")]
    InvalidOption { index: usize, reason: String },

    #[error("Invalid options: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid options: {0}")]
    Io(#[from] std::io::Error),
}
