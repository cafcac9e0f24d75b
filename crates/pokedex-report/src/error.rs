use catalog_common::error::ClientError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("config error: {0}")]
    Config(String),

    #[error("malformed detail payload at index {index}: {message}")]
    Projection { index: usize, message: String },

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
