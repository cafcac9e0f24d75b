/// Error types for talking to a paginated catalog API.
///
/// These cover transport, decoding and upstream status failures. Whether a given
/// failure is fatal or merely drops one item is decided by the caller, which wraps
/// `ClientError` via `#[from]` in its own error enum.
use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid response JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("upstream returned error: status={status} body={body}")]
    Upstream { status: StatusCode, body: String },
}

impl ClientError {
    /// The upstream HTTP status, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Upstream { status, .. } => Some(*status),
            ClientError::Request(e) => e.status(),
            ClientError::InvalidJson(_) => None,
        }
    }
}
