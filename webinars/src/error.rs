use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZoomError {
    /// A local precondition failed; nothing was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Non-2xx response, or a transport failure when `status` is `None`.
    #[error("remote request failed ({}): {message}", status_label(.status))]
    RemoteRequestFailed {
        status: Option<u16>,
        message: String,
    },

    #[error("decoding failed: {0}")]
    DecodingFailed(String),

    #[error("request cancelled")]
    Cancelled,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ZoomError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            return ZoomError::DecodingFailed(e.to_string());
        }
        ZoomError::RemoteRequestFailed {
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        }
    }
}

fn status_label(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!("HTTP {code}"),
        None => "transport".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, ZoomError>;
