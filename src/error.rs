use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Zoom(#[from] webinars::ZoomError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid start time {input:?}: {source}")]
    StartTime {
        input: String,
        source: chrono::ParseError,
    },

    #[error("{0} environment variable is required")]
    MissingEnv(&'static str),
}
