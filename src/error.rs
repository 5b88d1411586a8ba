#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error("HTTP error")]
    Http(#[from] reqwest::Error),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    #[error("Missing configuration: {0}")]
    Config(String),

    #[error("Notification rejected with status {status}: {body}")]
    Notification { status: u16, body: String },
}
