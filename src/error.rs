use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavError {
    #[error("unknown view '{0}'")]
    UnknownView(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("HTTP {status}: could not load {url}")]
    Status { status: u16, url: String },
    #[error("manifest error: {0}")]
    Manifest(String),
    #[error("no portal loaded")]
    MissingRegion,
}

impl NavError {
    pub fn transport(err: reqwest::Error) -> Self {
        NavError::Transport(err.to_string())
    }
}
