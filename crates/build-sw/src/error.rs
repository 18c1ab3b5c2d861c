use std::io;
use std::process::ExitStatus;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to start {program}: {source}")]
    Spawn { program: String, source: io::Error },

    #[error("failed to exchange data with workbox: {0}")]
    Io(#[from] io::Error),

    #[error("workbox exited with {status}: {stderr}")]
    Tool { status: ExitStatus, stderr: String },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
