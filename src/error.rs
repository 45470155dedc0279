// error module shared by the config loader and the frontends
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("gui failed: {0}")]
    Gui(String),
}

pub type Result<T> = std::result::Result<T, Error>;
