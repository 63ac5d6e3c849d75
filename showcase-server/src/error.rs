use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {message}")]
    Bind { addr: String, message: String },
    #[error("failed to read data file {}: {source}", path.display())]
    DataRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("data file {} is not valid JSON: {source}", path.display())]
    InvalidData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
