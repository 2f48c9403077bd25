use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Terminal failures for a single conversion run. None is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// Source path does not exist.
    #[error("source file not found: {0}")]
    NotFound(PathBuf),

    /// Source exists but is not a well-formed JSON object of categories.
    #[error("could not decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    /// Destination could not be written.
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
