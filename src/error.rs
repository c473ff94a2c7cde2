//! Error types for sentinelgen.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input document could not be read.
    #[error("Invalid file/address provided: {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config JSON in {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A configured pattern failed to compile.
    #[error("invalid {name} pattern: {source}")]
    Pattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("{pattern} pattern has no `{group}` capture group")]
    MissingGroup {
        pattern: &'static str,
        group: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
