// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoauthorError {
    /// The graph has no nodes, so no most-influential author exists.
    #[error("no authors to rank: the sample produced an empty graph")]
    NotFound,

    /// The queried name is not a node in the current sample's graph.
    #[error("author {name:?} does not appear in the current sample")]
    AuthorNotFound { name: String },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("malformed snapshot {path}: {source}")]
    Snapshot {
        source: serde_json::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, CoauthorError>;

// Allow `?` on std::io::Error by converting to CoauthorError::Io with unknown path.
impl From<std::io::Error> for CoauthorError {
    fn from(source: std::io::Error) -> Self {
        CoauthorError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
