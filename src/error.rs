use std::path::PathBuf;

/// Every way a build run can fail. None of these are recovered from.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Remote page unreachable or answered with a non-success status.
    #[error("failed to fetch {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The fetched page does not have the expected heading structure.
    #[error("unexpected page shape: {0}")]
    ParseShape(String),

    /// A region marker is absent, or no end marker follows the start marker.
    #[error("region marker `{marker}` not found in host text")]
    MissingMarker { marker: String },

    #[error("failed to access {}", path.display())]
    FileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BuildError {
    pub fn file_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BuildError::FileIo {
            path: path.into(),
            source,
        }
    }
}
