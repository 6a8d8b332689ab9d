//! Station repository error types.

use std::path::PathBuf;

/// Errors that can occur when loading stations.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// The data source could not be read
    #[error("failed to read station data from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
