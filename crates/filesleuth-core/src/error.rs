/// Fatal scan errors — reported before any traversal starts.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("directory '{}' does not exist", .path.display())]
    RootNotFound { path: PathBuf },

    #[error("'{}' is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("cannot read directory '{}'", .path.display())]
    RootInaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("max-large-files must be a positive integer")]
    ZeroMaxLargeFiles,
}
