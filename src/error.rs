use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum FolderTreeError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("The path '{}' is not a valid directory.", .0.display())]
    NotADirectory(PathBuf),
    #[error("Failed to write listing: {0}")]
    Write(#[source] std::io::Error),
}
impl FolderTreeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FolderTreeError::Io {
            path: path.into(),
            source,
        }
    }
}
