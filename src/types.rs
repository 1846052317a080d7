use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What kind of filesystem entry a line describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Directory,
    File,
    /// A symbolic link that was not followed. Rendered like a file.
    Symlink,
}

/// One line of the listing.
///
/// The rendered form (see the `Display` impl) is the name indented by four
/// spaces per level of `depth`, with a trailing `/` for directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeLine {
    /// Number of path components between the root and this entry. The root is 0.
    pub depth: usize,
    /// The entry's basename, lossily converted to UTF-8.
    pub name: String,
    pub kind: EntryKind,
}

/// A node the walk could not read and therefore left out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedEntry {
    /// The offending path, when the walker reported one.
    pub path: Option<PathBuf>,
    pub reason: String,
}

/// What a completed run wrote.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TreeSummary {
    /// Number of directory lines, the root included.
    pub directories: usize,
    /// Number of file and unfollowed-symlink lines.
    pub files: usize,
    /// Nodes skipped because they could not be read.
    pub skipped: Vec<SkippedEntry>,
}
