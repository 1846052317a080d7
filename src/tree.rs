//! Internal module for rendering listing lines.

use crate::types::{EntryKind, TreeLine};
use std::fmt;
use std::path::Path;

/// Indentation added per level of depth.
pub(crate) const INDENT: &str = "    ";

impl TreeLine {
    pub(crate) fn new(depth: usize, name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            depth,
            name: name.into(),
            kind,
        }
    }
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.depth {
            f.write_str(INDENT)?;
        }
        f.write_str(&self.name)?;
        if self.kind == EntryKind::Directory {
            f.write_str("/")?;
        }
        Ok(())
    }
}

/// Resolves the name printed on the root line.
///
/// Uses the last normal component of `root`. Paths without one (`.`, `..`,
/// `/`) are canonicalized first; if that still yields nothing the path is
/// printed as given.
pub fn root_name(root: &Path) -> String {
    if let Some(name) = root.file_name() {
        return name.to_string_lossy().into_owned();
    }
    root.canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| root.display().to_string())
}
