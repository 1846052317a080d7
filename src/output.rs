//! Writing listings to files.
//!
//! The output file is created (or truncated) only after the root has been
//! checked, and is written through one buffered handle that is flushed
//! before success is reported.

use crate::engine::{TreeLines, write_lines};
use crate::{FolderTreeError, TreeOptions, TreeSummary};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// File name used by the command-line tool for its output.
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "folder_structure.txt";

/// Returns `dir/folder_structure.txt`.
pub fn default_output_path(dir: impl AsRef<Path>) -> PathBuf {
    dir.as_ref().join(DEFAULT_OUTPUT_FILE_NAME)
}

/// Writes the listing described by `options` to `path`, replacing any
/// previous content.
pub fn write_tree_to_file(
    options: &TreeOptions,
    path: impl AsRef<Path>,
) -> Result<TreeSummary, FolderTreeError> {
    let path = path.as_ref();
    let mut lines = TreeLines::new(options)?;
    let file = File::create(path).map_err(|e| FolderTreeError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_lines(&mut lines, &mut writer).map_err(|e| FolderTreeError::io(path, e))?;
    writer.flush().map_err(|e| FolderTreeError::io(path, e))?;
    Ok(lines.into_summary())
}

/// Saves the folder structure of `start_path` to `output_file` using the
/// default options.
pub fn foldertree(
    start_path: impl AsRef<Path>,
    output_file: impl AsRef<Path>,
) -> Result<TreeSummary, FolderTreeError> {
    let options = TreeOptions {
        root: start_path.as_ref().to_path_buf(),
        ..Default::default()
    };
    write_tree_to_file(&options, output_file)
}
