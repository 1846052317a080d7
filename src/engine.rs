use crate::error::FolderTreeError;
use crate::options::{EntryOrder, TreeOptions};
use crate::tree::root_name;
use crate::types::{EntryKind, SkippedEntry, TreeLine, TreeSummary};
use ignore::WalkBuilder;
use std::cmp::Ordering;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
fn build_walk(options: &TreeOptions) -> ignore::Walk {
    let follow_links = options.follow_links;
    let order = options.order;
    let mut builder = WalkBuilder::new(&options.root);
    builder
        .standard_filters(false)
        .follow_links(follow_links)
        .sort_by_file_path(move |a, b| compare_entries(a, b, follow_links, order));
    builder.build()
}
fn is_dir(path: &Path, follow_links: bool) -> bool {
    let metadata = if follow_links {
        fs::metadata(path)
    } else {
        fs::symlink_metadata(path)
    };
    metadata.map(|m| m.is_dir()).unwrap_or(false)
}
// Files sort before directories so a directory's own files are written
// before the walk descends into any of its subdirectories.
fn compare_entries(a: &Path, b: &Path, follow_links: bool, order: EntryOrder) -> Ordering {
    let by_kind = is_dir(a, follow_links).cmp(&is_dir(b, follow_links));
    match order {
        EntryOrder::Name => by_kind.then_with(|| a.file_name().cmp(&b.file_name())),
        EntryOrder::Native => by_kind,
    }
}
fn error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.clone()),
        ignore::Error::Partial(errs) => errs.first().and_then(error_path),
        _ => None,
    }
}
/// Checks that `path` names an existing directory.
///
/// Runs before anything is written, so a bad root never touches the output.
pub fn ensure_directory(path: &Path) -> Result<(), FolderTreeError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(FolderTreeError::NotADirectory(path.to_path_buf()))
    }
}
/// Iterator over the lines of a listing, in output order.
///
/// Entries the walk cannot read are not yielded; they are collected and can
/// be inspected with [`TreeLines::skipped`] or [`TreeLines::into_summary`].
pub struct TreeLines {
    inner: ignore::Walk,
    root_name: String,
    directories: usize,
    files: usize,
    skipped: Vec<SkippedEntry>,
}
impl TreeLines {
    pub fn new(options: &TreeOptions) -> Result<Self, FolderTreeError> {
        ensure_directory(&options.root)?;
        #[cfg(feature = "logging")]
        tracing::debug!("Starting walk at root: {}", options.root.display());
        Ok(Self {
            inner: build_walk(options),
            root_name: root_name(&options.root),
            directories: 0,
            files: 0,
            skipped: Vec::new(),
        })
    }
    pub fn skipped(&self) -> &[SkippedEntry] {
        &self.skipped
    }
    pub fn into_summary(self) -> TreeSummary {
        #[cfg(feature = "logging")]
        tracing::debug!(
            "Walk finished: {} directories, {} files, {} skipped",
            self.directories,
            self.files,
            self.skipped.len()
        );
        TreeSummary {
            directories: self.directories,
            files: self.files,
            skipped: self.skipped,
        }
    }
    fn line_for(&mut self, entry: &ignore::DirEntry) -> TreeLine {
        let depth = entry.depth();
        if depth == 0 {
            self.directories += 1;
            return TreeLine::new(0, self.root_name.clone(), EntryKind::Directory);
        }
        let kind = match entry.file_type() {
            Some(ft) if ft.is_dir() => EntryKind::Directory,
            Some(ft) if ft.is_symlink() => EntryKind::Symlink,
            _ => EntryKind::File,
        };
        match kind {
            EntryKind::Directory => self.directories += 1,
            EntryKind::File | EntryKind::Symlink => self.files += 1,
        }
        TreeLine::new(depth, entry.file_name().to_string_lossy(), kind)
    }
    fn skip(&mut self, err: ignore::Error) {
        let path = error_path(&err);
        #[cfg(feature = "logging")]
        tracing::warn!("Skipping unreadable entry: {}", err);
        self.skipped.push(SkippedEntry {
            path,
            reason: err.to_string(),
        });
    }
}
impl Iterator for TreeLines {
    type Item = TreeLine;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) => return Some(self.line_for(&entry)),
                Err(err) => self.skip(err),
            }
        }
    }
}
pub(crate) fn write_lines<W: Write>(lines: &mut TreeLines, out: &mut W) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
/// Writes the listing for `options.root` to `out`, one line per entry.
pub fn write_tree<W: Write>(
    options: &TreeOptions,
    out: &mut W,
) -> Result<TreeSummary, FolderTreeError> {
    let mut lines = TreeLines::new(options)?;
    write_lines(&mut lines, out).map_err(FolderTreeError::Write)?;
    out.flush().map_err(FolderTreeError::Write)?;
    Ok(lines.into_summary())
}
