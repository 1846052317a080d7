//! # Foldertree
//!
//! `foldertree` walks a directory tree and saves its hierarchy as indented plain text:
//! one line per directory (suffixed with `/`) and one line per file, four spaces of
//! indentation per level.
//!
//! ```text
//! project/
//!     Cargo.toml
//!     src/
//!         lib.rs
//! ```
//!
//! Within each directory, files are listed before subdirectories. Entries that cannot
//! be read during the walk are skipped and reported in the returned [`TreeSummary`].
//!
//! # Features
//!
//! - `logging` (default): Emits debug and warning events via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use foldertree::{EntryOrder, TreeBuilder, write_tree_to_file};
//!
//! let options = TreeBuilder::new("./project")
//!     .follow_links(false)
//!     .order(EntryOrder::Name)
//!     .build();
//!
//! let summary = write_tree_to_file(&options, "folder_structure.txt")
//!     .expect("Failed to save folder structure");
//!
//! println!("{} directories, {} files", summary.directories, summary.files);
//! for skipped in &summary.skipped {
//!     println!("skipped: {}", skipped.reason);
//! }
//! ```

mod engine;
mod error;
mod options;
mod output;
mod tree;
mod types;

pub use engine::{TreeLines, ensure_directory, write_tree};
pub use error::FolderTreeError;
pub use options::{EntryOrder, TreeBuilder, TreeOptions};
pub use output::{DEFAULT_OUTPUT_FILE_NAME, default_output_path, foldertree, write_tree_to_file};
pub use tree::root_name;
pub use types::{EntryKind, SkippedEntry, TreeLine, TreeSummary};
