use serde::{Deserialize, Serialize};
use std::path::PathBuf;
/// Order of entries inside one directory.
///
/// Files always come before subdirectories; this only decides the order
/// within each of the two groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryOrder {
    /// Sorted by file name.
    #[default]
    Name,
    /// Whatever order the OS directory listing yields.
    Native,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeOptions {
    pub root: PathBuf,
    pub follow_links: bool,
    pub order: EntryOrder,
}
impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            follow_links: false,
            order: EntryOrder::Name,
        }
    }
}
#[derive(Debug, Default)]
pub struct TreeBuilder {
    options: TreeOptions,
}
impl TreeBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: TreeOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn order(mut self, order: EntryOrder) -> Self {
        self.options.order = order;
        self
    }
    pub fn build(self) -> TreeOptions {
        self.options
    }
}
