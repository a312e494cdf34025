//! In-memory filesystem for the Namour terminal.
//!
//! The tree is a nest of directory and file nodes, built once when a session
//! starts and read-only afterwards. Paths typed at the prompt go through
//! [`resolve_path`] first; the tree itself only understands absolute,
//! normalized paths.

pub mod path;
pub mod seed;
pub mod tree;

pub use path::{abbreviate_home, resolve_path};
pub use seed::build_tree;
pub use tree::{FsNode, FsTree};

/// Kind of a filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A single child of a directory, as returned by [`FsTree::readdir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VfsEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl VfsEntry {
    /// Dot-prefixed names are hidden from `ls` unless `-a` is given.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}
