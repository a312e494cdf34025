//! Nested directory/file tree.
//!
//! Each directory owns its children outright, so the structure is acyclic by
//! construction and needs no back-references. Children live in a `BTreeMap`,
//! which keeps directory listings sorted for free.

use std::collections::BTreeMap;

use namour_types::error::{NamourError, Result};

use crate::{EntryKind, VfsEntry};

/// A node in the filesystem tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsNode {
    /// A directory mapping child names to nodes.
    Dir(BTreeMap<String, FsNode>),
    /// A text file.
    File(String),
}

impl FsNode {
    /// An empty directory.
    pub fn empty_dir() -> Self {
        Self::Dir(BTreeMap::new())
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Dir(_) => EntryKind::Directory,
            Self::File(_) => EntryKind::File,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Dir(_))
    }

    /// Children of a directory, `None` for files.
    pub fn children(&self) -> Option<&BTreeMap<String, FsNode>> {
        match self {
            Self::Dir(children) => Some(children),
            Self::File(_) => None,
        }
    }

    /// Content of a file, `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::File(content) => Some(content),
            Self::Dir(_) => None,
        }
    }
}

/// Split an absolute path into its non-empty segments.
fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// A filesystem tree rooted at `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsTree {
    root: FsNode,
}

impl FsTree {
    /// Create a tree holding only the empty root directory.
    pub fn new() -> Self {
        Self {
            root: FsNode::empty_dir(),
        }
    }

    pub fn root(&self) -> &FsNode {
        &self.root
    }

    /// Find the node at an absolute path.
    ///
    /// Empty segments are skipped, so `//var///log` finds `/var/log`. A
    /// missing segment, or a segment below a file, yields `None`. `.` and
    /// `..` are not interpreted here; resolve the path first.
    pub fn lookup(&self, path: &str) -> Option<&FsNode> {
        let mut node = &self.root;
        for seg in segments(path) {
            node = node.children()?.get(seg)?;
        }
        Some(node)
    }

    pub fn exists(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    /// List the direct children of a directory in name order.
    pub fn readdir(&self, path: &str) -> Option<Vec<VfsEntry>> {
        let children = self.lookup(path)?.children()?;
        Some(
            children
                .iter()
                .map(|(name, node)| VfsEntry {
                    name: name.clone(),
                    kind: node.kind(),
                })
                .collect(),
        )
    }

    /// Content of the file at `path`, `None` if missing or a directory.
    pub fn read(&self, path: &str) -> Option<&str> {
        self.lookup(path)?.content()
    }

    // -- Construction API (used while seeding, before a session starts) --

    /// Create a directory, creating missing parents. Existing directories
    /// are left alone.
    pub fn mkdir(&mut self, path: &str) -> Result<()> {
        let mut node = &mut self.root;
        for seg in segments(path) {
            check_segment(seg, path)?;
            let current = node;
            let FsNode::Dir(children) = current else {
                return Err(NamourError::Vfs(format!("not a directory: {path}")));
            };
            node = children
                .entry(seg.to_string())
                .or_insert_with(FsNode::empty_dir);
        }
        if node.is_dir() {
            Ok(())
        } else {
            Err(NamourError::Vfs(format!("file exists: {path}")))
        }
    }

    /// Create or overwrite a file. The parent directory must exist.
    pub fn write(&mut self, path: &str, content: &str) -> Result<()> {
        let (parent, name) = split_parent(path)
            .ok_or_else(|| NamourError::Vfs(format!("invalid file path: {path}")))?;
        check_segment(name, path)?;
        let Some(FsNode::Dir(children)) = self.lookup_mut(parent) else {
            return Err(NamourError::Vfs(format!(
                "parent directory does not exist: {parent}"
            )));
        };
        if children.get(name).is_some_and(FsNode::is_dir) {
            return Err(NamourError::Vfs(format!("is a directory: {path}")));
        }
        children.insert(name.to_string(), FsNode::File(content.to_string()));
        Ok(())
    }

    fn lookup_mut(&mut self, path: &str) -> Option<&mut FsNode> {
        let mut node = &mut self.root;
        for seg in segments(path) {
            let current = node;
            node = match current {
                FsNode::Dir(children) => children.get_mut(seg)?,
                FsNode::File(_) => return None,
            };
        }
        Some(node)
    }
}

impl Default for FsTree {
    fn default() -> Self {
        Self::new()
    }
}

fn check_segment(seg: &str, path: &str) -> Result<()> {
    if seg == "." || seg == ".." {
        return Err(NamourError::Vfs(format!(
            "relative component in path: {path}"
        )));
    }
    Ok(())
}

/// Split `/a/b/c` into (`/a/b`, `c`). Trailing slashes are ignored.
fn split_parent(path: &str) -> Option<(&str, &str)> {
    let trimmed = path.trim_end_matches('/');
    let idx = trimmed.rfind('/')?;
    let name = &trimmed[idx + 1..];
    if name.is_empty() {
        return None;
    }
    let parent = if idx == 0 { "/" } else { &trimmed[..idx] };
    Some((parent, name))
}
