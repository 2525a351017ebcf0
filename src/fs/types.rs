//! File System Types
//!
//! Node model for the in-memory tree: nodes live in an arena owned by
//! [`Filesystem`](super::Filesystem) and are addressed by [`NodeId`].

use indexmap::IndexMap;
use thiserror::Error;

/// Broad classification of filesystem failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsErrorKind {
    Conflict,
    NotFound,
    InvalidPath,
}

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("{segment} is a file already")]
    FileInTheWay { segment: String },

    #[error("{path} is an existing folder")]
    FolderInTheWay { path: String },

    #[error("{name} is not a folder")]
    NotAFolder { name: String },

    #[error("cannot move {name} into its own subtree")]
    WouldCycle { name: String },

    #[error("{name} is not an entry of {folder}")]
    NotAChild { name: String, folder: String },

    #[error("no such node")]
    DanglingNode,

    #[error("invalid path: '{path}'")]
    InvalidPath { path: String },
}

impl FsError {
    pub fn kind(&self) -> FsErrorKind {
        match self {
            FsError::FileInTheWay { .. }
            | FsError::FolderInTheWay { .. }
            | FsError::NotAFolder { .. }
            | FsError::WouldCycle { .. } => FsErrorKind::Conflict,
            FsError::NotAChild { .. } | FsError::DanglingNode => FsErrorKind::NotFound,
            FsError::InvalidPath { .. } => FsErrorKind::InvalidPath,
        }
    }
}

/// Handle of a node in the arena.
///
/// Slots are reused after removal; the generation keeps a handle to a
/// removed node from reaching whatever took its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

/// Text contents of a plain file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct File {
    contents: String,
}

impl File {
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Replace the contents.
    pub fn write(&mut self, text: &str) {
        self.contents.clear();
        self.contents.push_str(text);
    }

    pub fn append(&mut self, text: &str) {
        self.contents.push_str(text);
    }

    pub fn clear(&mut self) {
        self.contents.clear();
    }

    /// Size as shown by `ls -l`: number of characters.
    pub fn len(&self) -> usize {
        self.contents.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

/// Children of a folder, keyed by name, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Folder {
    pub(crate) children: IndexMap<String, NodeId>,
}

impl Folder {
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.children.get(name).copied()
    }

    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.values().copied()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

#[derive(Debug, Clone)]
pub enum NodeKind {
    File(File),
    Folder(Folder),
}

/// A file or folder together with its position in the tree.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) parent: NodeId,
    pub(crate) kind: NodeKind,
}

impl Node {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parent handle; the root is its own parent.
    pub fn parent(&self) -> NodeId {
        self.parent
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File(_))
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder(_))
    }

    pub fn as_file(&self) -> Option<&File> {
        match &self.kind {
            NodeKind::File(file) => Some(file),
            NodeKind::Folder(_) => None,
        }
    }

    pub fn as_folder(&self) -> Option<&Folder> {
        match &self.kind {
            NodeKind::Folder(folder) => Some(folder),
            NodeKind::File(_) => None,
        }
    }
}

/// One line of a folder listing.
///
/// Listings start with a synthetic `..` entry that is not a member of the
/// tree; its parent is the listed folder itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Up { parent: NodeId },
    Child(NodeId),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_write_append_clear() {
        let mut file = File::default();
        assert_eq!(file.contents(), "");
        file.write("Hello");
        assert_eq!(file.contents(), "Hello");
        file.append(" WOrld!");
        assert_eq!(file.contents(), "Hello WOrld!");
        file.write("x");
        assert_eq!(file.contents(), "x");
        file.clear();
        assert!(file.is_empty());
    }

    #[test]
    fn test_file_len_counts_chars() {
        let mut file = File::default();
        file.write("héllo");
        assert_eq!(file.len(), 5);
    }

    #[test]
    fn test_error_kinds() {
        let err = FsError::FileInTheWay { segment: "a".to_string() };
        assert_eq!(err.kind(), FsErrorKind::Conflict);
        assert_eq!(err.to_string(), "a is a file already");

        let err = FsError::FolderInTheWay { path: "/x".to_string() };
        assert_eq!(err.kind(), FsErrorKind::Conflict);
        assert_eq!(err.to_string(), "/x is an existing folder");

        let err = FsError::NotAChild { name: "f".to_string(), folder: "/".to_string() };
        assert_eq!(err.kind(), FsErrorKind::NotFound);

        let err = FsError::InvalidPath { path: "a/..".to_string() };
        assert_eq!(err.kind(), FsErrorKind::InvalidPath);
    }
}
