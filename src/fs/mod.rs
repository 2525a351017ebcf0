//! File System Module
//!
//! In-memory folder/file tree for the shell:
//! - types: node model and errors
//! - tree: arena and folder-scoped primitives
//! - resolver: path lookup and multi-segment creation

pub mod types;
pub mod tree;
pub mod resolver;

pub use types::*;
pub use tree::Filesystem;
