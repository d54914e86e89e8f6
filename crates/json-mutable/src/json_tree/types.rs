//! Handle, kind, and error types for the mutable tree.

use std::fmt;

use json_mutable_pointer::PointerError;
use thiserror::Error;

/// Handle to one node inside a [`MutableJson`](super::MutableJson) arena.
///
/// Handles are plain indices: cheap to copy, valid until the node they name
/// is removed from the tree. Using the handle of a removed node fails with
/// [`TreeError::Detached`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

/// The two structural node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Object,
    Array,
}

/// A position inside a node: an object key or an array index.
///
/// `From` conversions let call sites pass `"key"` or `3` directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Place<'a> {
    Key(&'a str),
    Index(usize),
}

impl<'a> From<&'a str> for Place<'a> {
    fn from(key: &'a str) -> Self {
        Place::Key(key)
    }
}

impl<'a> From<&'a String> for Place<'a> {
    fn from(key: &'a String) -> Self {
        Place::Key(key)
    }
}

impl From<usize> for Place<'_> {
    fn from(index: usize) -> Self {
        Place::Index(index)
    }
}

impl fmt::Display for Place<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Place::Key(key) => f.write_str(key),
            Place::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Errors produced by tree navigation and editing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// An object-only operation was applied to an array node.
    #[error("object required")]
    ObjectRequired,
    /// An array-only operation was applied to an object node.
    #[error("array required")]
    ArrayRequired,
    /// A document root must be an object or an array.
    #[error("JSON structure required")]
    StructureRequired,
    #[error("no such key '{0}'")]
    NoSuchKey(String),
    #[error("invalid index {index} for length {len}")]
    BadIndex { index: usize, len: usize },
    /// The position exists but holds a leaf, not a nested structure.
    #[error("'{0}' does not denote a nested structure")]
    NotANode(String),
    /// The position exists but holds a nested structure, not a leaf.
    #[error("'{0}' does not denote a leaf")]
    NotALeaf(String),
    /// Typed leaf access found a leaf of a different type.
    #[error("{0} leaf required")]
    LeafKind(&'static str),
    /// The handle names a node that was removed from the tree.
    #[error("node is detached")]
    Detached,
    #[error("the whole document cannot be removed")]
    WholeDocument,
    #[error("nesting deeper than {0} levels")]
    TooDeep(usize),
    #[error(transparent)]
    Pointer(#[from] PointerError),
}
