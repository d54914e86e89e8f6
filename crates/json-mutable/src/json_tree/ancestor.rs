//! Non-owning back-reference from a node to its container.

use std::fmt;

use super::types::NodeId;

/// A node's position within its parent: the member key under an object
/// parent, the element index under an array parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position {
    Key(String),
    Index(usize),
}

impl Position {
    pub fn key(&self) -> Option<&str> {
        match self {
            Position::Key(key) => Some(key),
            Position::Index(_) => None,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Position::Key(_) => None,
            Position::Index(index) => Some(*index),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Key(key) => f.write_str(key),
            Position::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Where a node hangs: its owning parent and the position under it.
///
/// The position is recomputed from the parent's live collection on every
/// query, so structural edits among the siblings never leave a stale index
/// behind. `Display` renders the single path segment the link represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ancestor {
    pub parent: NodeId,
    pub position: Position,
}

impl Ancestor {
    /// True when the owning parent is an array.
    pub fn is_array(&self) -> bool {
        matches!(self.position, Position::Index(_))
    }

    pub fn key(&self) -> Option<&str> {
        self.position.key()
    }

    pub fn index(&self) -> Option<usize> {
        self.position.index()
    }
}

impl fmt::Display for Ancestor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.position.fmt(f)
    }
}
