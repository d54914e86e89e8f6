//! Mutable, navigable JSON tree.
//!
//! [`MutableJson`] owns every node of a document in an arena and hands out
//! copyable [`NodeId`] handles. Nodes are objects or arrays; scalars live as
//! leaf slots inside their containing node. Each node carries a non-owning
//! back-reference to its parent, so a handle can be resolved upward into the
//! [`Pointer`](json_mutable_pointer::Pointer) that currently addresses it.
//!
//! Conversion from and to `serde_json::Value` is eager and recursive: the
//! tree targets bounded, in-memory editing, not streaming.

mod ancestor;
mod node;
mod types;

pub use ancestor::{Ancestor, Position};
pub use node::{MutableJson, DEFAULT_DEPTH_LIMIT};
pub use types::{Kind, NodeId, Place, TreeError};
