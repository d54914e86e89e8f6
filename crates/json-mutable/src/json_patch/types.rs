//! Operation and error types for the patch engine.

use serde_json::Value;
use thiserror::Error;

use json_mutable_pointer::Pointer;

use crate::json_tree::TreeError;

/// One JSON Patch operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchOp {
    Add { path: Pointer, value: Value },
    Remove { path: Pointer },
    Replace { path: Pointer, value: Value },
    Move { path: Pointer, from: Pointer },
    Copy { path: Pointer, from: Pointer },
    Test { path: Pointer, value: Value },
}

impl PatchOp {
    /// The operation name as it appears in the wire format.
    pub fn op_name(&self) -> &'static str {
        match self {
            PatchOp::Add { .. } => "add",
            PatchOp::Remove { .. } => "remove",
            PatchOp::Replace { .. } => "replace",
            PatchOp::Move { .. } => "move",
            PatchOp::Copy { .. } => "copy",
            PatchOp::Test { .. } => "test",
        }
    }

    /// The target path of the operation.
    pub fn path(&self) -> &Pointer {
        match self {
            PatchOp::Add { path, .. } => path,
            PatchOp::Remove { path } => path,
            PatchOp::Replace { path, .. } => path,
            PatchOp::Move { path, .. } => path,
            PatchOp::Copy { path, .. } => path,
            PatchOp::Test { path, .. } => path,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PatchError {
    /// A `test` operation found a different value at its path.
    #[error("test failed at '{0}'")]
    TestFailed(Pointer),
    /// The operation record names an op this engine does not implement.
    #[error("unsupported op '{0}'")]
    UnsupportedOp(String),
    /// The operation record is malformed.
    #[error("invalid operation: {0}")]
    InvalidOp(String),
    #[error(transparent)]
    Tree(#[from] TreeError),
}
