//! Patch application logic.

use serde_json::Value;

use json_mutable_pointer::Pointer;

use crate::json_tree::{MutableJson, TreeError};

use super::codec::json::from_json;
use super::types::{PatchError, PatchOp};

/// Applies patch operations against one document.
pub struct Patcher<'a> {
    doc: &'a mut MutableJson,
}

impl<'a> Patcher<'a> {
    pub fn new(doc: &'a mut MutableJson) -> Self {
        Patcher { doc }
    }

    /// Apply operations in order. The first failure aborts the remaining
    /// operations; mutations already applied stay applied.
    pub fn apply(&mut self, ops: &[PatchOp]) -> Result<(), PatchError> {
        for op in ops {
            self.apply_op(op)?;
        }
        Ok(())
    }

    /// Apply a single operation.
    pub fn apply_op(&mut self, op: &PatchOp) -> Result<(), PatchError> {
        match op {
            PatchOp::Add { path, value } => self.add(path, value),
            PatchOp::Remove { path } => {
                let root = self.doc.root();
                self.doc.remove_ptr(root, path)?;
                Ok(())
            }
            PatchOp::Replace { path, value } => {
                let root = self.doc.root();
                match self.doc.remove_ptr(root, path) {
                    Ok(()) => {}
                    // An absent target is tolerated: replace degrades to add.
                    // The whole document likewise: replace there is the
                    // content-level replace that add performs.
                    Err(TreeError::NoSuchKey(_))
                    | Err(TreeError::BadIndex { .. })
                    | Err(TreeError::WholeDocument) => {}
                    Err(err) => return Err(err.into()),
                }
                self.add(path, value)
            }
            PatchOp::Move { path, from } => {
                let value = self.read(from)?;
                let root = self.doc.root();
                self.doc.remove_ptr(root, from)?;
                self.add(path, &value)
            }
            PatchOp::Copy { path, from } => {
                let value = self.read(from)?;
                self.add(path, &value)
            }
            PatchOp::Test { path, value } => {
                let actual = self.read(path)?;
                if actual != *value {
                    return Err(PatchError::TestFailed(path.clone()));
                }
                Ok(())
            }
        }
    }

    /// Materialize the value a pointer denotes: a leaf clone, or an
    /// immutable snapshot of the node (which carries no ancestor linkage).
    fn read(&self, pointer: &Pointer) -> Result<Value, PatchError> {
        let root = self.doc.root();
        if self.doc.is_leaf_ptr(root, pointer)? {
            Ok(self.doc.get_leaf_ptr(root, pointer)?.clone())
        } else {
            let node = self.doc.get_ptr(root, pointer)?;
            Ok(self.doc.to_value(node)?)
        }
    }

    fn add(&mut self, path: &Pointer, value: &Value) -> Result<(), PatchError> {
        let root = self.doc.root();
        self.doc.add_ptr(root, path, value)?;
        Ok(())
    }
}

/// Apply a sequence of operations to a document.
pub fn apply_patch(doc: &mut MutableJson, ops: &[PatchOp]) -> Result<(), PatchError> {
    Patcher::new(doc).apply(ops)
}

/// Decode and apply a patch given as a JSON array of operation records.
///
/// Records are decoded one at a time, so a malformed or unsupported record
/// aborts the sequence exactly like a failing operation: everything before
/// it stays applied.
pub fn apply_patch_value(doc: &mut MutableJson, patch: &Value) -> Result<(), PatchError> {
    let records = patch
        .as_array()
        .ok_or_else(|| PatchError::InvalidOp("patch must be an array".to_string()))?;
    let mut patcher = Patcher::new(doc);
    for record in records {
        let op = from_json(record)?;
        patcher.apply_op(&op)?;
    }
    Ok(())
}
