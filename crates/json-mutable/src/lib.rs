//! json-mutable — mutable, navigable JSON document trees.
//!
//! An immutable `serde_json::Value` document is wrapped into an arena-backed
//! tree of mutable nodes that can be walked by key, index, or JSON Pointer,
//! edited in place, and snapshotted back into an immutable value. A patch
//! engine applies ordered RFC 6902 operation lists against such a tree.
//!
//! # Example
//!
//! ```
//! use json_mutable::{json_patch, MutableJson};
//! use serde_json::json;
//!
//! let mut doc = MutableJson::from_value(&json!({"a": [1, 2, 3]})).unwrap();
//! let patch = json!([{"op": "add", "path": "/a/-", "value": 4}]);
//! json_patch::apply_patch_value(&mut doc, &patch).unwrap();
//! assert_eq!(doc.to_value(doc.root()).unwrap(), json!({"a": [1, 2, 3, 4]}));
//! ```

pub mod json_patch;
pub mod json_tree;

pub use json_patch::{apply_patch, PatchError, PatchOp, Patcher};
pub use json_tree::{Ancestor, Kind, MutableJson, NodeId, Place, Position, TreeError};

pub use json_mutable_pointer::{Pointer, PointerError, Token};
