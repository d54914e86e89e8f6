//! JSON Patch (RFC 6902) engine over the mutable tree.
//!
//! Operations are applied one at a time with no rollback across the
//! sequence: a failing operation aborts the remainder of the list, and
//! mutations already applied stay applied. Callers wanting all-or-nothing
//! behavior apply the patch to a [`copy`](crate::MutableJson::copy) and
//! discard it on failure.
//!
//! # Operations
//!
//! `add`, `remove`, `replace`, `move`, `copy`, `test`.

pub mod apply;
pub mod codec;
pub mod types;

pub use apply::{apply_patch, apply_patch_value, Patcher};
pub use codec::json::{from_json, from_json_patch, to_json, to_json_patch};
pub use types::{PatchError, PatchOp};
