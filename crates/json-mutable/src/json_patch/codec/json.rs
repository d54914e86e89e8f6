//! JSON codec for patch operations.
//!
//! Converts operations to/from `serde_json::Value` in the RFC 6902
//! `{op, path, from?, value?}` record format.

use serde_json::{json, Map, Value};

use json_mutable_pointer::Pointer;

use crate::json_tree::TreeError;

use super::super::types::{PatchError, PatchOp};

fn decode_pointer(record: &Map<String, Value>, field: &str) -> Result<Pointer, PatchError> {
    let text = record
        .get(field)
        .ok_or_else(|| PatchError::InvalidOp(format!("missing '{field}' field")))?
        .as_str()
        .ok_or_else(|| PatchError::InvalidOp(format!("'{field}' must be a string")))?;
    Pointer::parse(text)
        .map_err(TreeError::from)
        .map_err(PatchError::from)
}

fn decode_value(record: &Map<String, Value>, op: &str) -> Result<Value, PatchError> {
    record
        .get("value")
        .cloned()
        .ok_or_else(|| PatchError::InvalidOp(format!("{op} requires 'value'")))
}

/// Deserialize one operation record.
pub fn from_json(record: &Value) -> Result<PatchOp, PatchError> {
    let record = record
        .as_object()
        .ok_or_else(|| PatchError::InvalidOp("operation must be an object".to_string()))?;
    let op = record
        .get("op")
        .and_then(Value::as_str)
        .ok_or_else(|| PatchError::InvalidOp("missing 'op' field".to_string()))?;
    let path = decode_pointer(record, "path")?;

    match op {
        "add" => Ok(PatchOp::Add {
            path,
            value: decode_value(record, "add")?,
        }),
        "remove" => Ok(PatchOp::Remove { path }),
        "replace" => Ok(PatchOp::Replace {
            path,
            value: decode_value(record, "replace")?,
        }),
        "move" => Ok(PatchOp::Move {
            path,
            from: decode_pointer(record, "from")?,
        }),
        "copy" => Ok(PatchOp::Copy {
            path,
            from: decode_pointer(record, "from")?,
        }),
        "test" => Ok(PatchOp::Test {
            path,
            value: decode_value(record, "test")?,
        }),
        other => Err(PatchError::UnsupportedOp(other.to_string())),
    }
}

/// Serialize one operation to its record form.
pub fn to_json(op: &PatchOp) -> Value {
    match op {
        PatchOp::Add { path, value } => json!({
            "op": "add",
            "path": path.as_str(),
            "value": value,
        }),
        PatchOp::Remove { path } => json!({
            "op": "remove",
            "path": path.as_str(),
        }),
        PatchOp::Replace { path, value } => json!({
            "op": "replace",
            "path": path.as_str(),
            "value": value,
        }),
        PatchOp::Move { path, from } => json!({
            "op": "move",
            "path": path.as_str(),
            "from": from.as_str(),
        }),
        PatchOp::Copy { path, from } => json!({
            "op": "copy",
            "path": path.as_str(),
            "from": from.as_str(),
        }),
        PatchOp::Test { path, value } => json!({
            "op": "test",
            "path": path.as_str(),
            "value": value,
        }),
    }
}

/// Deserialize a JSON array into a list of operations.
pub fn from_json_patch(patch: &Value) -> Result<Vec<PatchOp>, PatchError> {
    let records = patch
        .as_array()
        .ok_or_else(|| PatchError::InvalidOp("patch must be an array".to_string()))?;
    records.iter().map(from_json).collect()
}

/// Serialize a list of operations to a JSON array.
pub fn to_json_patch(ops: &[PatchOp]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}
