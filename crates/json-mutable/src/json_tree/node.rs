//! The arena-backed mutable document tree.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use json_mutable_pointer::Pointer;

use super::ancestor::{Ancestor, Position};
use super::types::{Kind, NodeId, Place, TreeError};

/// Default ceiling on structural nesting depth.
pub const DEFAULT_DEPTH_LIMIT: usize = 256;

/// One owned position inside a node: a scalar leaf or a nested node.
#[derive(Debug)]
enum Slot {
    Leaf(Value),
    Child(NodeId),
}

/// The children of a node, keyed or indexed according to its kind.
#[derive(Debug)]
enum Payload {
    Object(IndexMap<String, Slot>),
    Array(Vec<Slot>),
}

#[derive(Debug)]
struct NodeCell {
    payload: Payload,
    /// Recorded once when the node is attached; never owns the parent.
    parent: Option<NodeId>,
}

/// A mutable, navigable JSON document.
///
/// Every node of the document lives in one arena owned by this value;
/// [`NodeId`] handles address them. Wrapping an immutable document walks it
/// eagerly, leaves are duplicated freely, nodes have exactly one owner.
/// Removing a position releases the whole subtree beneath it and invalidates
/// its handles.
#[derive(Debug)]
pub struct MutableJson {
    nodes: Vec<Option<NodeCell>>,
    free: Vec<u32>,
    root: NodeId,
    depth_limit: usize,
}

impl MutableJson {
    /// Wrap an immutable document into a mutable tree.
    ///
    /// The root must be an object or an array. The walk is recursive and
    /// eager; nesting beyond [`DEFAULT_DEPTH_LIMIT`] fails with
    /// [`TreeError::TooDeep`].
    pub fn from_value(doc: &Value) -> Result<Self, TreeError> {
        Self::with_depth_limit(doc, DEFAULT_DEPTH_LIMIT)
    }

    /// Wrap an immutable document with a custom nesting ceiling.
    pub fn with_depth_limit(doc: &Value, depth_limit: usize) -> Result<Self, TreeError> {
        ensure_depth(doc, depth_limit, depth_limit)?;
        let mut tree = Self::empty(depth_limit);
        tree.root = tree.wrap(doc, None)?;
        Ok(tree)
    }

    /// A tree holding a single empty object.
    pub fn new_object() -> Self {
        let mut tree = Self::empty(DEFAULT_DEPTH_LIMIT);
        tree.root = tree.alloc(Payload::Object(IndexMap::new()), None);
        tree
    }

    /// A tree holding a single empty array.
    pub fn new_array() -> Self {
        let mut tree = Self::empty(DEFAULT_DEPTH_LIMIT);
        tree.root = tree.alloc(Payload::Array(Vec::new()), None);
        tree
    }

    fn empty(depth_limit: usize) -> Self {
        MutableJson {
            nodes: Vec::new(),
            free: Vec::new(),
            root: NodeId(0),
            depth_limit,
        }
    }

    /// The root node of the document.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The configured nesting ceiling.
    pub fn depth_limit(&self) -> usize {
        self.depth_limit
    }

    // ── Arena plumbing ───────────────────────────────────────────────────

    fn cell(&self, id: NodeId) -> Result<&NodeCell, TreeError> {
        self.nodes
            .get(id.0 as usize)
            .and_then(Option::as_ref)
            .ok_or(TreeError::Detached)
    }

    fn cell_mut(&mut self, id: NodeId) -> Result<&mut NodeCell, TreeError> {
        self.nodes
            .get_mut(id.0 as usize)
            .and_then(Option::as_mut)
            .ok_or(TreeError::Detached)
    }

    fn alloc(&mut self, payload: Payload, parent: Option<NodeId>) -> NodeId {
        let cell = NodeCell { payload, parent };
        match self.free.pop() {
            Some(index) => {
                self.nodes[index as usize] = Some(cell);
                NodeId(index)
            }
            None => {
                self.nodes.push(Some(cell));
                NodeId((self.nodes.len() - 1) as u32)
            }
        }
    }

    /// Release a node and everything beneath it back to the free list.
    fn release(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            let Some(cell) = self.nodes.get_mut(id.0 as usize).and_then(Option::take) else {
                continue;
            };
            match cell.payload {
                Payload::Object(entries) => {
                    for (_, slot) in entries {
                        if let Slot::Child(child) = slot {
                            stack.push(child);
                        }
                    }
                }
                Payload::Array(entries) => {
                    for slot in entries {
                        if let Slot::Child(child) = slot {
                            stack.push(child);
                        }
                    }
                }
            }
            self.free.push(id.0);
        }
    }

    fn release_slot(&mut self, slot: Slot) {
        if let Slot::Child(child) = slot {
            self.release(child);
        }
    }

    /// Allocate a node for a structured value and fill it recursively.
    fn wrap(&mut self, value: &Value, parent: Option<NodeId>) -> Result<NodeId, TreeError> {
        let payload = match value {
            Value::Object(_) => Payload::Object(IndexMap::new()),
            Value::Array(_) => Payload::Array(Vec::new()),
            _ => return Err(TreeError::StructureRequired),
        };
        let id = self.alloc(payload, parent);
        self.fill(id, value)?;
        Ok(id)
    }

    /// Populate an empty node from the children of a structured value.
    fn fill(&mut self, id: NodeId, value: &Value) -> Result<(), TreeError> {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    let slot = self.make_slot(child, id)?;
                    match &mut self.cell_mut(id)?.payload {
                        Payload::Object(entries) => {
                            entries.insert(key.clone(), slot);
                        }
                        Payload::Array(_) => unreachable!("payload kind fixed at wrap"),
                    }
                }
            }
            Value::Array(items) => {
                for child in items {
                    let slot = self.make_slot(child, id)?;
                    match &mut self.cell_mut(id)?.payload {
                        Payload::Array(entries) => entries.push(slot),
                        Payload::Object(_) => unreachable!("payload kind fixed at wrap"),
                    }
                }
            }
            _ => return Err(TreeError::StructureRequired),
        }
        Ok(())
    }

    fn make_slot(&mut self, value: &Value, parent: NodeId) -> Result<Slot, TreeError> {
        Ok(match value {
            Value::Object(_) | Value::Array(_) => Slot::Child(self.wrap(value, Some(parent))?),
            leaf => Slot::Leaf(leaf.clone()),
        })
    }

    fn slot(&self, id: NodeId, place: Place<'_>) -> Result<&Slot, TreeError> {
        match (&self.cell(id)?.payload, place) {
            (Payload::Object(entries), Place::Key(key)) => entries
                .get(key)
                .ok_or_else(|| TreeError::NoSuchKey(key.to_string())),
            (Payload::Array(entries), Place::Index(index)) => {
                entries.get(index).ok_or(TreeError::BadIndex {
                    index,
                    len: entries.len(),
                })
            }
            (Payload::Object(_), Place::Index(_)) => Err(TreeError::ArrayRequired),
            (Payload::Array(_), Place::Key(_)) => Err(TreeError::ObjectRequired),
        }
    }

    /// Structure nesting headroom below `id`, for values inserted as children.
    fn check_insert_depth(&self, id: NodeId, value: &Value) -> Result<(), TreeError> {
        if !matches!(value, Value::Object(_) | Value::Array(_)) {
            return Ok(());
        }
        let used = self.depth_of(id)?;
        let remaining = self.depth_limit.saturating_sub(used);
        ensure_depth(value, remaining, self.depth_limit)
    }

    fn depth_of(&self, id: NodeId) -> Result<usize, TreeError> {
        let mut depth = 1;
        let mut current = id;
        while let Some(parent) = self.cell(current)?.parent {
            depth += 1;
            current = parent;
        }
        Ok(depth)
    }

    // ── Inspection ───────────────────────────────────────────────────────

    /// Whether the node is an object or an array.
    pub fn kind(&self, id: NodeId) -> Result<Kind, TreeError> {
        Ok(match &self.cell(id)?.payload {
            Payload::Object(_) => Kind::Object,
            Payload::Array(_) => Kind::Array,
        })
    }

    pub fn is_array(&self, id: NodeId) -> Result<bool, TreeError> {
        Ok(self.kind(id)? == Kind::Array)
    }

    /// Number of members or elements.
    pub fn size(&self, id: NodeId) -> Result<usize, TreeError> {
        Ok(match &self.cell(id)?.payload {
            Payload::Object(entries) => entries.len(),
            Payload::Array(entries) => entries.len(),
        })
    }

    /// The member keys of an object node, in order.
    pub fn keys(&self, id: NodeId) -> Result<impl Iterator<Item = &str> + '_, TreeError> {
        match &self.cell(id)?.payload {
            Payload::Object(entries) => Ok(entries.keys().map(String::as_str)),
            Payload::Array(_) => Err(TreeError::ObjectRequired),
        }
    }

    /// Whether a key or index is present. Kind-checked: asking an array
    /// about a key (or an object about an index) is an error, not `false`.
    pub fn exists<'a>(&self, id: NodeId, place: impl Into<Place<'a>>) -> Result<bool, TreeError> {
        match (&self.cell(id)?.payload, place.into()) {
            (Payload::Object(entries), Place::Key(key)) => Ok(entries.contains_key(key)),
            (Payload::Array(entries), Place::Index(index)) => Ok(index < entries.len()),
            (Payload::Object(_), Place::Index(_)) => Err(TreeError::ArrayRequired),
            (Payload::Array(_), Place::Key(_)) => Err(TreeError::ObjectRequired),
        }
    }

    /// Whether the position holds a leaf. Fails if the position is absent.
    pub fn is_leaf<'a>(&self, id: NodeId, place: impl Into<Place<'a>>) -> Result<bool, TreeError> {
        Ok(matches!(self.slot(id, place.into())?, Slot::Leaf(_)))
    }

    /// Whether the position holds the null leaf. Fails on a nested node.
    pub fn is_leaf_null<'a>(
        &self,
        id: NodeId,
        place: impl Into<Place<'a>>,
    ) -> Result<bool, TreeError> {
        Ok(self.get_leaf(id, place)?.is_null())
    }

    // ── Keyed and indexed access ─────────────────────────────────────────

    /// The nested node at a position.
    pub fn get<'a>(&self, id: NodeId, place: impl Into<Place<'a>>) -> Result<NodeId, TreeError> {
        let place = place.into();
        match self.slot(id, place)? {
            Slot::Child(child) => Ok(*child),
            Slot::Leaf(_) => Err(TreeError::NotANode(place.to_string())),
        }
    }

    /// The scalar leaf at a position.
    pub fn get_leaf<'a>(
        &self,
        id: NodeId,
        place: impl Into<Place<'a>>,
    ) -> Result<&Value, TreeError> {
        let place = place.into();
        match self.slot(id, place)? {
            Slot::Leaf(value) => Ok(value),
            Slot::Child(_) => Err(TreeError::NotALeaf(place.to_string())),
        }
    }

    /// The leaf at a position, as a string.
    pub fn leaf_str<'a>(
        &self,
        id: NodeId,
        place: impl Into<Place<'a>>,
    ) -> Result<&str, TreeError> {
        self.get_leaf(id, place)?
            .as_str()
            .ok_or(TreeError::LeafKind("string"))
    }

    /// The leaf at a position, as an exact integer.
    pub fn leaf_i64<'a>(&self, id: NodeId, place: impl Into<Place<'a>>) -> Result<i64, TreeError> {
        self.get_leaf(id, place)?
            .as_i64()
            .ok_or(TreeError::LeafKind("integer"))
    }

    /// The leaf at a position, as a boolean.
    pub fn leaf_bool<'a>(
        &self,
        id: NodeId,
        place: impl Into<Place<'a>>,
    ) -> Result<bool, TreeError> {
        self.get_leaf(id, place)?
            .as_bool()
            .ok_or(TreeError::LeafKind("boolean"))
    }

    // ── Keyed and indexed mutation ───────────────────────────────────────

    /// Replace an existing position. Structured values become nested nodes,
    /// scalars become leaves; the replaced subtree is released.
    pub fn set<'a>(
        &mut self,
        id: NodeId,
        place: impl Into<Place<'a>>,
        value: &Value,
    ) -> Result<(), TreeError> {
        let place = place.into();
        match (&self.cell(id)?.payload, place) {
            (Payload::Object(entries), Place::Key(key)) => {
                if !entries.contains_key(key) {
                    return Err(TreeError::NoSuchKey(key.to_string()));
                }
            }
            (Payload::Array(entries), Place::Index(index)) => {
                if index >= entries.len() {
                    return Err(TreeError::BadIndex {
                        index,
                        len: entries.len(),
                    });
                }
            }
            (Payload::Object(_), Place::Index(_)) => return Err(TreeError::ArrayRequired),
            (Payload::Array(_), Place::Key(_)) => return Err(TreeError::ObjectRequired),
        }
        self.check_insert_depth(id, value)?;
        let slot = self.make_slot(value, id)?;
        let old = match (&mut self.cell_mut(id)?.payload, place) {
            (Payload::Object(entries), Place::Key(key)) => entries.insert(key.to_string(), slot),
            (Payload::Array(entries), Place::Index(index)) => {
                Some(std::mem::replace(&mut entries[index], slot))
            }
            _ => unreachable!("kind checked above"),
        };
        if let Some(old) = old {
            self.release_slot(old);
        }
        Ok(())
    }

    /// Insert a value. Objects insert or overwrite the key (keeping its
    /// position on overwrite); arrays insert at the index, shifting later
    /// elements, and append when the index equals the current length.
    pub fn add<'a>(
        &mut self,
        id: NodeId,
        place: impl Into<Place<'a>>,
        value: &Value,
    ) -> Result<(), TreeError> {
        let place = place.into();
        match (&self.cell(id)?.payload, place) {
            (Payload::Object(_), Place::Key(_)) => {}
            (Payload::Array(entries), Place::Index(index)) => {
                if index > entries.len() {
                    return Err(TreeError::BadIndex {
                        index,
                        len: entries.len(),
                    });
                }
            }
            (Payload::Object(_), Place::Index(_)) => return Err(TreeError::ArrayRequired),
            (Payload::Array(_), Place::Key(_)) => return Err(TreeError::ObjectRequired),
        }
        self.check_insert_depth(id, value)?;
        let slot = self.make_slot(value, id)?;
        let old = match (&mut self.cell_mut(id)?.payload, place) {
            (Payload::Object(entries), Place::Key(key)) => entries.insert(key.to_string(), slot),
            (Payload::Array(entries), Place::Index(index)) => {
                entries.insert(index, slot);
                None
            }
            _ => unreachable!("kind checked above"),
        };
        if let Some(old) = old {
            self.release_slot(old);
        }
        Ok(())
    }

    /// Append a value to an array node.
    pub fn push(&mut self, id: NodeId, value: &Value) -> Result<(), TreeError> {
        let len = match &self.cell(id)?.payload {
            Payload::Array(entries) => entries.len(),
            Payload::Object(_) => return Err(TreeError::ArrayRequired),
        };
        self.add(id, len, value)
    }

    /// Delete a position. Object deletion drops the key keeping the order of
    /// the remaining members; array deletion shifts later indices down. The
    /// removed subtree is released.
    pub fn remove<'a>(
        &mut self,
        id: NodeId,
        place: impl Into<Place<'a>>,
    ) -> Result<(), TreeError> {
        let place = place.into();
        let old = match (&mut self.cell_mut(id)?.payload, place) {
            (Payload::Object(entries), Place::Key(key)) => entries
                .shift_remove(key)
                .ok_or_else(|| TreeError::NoSuchKey(key.to_string()))?,
            (Payload::Array(entries), Place::Index(index)) => {
                if index >= entries.len() {
                    return Err(TreeError::BadIndex {
                        index,
                        len: entries.len(),
                    });
                }
                entries.remove(index)
            }
            (Payload::Object(_), Place::Index(_)) => return Err(TreeError::ArrayRequired),
            (Payload::Array(_), Place::Key(_)) => return Err(TreeError::ObjectRequired),
        };
        self.release_slot(old);
        Ok(())
    }

    /// Content-level replace: swap this node's own members or elements for
    /// those of `value`, object for object and array for array. Handles to
    /// the node stay valid and observe the new contents.
    pub fn set_contents(&mut self, id: NodeId, value: &Value) -> Result<(), TreeError> {
        let fresh = match (&self.cell(id)?.payload, value) {
            (Payload::Object(_), Value::Object(_)) => Payload::Object(IndexMap::new()),
            (Payload::Array(_), Value::Array(_)) => Payload::Array(Vec::new()),
            (Payload::Object(_), _) => return Err(TreeError::ObjectRequired),
            (Payload::Array(_), _) => return Err(TreeError::ArrayRequired),
        };
        let used = self.depth_of(id)?;
        let remaining = (self.depth_limit + 1).saturating_sub(used);
        ensure_depth(value, remaining, self.depth_limit)?;
        let old = std::mem::replace(&mut self.cell_mut(id)?.payload, fresh);
        match old {
            Payload::Object(entries) => {
                for (_, slot) in entries {
                    self.release_slot(slot);
                }
            }
            Payload::Array(entries) => {
                for slot in entries {
                    self.release_slot(slot);
                }
            }
        }
        self.fill(id, value)
    }

    // ── Snapshots ────────────────────────────────────────────────────────

    /// Recursive snapshot into the immutable value model. The snapshot is
    /// decoupled from any further mutation of the tree.
    pub fn to_value(&self, id: NodeId) -> Result<Value, TreeError> {
        Ok(match &self.cell(id)?.payload {
            Payload::Object(entries) => {
                let mut map = Map::new();
                for (key, slot) in entries {
                    map.insert(key.clone(), self.slot_value(slot)?);
                }
                Value::Object(map)
            }
            Payload::Array(entries) => Value::Array(
                entries
                    .iter()
                    .map(|slot| self.slot_value(slot))
                    .collect::<Result<_, _>>()?,
            ),
        })
    }

    fn slot_value(&self, slot: &Slot) -> Result<Value, TreeError> {
        match slot {
            Slot::Leaf(value) => Ok(value.clone()),
            Slot::Child(child) => self.to_value(*child),
        }
    }

    /// Deep, fully detached clone of the subtree at `id`. The clone shares
    /// no nodes with this tree and its root has no ancestor.
    pub fn copy(&self, id: NodeId) -> Result<MutableJson, TreeError> {
        let snapshot = self.to_value(id)?;
        MutableJson::with_depth_limit(&snapshot, self.depth_limit)
    }

    // ── Upward navigation ────────────────────────────────────────────────

    /// The back-reference for a node, or `None` for the root. The position
    /// is computed from the parent's live collection, never cached.
    pub fn ancestor(&self, id: NodeId) -> Result<Option<Ancestor>, TreeError> {
        let Some(parent) = self.cell(id)?.parent else {
            return Ok(None);
        };
        let position = self.position_in(parent, id)?;
        Ok(Some(Ancestor { parent, position }))
    }

    /// The owning parent, or `None` for the root.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, TreeError> {
        Ok(self.cell(id)?.parent)
    }

    /// The pointer currently addressing `id`, assembled by walking ancestor
    /// links up to the root.
    pub fn pointer_of(&self, id: NodeId) -> Result<Pointer, TreeError> {
        let mut segments = Vec::new();
        let mut current = id;
        while let Some(ancestor) = self.ancestor(current)? {
            segments.push(ancestor.position.to_string());
            current = ancestor.parent;
        }
        let mut pointer = Pointer::root();
        for segment in segments.iter().rev() {
            pointer = pointer.child(segment);
        }
        Ok(pointer)
    }

    fn position_in(&self, parent: NodeId, child: NodeId) -> Result<Position, TreeError> {
        match &self.cell(parent)?.payload {
            Payload::Object(entries) => entries
                .iter()
                .find_map(|(key, slot)| match slot {
                    Slot::Child(c) if *c == child => Some(Position::Key(key.clone())),
                    _ => None,
                })
                .ok_or(TreeError::Detached),
            Payload::Array(entries) => entries
                .iter()
                .position(|slot| matches!(slot, Slot::Child(c) if *c == child))
                .map(Position::Index)
                .ok_or(TreeError::Detached),
        }
    }

    // ── Pointer-based access ─────────────────────────────────────────────

    /// Resolve a pointer to the node it denotes, descending by key or index
    /// according to each intermediate node's kind. The whole-document
    /// pointer denotes `id` itself.
    pub fn get_ptr(&self, id: NodeId, pointer: &Pointer) -> Result<NodeId, TreeError> {
        let mut current = id;
        for token in pointer.tokens() {
            current = match &self.cell(current)?.payload {
                Payload::Array(entries) => {
                    let index = token.as_index(entries.len())?;
                    self.get(current, index)?
                }
                Payload::Object(_) => self.get(current, token.as_str())?,
            };
        }
        Ok(current)
    }

    /// The leaf a pointer denotes. The append sentinel never denotes an
    /// existing element, so it fails here.
    pub fn get_leaf_ptr(&self, id: NodeId, pointer: &Pointer) -> Result<&Value, TreeError> {
        match pointer.last_token() {
            None => Err(TreeError::NotALeaf(pointer.to_string())),
            Some(last) => {
                let parent = self.get_ptr(id, &pointer.parent())?;
                match &self.cell(parent)?.payload {
                    Payload::Array(entries) => {
                        let index = last.as_index(entries.len())?;
                        self.get_leaf(parent, index)
                    }
                    Payload::Object(_) => self.get_leaf(parent, last.as_str()),
                }
            }
        }
    }

    /// Replace the position a pointer denotes. The whole-document pointer
    /// triggers the content-level replace of this node itself.
    pub fn set_ptr(&mut self, id: NodeId, pointer: &Pointer, value: &Value) -> Result<(), TreeError> {
        match pointer.last_token() {
            None => self.set_contents(id, value),
            Some(last) => {
                let parent = self.get_ptr(id, &pointer.parent())?;
                match self.kind(parent)? {
                    Kind::Array => {
                        let index = last.as_index(self.size(parent)?)?;
                        self.set(parent, index, value)
                    }
                    Kind::Object => self.set(parent, last.as_str(), value),
                }
            }
        }
    }

    /// Insert at the position a pointer denotes; the append sentinel `-`
    /// resolves to one past the end of the parent array. The whole-document
    /// pointer triggers the content-level replace.
    pub fn add_ptr(&mut self, id: NodeId, pointer: &Pointer, value: &Value) -> Result<(), TreeError> {
        match pointer.last_token() {
            None => self.set_contents(id, value),
            Some(last) => {
                let parent = self.get_ptr(id, &pointer.parent())?;
                match self.kind(parent)? {
                    Kind::Array => {
                        let index = last.as_index(self.size(parent)?)?;
                        self.add(parent, index, value)
                    }
                    Kind::Object => self.add(parent, last.as_str(), value),
                }
            }
        }
    }

    /// Delete the position a pointer denotes.
    pub fn remove_ptr(&mut self, id: NodeId, pointer: &Pointer) -> Result<(), TreeError> {
        match pointer.last_token() {
            None => Err(TreeError::WholeDocument),
            Some(last) => {
                let parent = self.get_ptr(id, &pointer.parent())?;
                match self.kind(parent)? {
                    Kind::Array => {
                        let index = last.as_index(self.size(parent)?)?;
                        self.remove(parent, index)
                    }
                    Kind::Object => self.remove(parent, last.as_str()),
                }
            }
        }
    }

    /// Whether a pointer resolves to a leaf. Fails if the target is absent;
    /// the whole-document pointer is a structure, never a leaf.
    pub fn is_leaf_ptr(&self, id: NodeId, pointer: &Pointer) -> Result<bool, TreeError> {
        match pointer.last_token() {
            None => Ok(false),
            Some(last) => {
                let parent = self.get_ptr(id, &pointer.parent())?;
                match &self.cell(parent)?.payload {
                    Payload::Array(entries) => {
                        let index = last.as_index(entries.len())?;
                        self.is_leaf(parent, index)
                    }
                    Payload::Object(_) => self.is_leaf(parent, last.as_str()),
                }
            }
        }
    }

    /// Whether a pointer resolves to the null leaf.
    pub fn is_leaf_null_ptr(&self, id: NodeId, pointer: &Pointer) -> Result<bool, TreeError> {
        Ok(self.get_leaf_ptr(id, pointer)?.is_null())
    }

    /// Whether a pointer resolves at all. Never errors.
    pub fn exists_ptr(&self, id: NodeId, pointer: &Pointer) -> bool {
        self.is_leaf_ptr(id, pointer).is_ok()
    }
}

/// Check that the structural nesting of `value` stays within `remaining`
/// levels. Scalars consume no depth; recursion bails at the ceiling, so the
/// stack stays bounded on adversarial input.
fn ensure_depth(value: &Value, remaining: usize, limit: usize) -> Result<(), TreeError> {
    match value {
        Value::Object(map) => {
            if remaining == 0 {
                return Err(TreeError::TooDeep(limit));
            }
            for child in map.values() {
                ensure_depth(child, remaining - 1, limit)?;
            }
            Ok(())
        }
        Value::Array(items) => {
            if remaining == 0 {
                return Err(TreeError::TooDeep(limit));
            }
            for child in items {
                ensure_depth(child, remaining - 1, limit)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}
