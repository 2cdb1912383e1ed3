//! Owned tree definitions.
//!
//! A [`TreeDef`] describes a tree as plain data so it can be written by hand,
//! deserialized from JSON, or generated, and then materialized in an arena.

use serde::{Deserialize, Serialize};

use crate::{Container, LeafKind, Node, TreeArena, TreeError};

/// An owned description of a composite tree.
///
/// Uses the same JSON shape a [`Node`] serializes to.
///
/// # Example
///
/// ```rust
/// use nestwalk_tree::{TreeArena, TreeDef};
///
/// let def: TreeDef = serde_json::from_str(r#"
///     {"type": "container", "children": [
///         {"type": "leaf", "kind": "resource-reference", "payload": "https://some.link"},
///         {"type": "container", "children": []}
///     ]}
/// "#).unwrap();
///
/// let arena = TreeArena::new();
/// let root = def.alloc_root(&arena).unwrap();
/// assert_eq!(root.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeDef {
    /// A leaf with its kind and payload.
    Leaf {
        /// Kind of the leaf.
        kind: LeafKind,
        /// Payload of the leaf.
        payload: String,
    },
    /// A container with ordered children.
    Container {
        /// Children in traversal order.
        #[serde(default)]
        children: Vec<TreeDef>,
    },
}

impl TreeDef {
    /// Creates a leaf definition.
    pub fn leaf(kind: LeafKind, payload: impl Into<String>) -> Self {
        Self::Leaf {
            kind,
            payload: payload.into(),
        }
    }

    /// Creates a container definition from its children.
    pub fn container(children: impl IntoIterator<Item = TreeDef>) -> Self {
        Self::Container {
            children: children.into_iter().collect(),
        }
    }

    /// Returns true if this definition describes a container.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Container { .. })
    }

    /// Allocates the described tree in `arena`.
    pub fn alloc_in<'a>(&self, arena: &'a TreeArena) -> Node<'a> {
        match self {
            Self::Leaf { kind, payload } => arena.leaf(*kind, payload),
            Self::Container { children } => alloc_children(arena, children).into(),
        }
    }

    /// Allocates the described tree in `arena` as a traversal root.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::LeafRoot`] if this definition is a leaf.
    pub fn alloc_root<'a>(&self, arena: &'a TreeArena) -> Result<Container<'a>, TreeError> {
        match self {
            Self::Container { children } => Ok(alloc_children(arena, children)),
            Self::Leaf { .. } => Err(TreeError::LeafRoot),
        }
    }
}

// Children are unlinked onto a heap worklist so dropping never recurses.
impl Drop for TreeDef {
    fn drop(&mut self) {
        let Self::Container { children } = self else {
            return;
        };
        let mut pending = std::mem::take(children);
        while let Some(mut child) = pending.pop() {
            if let Self::Container { children } = &mut child {
                pending.append(children);
            }
        }
    }
}

/// A container whose children are still being allocated.
struct Pending<'d, 'a> {
    defs: std::slice::Iter<'d, TreeDef>,
    built: Vec<Node<'a>>,
}

impl<'d> Pending<'d, '_> {
    fn new(defs: &'d [TreeDef]) -> Self {
        Self {
            defs: defs.iter(),
            built: Vec::with_capacity(defs.len()),
        }
    }
}

/// Allocates `children` bottom-up with an explicit stack of unfinished
/// containers, so nesting depth is bounded by heap rather than call stack.
fn alloc_children<'a>(arena: &'a TreeArena, children: &[TreeDef]) -> Container<'a> {
    let mut current = Pending::new(children);
    let mut parents: Vec<Pending<'_, 'a>> = Vec::new();
    loop {
        match current.defs.next() {
            Some(TreeDef::Leaf { kind, payload }) => current.built.push(arena.leaf(*kind, payload)),
            Some(TreeDef::Container { children }) => {
                parents.push(std::mem::replace(&mut current, Pending::new(children)));
            }
            None => {
                let container = arena.root(&current.built);
                match parents.pop() {
                    Some(parent) => {
                        current = parent;
                        current.built.push(container.into());
                    }
                    None => return container,
                }
            }
        }
    }
}
