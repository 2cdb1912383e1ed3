//! Node definitions.
//!
//! The recursive shape every traversal operates over.

use serde::Serialize;

use crate::{LeafIter, LeafKind};

/// A node in a composite tree.
///
/// A node is either an atomic [`Leaf`] or a [`Container`] of further nodes.
/// Nodes are allocated in a [`TreeArena`](crate::TreeArena) and are cheap to
/// copy: a container only holds a borrowed slice of its children.
///
/// # Lifetime
///
/// The `'a` lifetime ties the node to its arena, ensuring that all child
/// references remain valid.
///
/// # Serialization
///
/// Nodes serialize to the same shape [`TreeDef`](crate::TreeDef)
/// deserializes from:
///
/// ```json
/// {"type":"container","children":[{"type":"leaf","kind":"marker","payload":"A"}]}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node<'a> {
    /// An atomic node with no children.
    Leaf(Leaf<'a>),
    /// An ordered sequence of child nodes.
    Container(Container<'a>),
}

/// An atomic node carrying a kind tag and an opaque payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Leaf<'a> {
    /// The kind of this leaf.
    pub kind: LeafKind,

    /// Value extracted by traversal consumers, e.g. a URL.
    pub payload: &'a str,
}

/// A node holding an ordered sequence of children.
///
/// Insertion order is traversal order. A container may be empty and may hold
/// further containers to any depth.
///
/// The children must not change while a traversal over the container is in
/// progress. Arena-allocated children are immutable, so this holds for every
/// tree built through [`TreeArena`](crate::TreeArena).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Container<'a> {
    children: &'a [Node<'a>],
}

impl<'a> Leaf<'a> {
    /// Creates a new leaf.
    #[inline]
    pub const fn new(kind: LeafKind, payload: &'a str) -> Self {
        Self { kind, payload }
    }
}

impl<'a> Container<'a> {
    /// Creates a container over already allocated children.
    #[inline]
    pub const fn new(children: &'a [Node<'a>]) -> Self {
        Self { children }
    }

    /// Creates a container with no children.
    #[inline]
    pub const fn empty() -> Self {
        Self { children: &[] }
    }

    /// Returns the children in order.
    #[inline]
    pub const fn children(&self) -> &'a [Node<'a>] {
        self.children
    }

    /// Returns the child at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a Node<'a>> {
        self.children.get(index)
    }

    /// Returns the number of direct children.
    #[inline]
    pub const fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if this container has no direct children.
    ///
    /// A container with only empty sub-containers is not empty, even though
    /// it has no leaves.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns a fresh iterator over the leaves below this container.
    ///
    /// Every call starts again from the first leaf. Iterators created from the
    /// same container are fully independent.
    #[inline]
    pub fn leaves(&self) -> LeafIter<'a> {
        LeafIter::new(self)
    }
}

impl<'a> IntoIterator for &Container<'a> {
    type Item = &'a Leaf<'a>;
    type IntoIter = LeafIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.leaves()
    }
}

impl<'a> IntoIterator for Container<'a> {
    type Item = &'a Leaf<'a>;
    type IntoIter = LeafIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.leaves()
    }
}

impl<'a> Node<'a> {
    /// Returns true if this node is a leaf.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Returns true if this node is a container.
    #[inline]
    pub const fn is_container(&self) -> bool {
        matches!(self, Node::Container(_))
    }

    /// Returns the leaf, if this node is one.
    #[inline]
    pub const fn as_leaf(&self) -> Option<&Leaf<'a>> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            Node::Container(_) => None,
        }
    }

    /// Returns the container, if this node is one.
    #[inline]
    pub const fn as_container(&self) -> Option<&Container<'a>> {
        match self {
            Node::Container(container) => Some(container),
            Node::Leaf(_) => None,
        }
    }
}

impl<'a> From<Leaf<'a>> for Node<'a> {
    fn from(leaf: Leaf<'a>) -> Self {
        Node::Leaf(leaf)
    }
}

impl<'a> From<Container<'a>> for Node<'a> {
    fn from(container: Container<'a>) -> Self {
        Node::Container(container)
    }
}
