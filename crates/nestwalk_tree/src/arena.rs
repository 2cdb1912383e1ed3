//! Arena allocator for tree nodes.
//!
//! Uses `bumpalo` for bump allocation of children slices and payloads.
//! All nodes of a tree live in the same arena and are freed together
//! when the arena is dropped.

use bumpalo::Bump;

use crate::{Container, Leaf, LeafKind, Node};

/// Arena allocator for composite trees.
///
/// The arena provides the construction
/// helpers used to build trees bottom-up: [`leaf`](Self::leaf),
/// [`container`](Self::container) and [`root`](Self::root). Payload strings
/// and children slices are copied into the arena, so the finished tree
/// borrows only from the arena itself.
///
/// # Example
///
/// ```rust
/// use nestwalk_tree::{LeafKind, TreeArena};
///
/// let arena = TreeArena::new();
///
/// let squad = arena.container(&[
///     arena.leaf(LeafKind::Marker, "trooper"),
///     arena.leaf(LeafKind::Marker, "trooper"),
/// ]);
/// let platoon = arena.root(&[squad, arena.leaf(LeafKind::Marker, "trooper")]);
///
/// assert_eq!(platoon.len(), 2);
/// assert_eq!(platoon.leaves().count(), 3);
/// ```
pub struct TreeArena {
    bump: Bump,
}

impl TreeArena {
    /// Creates a new arena allocator.
    #[inline]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Allocates a string slice in the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Allocates a slice in the arena by copying from the input slice.
    #[inline]
    pub fn alloc_slice_copy<T: Copy>(&self, slice: &[T]) -> &[T] {
        self.bump.alloc_slice_copy(slice)
    }

    /// Creates a leaf node whose payload is copied into the arena.
    #[inline]
    pub fn leaf<'a>(&'a self, kind: LeafKind, payload: &str) -> Node<'a> {
        Leaf::new(kind, self.alloc_str(payload)).into()
    }

    /// Creates a container node owning a copy of `children`, in order.
    #[inline]
    pub fn container<'a>(&'a self, children: &[Node<'a>]) -> Node<'a> {
        self.root(children).into()
    }

    /// Creates a container to be used as the root of a traversal.
    ///
    /// Identical to [`container`](Self::container) but returns the
    /// [`Container`] itself rather than wrapping it in a [`Node`].
    #[inline]
    pub fn root<'a>(&'a self, children: &[Node<'a>]) -> Container<'a> {
        Container::new(self.alloc_slice_copy(children))
    }
}

impl Default for TreeArena {
    fn default() -> Self {
        Self::new()
    }
}
