//! # nestwalk_tree
//!
//! Composite trees and the two ways of walking them.
//!
//! A [`Node`] is either an atomic [`Leaf`] or a [`Container`] holding an
//! ordered sequence of further nodes, nested to any depth. Leaves can be read
//! back out of a tree in document order (pre-order, depth-first, containers
//! themselves contribute nothing) through either protocol:
//!
//! - [`LeafIter`] - pull-based. Resumable, keeps one frame per open container.
//! - [`traverse`] - push-based. Drives a caller-supplied [`LeafSink`] in a
//!   single call.
//!
//! Both protocols yield the same leaves in the same order for every tree.
//!
//! ## Architecture
//!
//! - Uses `bumpalo` for arena allocation
//! - All nodes of a tree are allocated in one [`TreeArena`] and freed together
//! - Nodes are `Copy` and only borrow from the arena, so traversals never own
//!   or mutate the tree
//!
//! ## Preconditions
//!
//! Trees must be acyclic. Slices handed out by the arena can only refer to
//! nodes that already exist, so a cycle cannot be built through this API.
//! A tree must not change while a traversal over it is in progress; the
//! borrow checker enforces this for trees owned by a [`TreeArena`].
//!
//! ## Example
//!
//! ```rust
//! use nestwalk_tree::{LeafKind, PayloadCollector, TreeArena, traverse};
//!
//! let arena = TreeArena::new();
//! let inner = arena.container(&[
//!     arena.leaf(LeafKind::Marker, "A"),
//!     arena.leaf(LeafKind::Marker, "B"),
//! ]);
//! let root = arena.root(&[inner, arena.leaf(LeafKind::Marker, "C")]);
//!
//! let pulled: Vec<&str> = root.leaves().map(|leaf| leaf.payload).collect();
//!
//! let mut collector = PayloadCollector::new();
//! assert!(traverse(&root, &mut collector).is_continue());
//!
//! assert_eq!(pulled, vec!["A", "B", "C"]);
//! assert_eq!(collector.into_payloads(), pulled);
//! ```

mod arena;
mod error;
mod iter;
mod leaf_kind;
mod node;
mod tree_def;
pub mod visitor;

pub use arena::TreeArena;
pub use error::TreeError;
pub use iter::LeafIter;
pub use leaf_kind::{LeafKind, UnknownLeafKind};
pub use node::{Container, Leaf, Node};
pub use tree_def::TreeDef;

// Re-export commonly used visitor items for convenience
pub use visitor::{
    LeafCounter, LeafSink, LinkCollector, PayloadCollector, VisitResult, Visitor, traverse,
};
