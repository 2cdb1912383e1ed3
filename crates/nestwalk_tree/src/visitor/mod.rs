//! Visitor pattern for composite tree traversal.
//!
//! This module provides the push-based counterpart of [`LeafIter`](crate::LeafIter).
//!
//! # Overview
//!
//! - [`LeafSink`] - Accumulator that only ever sees leaves
//! - [`traverse`] - Drives a [`LeafSink`] over a whole tree in one call
//! - [`Visitor`] - Lower-level trait with container enter/exit hooks
//! - [`walk_node`] / [`walk_children`] - Recursive descent used by [`Visitor`]
//!
//! For any tree, a sink that records every leaf sees exactly the sequence a
//! fully drained [`LeafIter`](crate::LeafIter) yields.
//!
//! # Examples
//!
//! ## Collecting Links
//!
//! ```rust
//! use nestwalk_tree::{LeafKind, LinkCollector, TreeArena, traverse};
//!
//! let arena = TreeArena::new();
//! let page = arena.root(&[
//!     arena.container(&[arena.leaf(LeafKind::ResourceReference, "https://some.image")]),
//!     arena.leaf(LeafKind::Marker, "table"),
//!     arena.leaf(LeafKind::ResourceReference, "https://some.link"),
//! ]);
//!
//! let mut crawler = LinkCollector::new();
//! assert!(traverse(&page, &mut crawler).is_continue());
//! assert_eq!(crawler.links(), &["https://some.image", "https://some.link"]);
//! ```
//!
//! ## Early Termination
//!
//! ```rust
//! use nestwalk_tree::{Leaf, LeafKind, LeafSink, TreeArena, VisitResult, traverse};
//! use std::ops::ControlFlow;
//!
//! struct FirstMarker<'a> {
//!     found: Option<&'a str>,
//! }
//!
//! impl<'a> LeafSink<'a> for FirstMarker<'a> {
//!     fn on_leaf(&mut self, leaf: &Leaf<'a>) -> VisitResult {
//!         if leaf.kind == LeafKind::Marker {
//!             self.found = Some(leaf.payload);
//!             return ControlFlow::Break(()); // Stop traversal
//!         }
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let arena = TreeArena::new();
//! let root = arena.root(&[
//!     arena.leaf(LeafKind::ResourceReference, "https://some.link"),
//!     arena.leaf(LeafKind::Marker, "first"),
//!     arena.leaf(LeafKind::Marker, "second"),
//! ]);
//!
//! let mut finder = FirstMarker { found: None };
//! assert!(traverse(&root, &mut finder).is_break());
//! assert_eq!(finder.found, Some("first"));
//! ```

mod sink;
mod visit;
mod walk;

pub use sink::{LeafCounter, LeafSink, LinkCollector, PayloadCollector, traverse};
pub use visit::{VisitResult, Visitor};
pub use walk::{walk_children, walk_node};
