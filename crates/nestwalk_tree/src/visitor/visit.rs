//! Visitor trait for traversing composite trees.
//!
//! Each method has a default implementation, so a visitor only overrides the
//! hooks it cares about. The defaults walk every container and ignore every
//! leaf.

use std::ops::ControlFlow;

use crate::{Container, Leaf};

use super::walk::walk_children;

/// Result type for visitor methods to control traversal.
///
/// - `ControlFlow::Continue(())` - continue traversal
/// - `ControlFlow::Break(())` - stop traversal early
pub type VisitResult = ControlFlow<()>;

/// Visitor trait for traversing composite trees without modification.
///
/// # Lifetime
///
/// The `'a` lifetime ties visited nodes to their arena.
///
/// # Control Flow
///
/// Return `ControlFlow::Continue(())` to continue traversal, or
/// `ControlFlow::Break(())` to stop early. Use the `?` operator
/// for convenient propagation.
pub trait Visitor<'a>: Sized {
    /// Called before a container's children are visited.
    #[inline]
    fn enter_container(&mut self, _container: &Container<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called after a container and all of its children have been visited.
    #[inline]
    fn exit_container(&mut self, _container: &Container<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visits a container.
    ///
    /// Override this to skip subtrees or to wrap the walk of the children.
    fn visit_container(&mut self, container: &Container<'a>) -> VisitResult {
        walk_children(self, container)
    }

    /// Visits a leaf.
    fn visit_leaf(&mut self, _leaf: &Leaf<'a>) -> VisitResult {
        ControlFlow::Continue(()) // Leaf node, no children to walk
    }
}
