//! Walk functions for tree traversal.
//!
//! These functions provide the traversal logic for the Visitor pattern.
//! They are used by the default implementations in the `Visitor` trait.

use std::ops::ControlFlow;

use crate::{Container, Node};

use super::visit::{VisitResult, Visitor};

/// Walks a node by dispatching on its variant.
///
/// For a container this:
/// 1. Calls `enter_container` on the visitor
/// 2. Calls `visit_container`, which walks the children by default
/// 3. Calls `exit_container` on the visitor
///
/// A leaf is handed to `visit_leaf`.
///
/// # Returns
///
/// `ControlFlow::Continue(())` to continue traversal, or `ControlFlow::Break(())` to stop.
pub fn walk_node<'a, V>(visitor: &mut V, node: &Node<'a>) -> VisitResult
where
    V: Visitor<'a>,
{
    match node {
        Node::Leaf(leaf) => visitor.visit_leaf(leaf),
        Node::Container(container) => {
            visitor.enter_container(container)?;
            visitor.visit_container(container)?;
            visitor.exit_container(container)
        }
    }
}

/// Walks all children of a container, in order.
///
/// Supports early termination via `ControlFlow::Break`.
///
/// # Returns
///
/// `ControlFlow::Continue(())` if all children were visited,
/// or `ControlFlow::Break(())` if traversal was stopped early.
#[inline]
pub fn walk_children<'a, V>(visitor: &mut V, container: &Container<'a>) -> VisitResult
where
    V: Visitor<'a>,
{
    for child in container.children() {
        walk_node(visitor, child)?;
    }
    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Leaf, LeafKind, TreeArena};
    use pretty_assertions::assert_eq;

    /// Records every hook call as a string.
    #[derive(Default)]
    struct EventRecorder {
        events: Vec<String>,
    }

    impl<'a> Visitor<'a> for EventRecorder {
        fn enter_container(&mut self, container: &Container<'a>) -> VisitResult {
            self.events.push(format!("enter({})", container.len()));
            ControlFlow::Continue(())
        }

        fn exit_container(&mut self, container: &Container<'a>) -> VisitResult {
            self.events.push(format!("exit({})", container.len()));
            ControlFlow::Continue(())
        }

        fn visit_leaf(&mut self, leaf: &Leaf<'a>) -> VisitResult {
            self.events.push(leaf.payload.to_string());
            ControlFlow::Continue(())
        }
    }

    #[test]
    fn walk_node_visits_single_leaf() {
        let leaf = Node::Leaf(Leaf::new(LeafKind::Marker, "solo"));

        let mut recorder = EventRecorder::default();
        let result = walk_node(&mut recorder, &leaf);

        assert!(result.is_continue());
        assert_eq!(recorder.events, vec!["solo"]);
    }

    #[test]
    fn walk_node_brackets_containers_with_hooks() {
        let arena = TreeArena::new();
        let root = arena.container(&[
            arena.container(&[
                arena.leaf(LeafKind::Marker, "A"),
                arena.leaf(LeafKind::Marker, "B"),
            ]),
            arena.leaf(LeafKind::Marker, "C"),
        ]);

        let mut recorder = EventRecorder::default();
        let result = walk_node(&mut recorder, &root);

        assert!(result.is_continue());
        assert_eq!(
            recorder.events,
            vec!["enter(2)", "enter(2)", "A", "B", "exit(2)", "C", "exit(2)"]
        );
    }

    #[test]
    fn walk_children_does_not_report_the_container_itself() {
        let arena = TreeArena::new();
        let root = arena.root(&[arena.leaf(LeafKind::Marker, "A")]);

        let mut recorder = EventRecorder::default();
        let result = walk_children(&mut recorder, &root);

        assert!(result.is_continue());
        assert_eq!(recorder.events, vec!["A"]);
    }

    #[test]
    fn walk_children_empty_children() {
        let root = Container::empty();

        let mut recorder = EventRecorder::default();
        let result = walk_children(&mut recorder, &root);

        assert!(result.is_continue());
        assert!(recorder.events.is_empty());
    }

    /// Skips the children of every container holding more than one child.
    struct SingletonsOnly<'a> {
        seen: Vec<&'a str>,
    }

    impl<'a> Visitor<'a> for SingletonsOnly<'a> {
        fn visit_container(&mut self, container: &Container<'a>) -> VisitResult {
            if container.len() > 1 {
                return ControlFlow::Continue(());
            }
            walk_children(self, container)
        }

        fn visit_leaf(&mut self, leaf: &Leaf<'a>) -> VisitResult {
            self.seen.push(leaf.payload);
            ControlFlow::Continue(())
        }
    }

    #[test]
    fn visit_container_override_can_skip_subtrees() {
        let arena = TreeArena::new();
        let root = arena.container(&[
            arena.container(&[
                arena.leaf(LeafKind::Marker, "skipped"),
                arena.leaf(LeafKind::Marker, "skipped"),
            ]),
        ]);
        let other = arena.container(&[arena.container(&[arena.leaf(LeafKind::Marker, "kept")])]);

        let mut visitor = SingletonsOnly { seen: Vec::new() };
        assert!(walk_node(&mut visitor, &root).is_continue());
        assert!(walk_node(&mut visitor, &other).is_continue());
        assert_eq!(visitor.seen, vec!["kept"]);
    }

    /// Stops at the first exit hook.
    struct StopOnExit {
        leaves: usize,
    }

    impl<'a> Visitor<'a> for StopOnExit {
        fn exit_container(&mut self, _container: &Container<'a>) -> VisitResult {
            ControlFlow::Break(())
        }

        fn visit_leaf(&mut self, _leaf: &Leaf<'a>) -> VisitResult {
            self.leaves += 1;
            ControlFlow::Continue(())
        }
    }

    #[test]
    fn walk_node_supports_early_termination() {
        let arena = TreeArena::new();
        let root = arena.root(&[
            arena.container(&[arena.leaf(LeafKind::Marker, "first")]),
            arena.leaf(LeafKind::Marker, "second"),
        ]);

        let mut visitor = StopOnExit { leaves: 0 };
        let result = walk_children(&mut visitor, &root);

        assert!(result.is_break());
        assert_eq!(visitor.leaves, 1);
    }
}
