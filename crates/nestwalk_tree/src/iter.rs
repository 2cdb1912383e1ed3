//! Pull-based leaf iteration.
//!
//! [`LeafIter`] flattens a composite tree into its leaves in document order
//! without building an intermediate flattened copy. Progress is kept in an
//! explicit stack of frames, one per open container, so iteration resumes
//! correctly at any nesting depth and never recurses on the call stack.

use std::iter::FusedIterator;

use tracing::trace;

use crate::{Container, Leaf, Node, TreeError};

/// A paused position inside one container.
#[derive(Debug, Clone, Copy)]
struct Frame<'a> {
    children: &'a [Node<'a>],
    /// Index of the next child to visit. While a child container is being
    /// walked this still points at it; it advances once that frame is done.
    next: usize,
}

impl<'a> Frame<'a> {
    #[inline]
    const fn new(container: &Container<'a>) -> Self {
        Self {
            children: container.children(),
            next: 0,
        }
    }
}

/// Iterator over the leaves of a composite tree, in pre-order, depth-first,
/// document order.
///
/// Containers contribute no element of their own, but all of their
/// descendants appear in place, in child order.
///
/// The iterator keeps at most one frame per level of nesting, and it is
/// always *settled*: when the stack is non-empty, the top frame points at the
/// next leaf to return. That makes [`has_next`](Self::has_next) a plain read
/// that can be called any number of times without changing anything.
///
/// Creating a new iterator over the same root always starts from the
/// beginning. Iterators share nothing but the tree they borrow.
///
/// # Example
///
/// ```rust
/// use nestwalk_tree::{LeafIter, LeafKind, TreeArena, TreeError};
///
/// let arena = TreeArena::new();
/// let root = arena.root(&[
///     arena.container(&[arena.leaf(LeafKind::Marker, "A")]),
///     arena.leaf(LeafKind::Marker, "B"),
/// ]);
///
/// let mut iter = LeafIter::new(&root);
/// assert!(iter.has_next());
/// assert_eq!(iter.next_leaf().map(|l| l.payload), Ok("A"));
/// assert_eq!(iter.next_leaf().map(|l| l.payload), Ok("B"));
/// assert!(!iter.has_next());
/// assert_eq!(iter.next_leaf(), Err(TreeError::ExhaustedIteration));
/// ```
#[derive(Debug, Clone)]
pub struct LeafIter<'a> {
    stack: Vec<Frame<'a>>,
}

impl<'a> LeafIter<'a> {
    /// Creates an iterator positioned before the first leaf of `root`.
    ///
    /// Neither consumes nor mutates `root`.
    pub fn new(root: &Container<'a>) -> Self {
        let mut iter = Self {
            stack: vec![Frame::new(root)],
        };
        iter.settle();
        iter
    }

    /// Returns true if at least one more leaf remains.
    ///
    /// Has no side effects; repeated calls without an intervening advance
    /// always return the same answer.
    #[inline]
    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Returns the next leaf and advances by exactly one position.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::ExhaustedIteration`] when no leaves remain.
    pub fn next_leaf(&mut self) -> Result<&'a Leaf<'a>, TreeError> {
        let Some(frame) = self.stack.last_mut() else {
            trace!("leaf iterator exhausted");
            return Err(TreeError::ExhaustedIteration);
        };

        // Settled: the top frame's next child is always a leaf.
        let children = frame.children;
        let Some(Node::Leaf(leaf)) = children.get(frame.next) else {
            return Err(TreeError::ExhaustedIteration);
        };
        frame.next += 1;
        self.settle();
        Ok(leaf)
    }

    /// Returns the next leaf without advancing.
    pub fn peek(&self) -> Option<&'a Leaf<'a>> {
        let &Frame { children, next } = self.stack.last()?;
        children.get(next)?.as_leaf()
    }

    /// Returns the number of open frames, i.e. how deep the next leaf sits
    /// below the root. Zero once the iterator is exhausted.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Returns the child indices leading from the root to the next leaf.
    ///
    /// Empty once the iterator is exhausted.
    pub fn path(&self) -> Vec<usize> {
        self.stack.iter().map(|frame| frame.next).collect()
    }

    /// Moves the top of the stack onto the next leaf, or empties the stack.
    ///
    /// Exhausted frames are popped and their parent advances past the
    /// finished container. Container children are descended into without
    /// consuming the parent's index.
    fn settle(&mut self) {
        while let Some(&Frame { children, next }) = self.stack.last() {
            match children.get(next) {
                Some(Node::Leaf(_)) => return,
                Some(Node::Container(container)) => {
                    trace!(depth = self.stack.len(), "push frame");
                    self.stack.push(Frame::new(container));
                }
                None => {
                    self.stack.pop();
                    trace!(depth = self.stack.len(), "pop frame");
                    if let Some(parent) = self.stack.last_mut() {
                        parent.next += 1;
                    }
                }
            }
        }
    }
}

impl<'a> Iterator for LeafIter<'a> {
    type Item = &'a Leaf<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next_leaf().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::from(self.has_next()), None)
    }
}

impl FusedIterator for LeafIter<'_> {}
