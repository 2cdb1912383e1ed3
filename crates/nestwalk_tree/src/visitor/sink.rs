//! Leaf sinks and the push-based `traverse` entry point.

use std::ops::ControlFlow;

use tracing::debug;

use crate::{Container, Leaf};

use super::visit::{VisitResult, Visitor};
use super::walk::walk_children;

/// An accumulator that receives every leaf of a tree, in document order.
///
/// Containers are never reported to a sink. Returning
/// `ControlFlow::Break(())` stops the traversal after the current leaf.
pub trait LeafSink<'a> {
    /// Called once for every leaf encountered.
    fn on_leaf(&mut self, leaf: &Leaf<'a>) -> VisitResult;
}

/// Drives `sink` over every leaf below `root` in pre-order, depth-first
/// order, the same order [`LeafIter`](crate::LeafIter) yields.
///
/// Runs synchronously and returns once the whole tree has been walked or the
/// sink asked to stop.
///
/// # Returns
///
/// `ControlFlow::Continue(())` if every leaf was delivered,
/// or `ControlFlow::Break(())` if the sink stopped the traversal.
pub fn traverse<'a, S>(root: &Container<'a>, sink: &mut S) -> VisitResult
where
    S: LeafSink<'a> + ?Sized,
{
    let mut adapter = SinkVisitor { sink };
    let result = walk_children(&mut adapter, root);
    if result.is_break() {
        debug!("traversal stopped early by sink");
    }
    result
}

/// Adapts a [`LeafSink`] onto the [`Visitor`] hooks.
struct SinkVisitor<'s, S: ?Sized> {
    sink: &'s mut S,
}

impl<'a, S> Visitor<'a> for SinkVisitor<'_, S>
where
    S: LeafSink<'a> + ?Sized,
{
    #[inline]
    fn visit_leaf(&mut self, leaf: &Leaf<'a>) -> VisitResult {
        self.sink.on_leaf(leaf)
    }
}

impl<'a> LeafSink<'a> for Vec<Leaf<'a>> {
    fn on_leaf(&mut self, leaf: &Leaf<'a>) -> VisitResult {
        self.push(*leaf);
        ControlFlow::Continue(())
    }
}

/// Collects the payload of every leaf, in order.
#[derive(Debug, Default, Clone)]
pub struct PayloadCollector<'a> {
    payloads: Vec<&'a str>,
}

impl<'a> PayloadCollector<'a> {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the payloads collected so far.
    pub fn payloads(&self) -> &[&'a str] {
        &self.payloads
    }

    /// Consumes the collector, returning the payloads.
    pub fn into_payloads(self) -> Vec<&'a str> {
        self.payloads
    }
}

impl<'a> LeafSink<'a> for PayloadCollector<'a> {
    fn on_leaf(&mut self, leaf: &Leaf<'a>) -> VisitResult {
        self.payloads.push(leaf.payload);
        ControlFlow::Continue(())
    }
}

/// Collects the URLs of resource-reference leaves, in order.
///
/// Marker leaves are skipped.
#[derive(Debug, Default, Clone)]
pub struct LinkCollector<'a> {
    links: Vec<&'a str>,
}

impl<'a> LinkCollector<'a> {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the links collected so far.
    pub fn links(&self) -> &[&'a str] {
        &self.links
    }

    /// Consumes the collector, returning the links.
    pub fn into_links(self) -> Vec<&'a str> {
        self.links
    }
}

impl<'a> LeafSink<'a> for LinkCollector<'a> {
    fn on_leaf(&mut self, leaf: &Leaf<'a>) -> VisitResult {
        if leaf.kind.is_resource_reference() {
            self.links.push(leaf.payload);
        }
        ControlFlow::Continue(())
    }
}

/// Counts leaves.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LeafCounter {
    count: usize,
}

impl LeafCounter {
    /// Creates a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of leaves seen.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<'a> LeafSink<'a> for LeafCounter {
    fn on_leaf(&mut self, _leaf: &Leaf<'a>) -> VisitResult {
        self.count += 1;
        ControlFlow::Continue(())
    }
}
