//! Tree error types.

use thiserror::Error;

/// Errors reported by tree construction and traversal.
///
/// Every variant is a violation of a caller-side contract and is reported at
/// the call that violates it. Nothing here is transient or worth retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// `next_leaf` was called on an iterator with no remaining leaves.
    #[error("Iteration exhausted: no leaves remain")]
    ExhaustedIteration,

    /// A tree definition whose root is a leaf was used where a container
    /// root is required.
    #[error("Tree root must be a container, found a leaf")]
    LeafRoot,
}
