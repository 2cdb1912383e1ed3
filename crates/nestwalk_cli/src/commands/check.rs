//! Check command: compares both traversal protocols over one tree.

use miette::{IntoDiagnostic, Result};
use nestwalk_tree::{Leaf, TreeArena, traverse};
use tracing::{info, warn};

use super::load_tree;
use crate::cli::TreeArgs;

/// Returns `Ok(true)` when the two protocols disagree.
pub fn run_check(args: &TreeArgs) -> Result<bool> {
    let def = load_tree(args)?;
    let arena = TreeArena::new();
    let root = def.alloc_root(&arena).into_diagnostic()?;

    let pulled: Vec<Leaf<'_>> = root.leaves().copied().collect();
    let mut pushed: Vec<Leaf<'_>> = Vec::new();
    let flow = traverse(&root, &mut pushed);
    debug_assert!(flow.is_continue(), "a Vec sink never stops early");

    match first_mismatch(&pulled, &pushed) {
        None => {
            info!("Iterator and visitor agree");
            println!("ok: {} leaves", pulled.len());
            Ok(false)
        }
        Some(index) => {
            warn!("Iterator and visitor disagree at position {}", index);
            println!(
                "mismatch at position {}: iterator={} visitor={}",
                index,
                describe(pulled.get(index)),
                describe(pushed.get(index)),
            );
            Ok(true)
        }
    }
}

/// Index of the first position where the sequences differ, counting a
/// missing element as a difference.
fn first_mismatch(pulled: &[Leaf<'_>], pushed: &[Leaf<'_>]) -> Option<usize> {
    (0..pulled.len().max(pushed.len())).find(|&i| pulled.get(i) != pushed.get(i))
}

fn describe(leaf: Option<&Leaf<'_>>) -> String {
    match leaf {
        Some(leaf) => format!("{}:{}", leaf.kind, leaf.payload),
        None => "<end>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestwalk_tree::LeafKind;

    const A: Leaf<'static> = Leaf::new(LeafKind::Marker, "A");
    const B: Leaf<'static> = Leaf::new(LeafKind::Marker, "B");
    const LINK: Leaf<'static> = Leaf::new(LeafKind::ResourceReference, "https://some.link");

    #[test]
    fn test_identical_sequences() {
        assert_eq!(first_mismatch(&[A, B], &[A, B]), None);
        assert_eq!(first_mismatch(&[], &[]), None);
    }

    #[test]
    fn test_differing_element() {
        assert_eq!(first_mismatch(&[A, B], &[A, LINK]), Some(1));
    }

    #[test]
    fn test_length_difference() {
        assert_eq!(first_mismatch(&[A], &[A, B]), Some(1));
        assert_eq!(first_mismatch(&[A, B], &[]), Some(0));
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(Some(&LINK)), "resource-reference:https://some.link");
        assert_eq!(describe(None), "<end>");
    }
}
