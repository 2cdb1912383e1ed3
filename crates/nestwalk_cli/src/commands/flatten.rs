//! Flatten command: drains the leaf iterator.

use miette::{IntoDiagnostic, Result};
use nestwalk_tree::TreeArena;
use tracing::{debug, info};

use super::load_tree;
use crate::cli::TreeArgs;
use crate::output::{OutputFormat, output_leaves};

pub fn run_flatten(args: &TreeArgs, format: OutputFormat) -> Result<()> {
    let def = load_tree(args)?;
    let arena = TreeArena::new();
    let root = def.alloc_root(&arena).into_diagnostic()?;

    let mut iter = root.leaves();
    let mut leaves = Vec::new();
    while iter.has_next() {
        debug!(path = ?iter.path(), "Pulling leaf");
        leaves.push(*iter.next_leaf().into_diagnostic()?);
    }

    info!("Flattened {} leaves", leaves.len());
    output_leaves(&leaves, format)
}
