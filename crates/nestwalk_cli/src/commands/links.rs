//! Links command: crawls resource references with a visitor.

use miette::{IntoDiagnostic, Result};
use nestwalk_tree::{LinkCollector, TreeArena, traverse};
use tracing::info;

use super::load_tree;
use crate::cli::TreeArgs;
use crate::output::{OutputFormat, output_links};

pub fn run_links(args: &TreeArgs, format: OutputFormat) -> Result<()> {
    let def = load_tree(args)?;
    let arena = TreeArena::new();
    let root = def.alloc_root(&arena).into_diagnostic()?;

    let mut crawler = LinkCollector::new();
    let flow = traverse(&root, &mut crawler);
    debug_assert!(flow.is_continue(), "LinkCollector never stops early");

    info!("Collected {} links", crawler.links().len());
    output_links(crawler.links(), format)
}
