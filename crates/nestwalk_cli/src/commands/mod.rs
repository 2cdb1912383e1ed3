//! Subcommand implementations

mod check;
mod flatten;
mod links;

pub use check::run_check;
pub use flatten::run_flatten;
pub use links::run_links;

use miette::{IntoDiagnostic, Result, WrapErr};
use nestwalk_tree::TreeDef;
use tracing::debug;

use crate::cli::TreeArgs;

/// Resolves the tree selected on the command line.
///
/// An inline `--tree` definition wins over `--sample`.
pub(crate) fn load_tree(args: &TreeArgs) -> Result<TreeDef> {
    match &args.tree {
        Some(json) => {
            debug!("Parsing inline tree definition ({} bytes)", json.len());
            serde_json::from_str::<TreeDef>(json)
                .into_diagnostic()
                .wrap_err("Invalid tree definition")
        }
        None => {
            debug!(sample = ?args.sample, depth = args.depth, "Using sample tree");
            Ok(args.sample.build(args.depth))
        }
    }
}
