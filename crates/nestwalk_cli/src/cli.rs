//! CLI argument definitions

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;
use crate::samples::Sample;

/// nestwalk - Flatten nested trees into their leaves
#[derive(Parser)]
#[command(name = "nestwalk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every leaf in document order, pulled from the leaf iterator
    Flatten {
        #[command(flatten)]
        tree: TreeArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the URL of every resource reference, collected by a visitor
    Links {
        #[command(flatten)]
        tree: TreeArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Verify that the iterator and the visitor agree on the leaf sequence
    Check {
        #[command(flatten)]
        tree: TreeArgs,
    },
}

/// Selects the tree a command runs over.
#[derive(Args, Debug, Clone)]
pub struct TreeArgs {
    /// Built-in sample tree
    #[arg(short, long, value_enum, default_value_t = Sample::Platoon)]
    pub sample: Sample,

    /// Nesting depth of the `nested` sample
    #[arg(
        long,
        default_value_t = 50,
        value_parser = clap::value_parser!(u32).range(1..=10_000)
    )]
    pub depth: u32,

    /// Inline JSON tree definition, used instead of a sample
    #[arg(long, value_name = "JSON")]
    pub tree: Option<String>,
}
