//! Output formatting module

mod json;
mod text;

use clap::ValueEnum;
use miette::Result;
use nestwalk_tree::Leaf;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One item per line
    Text,
    /// Pretty-printed JSON array
    Json,
}

pub fn output_leaves(leaves: &[Leaf<'_>], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_json(leaves)?,
        OutputFormat::Text => text::output_leaves(leaves),
    }
    Ok(())
}

pub fn output_links(links: &[&str], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_json(links)?,
        OutputFormat::Text => text::output_links(links),
    }
    Ok(())
}
