//! JSON output formatter

use miette::{IntoDiagnostic, Result};
use serde::Serialize;

pub fn output_json<T: Serialize>(items: &[T]) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(items).into_diagnostic()?
    );
    Ok(())
}
