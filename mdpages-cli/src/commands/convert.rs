//! Convert command implementation.

use crate::ConvertArgs;
use anyhow::{Context, Result};
use mdpages_core::{convert_dir, Config};

/// Run a one-shot batch conversion and print the resulting count.
pub fn convert_pages(config: &Config, args: &ConvertArgs) -> Result<()> {
    let source = args.md.clone().unwrap_or_else(|| config.markdown_dir());
    let dest = args.out.clone().unwrap_or_else(|| config.pages_dir());

    let report = convert_dir(&source, &dest)
        .with_context(|| format!("Failed to convert {:?}", source))?;

    if !report.failures.is_empty() {
        tracing::warn!(
            "Skipped {} file(s); see warnings above",
            report.failures.len()
        );
    }

    println!(
        "Converted {} markdown files to {}",
        report.converted,
        dest.display()
    );

    Ok(())
}
