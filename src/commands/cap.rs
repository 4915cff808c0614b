use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::truncator;
use crate::types::CapOutcome;

/// Cap the file at `path` to `threshold` bytes and report the result.
///
/// Prints exactly one status line per run. Filesystem failures propagate to
/// the caller; a missing file is reported, not failed.
pub fn run(path: &Path, threshold: u64) -> Result<CapOutcome> {
    let outcome =
        truncator::cap_file(path, threshold).context("Failed to cap the target file")?;

    match outcome {
        CapOutcome::Truncated { from } => {
            println!(
                "{} Truncated '{}' from {} to {} bytes",
                "✓".green().bold(),
                path.display().to_string().bright_cyan(),
                from,
                threshold
            );
        }
        CapOutcome::AlreadySmall { len } => {
            println!(
                "{} '{}' is already within {} bytes ({} bytes)",
                "✓".green(),
                path.display().to_string().bright_cyan(),
                threshold,
                len
            );
        }
        CapOutcome::NotFound => {
            println!(
                "{} '{}' does not exist",
                "⚠".yellow(),
                path.display().to_string().bright_cyan()
            );
        }
    }

    Ok(outcome)
}
