//! Batch conversion of markdown sources into static HTML pages.

use crate::markdown::MarkdownRenderer;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to create output directory {path:?}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read source directory {path:?}: {source}")]
    ReadSourceDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Outcome of a batch conversion.
///
/// Per-file failures never abort the batch; they are recorded here so
/// callers can inspect them without scraping logs.
#[derive(Debug, Default)]
pub struct ConvertReport {
    /// Number of files that completed read, render, and write.
    pub converted: usize,
    pub failures: Vec<ConvertFailure>,
}

/// A single markdown file that was skipped during conversion.
#[derive(Debug)]
pub struct ConvertFailure {
    pub file: String,
    pub reason: String,
}

/// Convert every `.md` file directly inside `source_dir` into an `.html`
/// file in `dest_dir`.
///
/// The output name is the input name with the `.md` suffix replaced by
/// `.html`. Existing outputs are overwritten wholesale. Subdirectories and
/// files without the `.md` suffix are ignored. Only the two directory
/// operations are fatal; anything that goes wrong with an individual file
/// is logged, recorded in the report, and skipped.
pub fn convert_dir(source_dir: &Path, dest_dir: &Path) -> Result<ConvertReport, ConvertError> {
    fs::create_dir_all(dest_dir).map_err(|source| ConvertError::CreateOutputDir {
        path: dest_dir.to_path_buf(),
        source,
    })?;

    let entries = fs::read_dir(source_dir).map_err(|source| ConvertError::ReadSourceDir {
        path: source_dir.to_path_buf(),
        source,
    })?;

    // Sort by file name so processing order (and logs) are deterministic.
    let mut entries: Vec<fs::DirEntry> = entries.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|e| e.file_name());

    tracing::info!("Found {} entries in {:?}", entries.len(), source_dir);

    let renderer = MarkdownRenderer::new();
    let mut report = ConvertReport::default();

    for entry in entries {
        let file_name = entry.file_name().to_string_lossy().into_owned();

        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir || !file_name.ends_with(".md") {
            continue;
        }

        let markdown = match fs::read_to_string(entry.path()) {
            Ok(contents) => contents,
            Err(err) => {
                tracing::warn!("skip {}: {}", file_name, err);
                report.failures.push(ConvertFailure {
                    file: file_name,
                    reason: err.to_string(),
                });
                continue;
            }
        };

        let html = renderer.render(&markdown);

        let stem = file_name.strip_suffix(".md").unwrap_or(&file_name);
        let out_name = format!("{stem}.html");
        if let Err(err) = fs::write(dest_dir.join(&out_name), html) {
            tracing::warn!("skip {}: write error: {}", file_name, err);
            report.failures.push(ConvertFailure {
                file: file_name,
                reason: err.to_string(),
            });
            continue;
        }

        tracing::info!("{} -> {}", file_name, out_name);
        report.converted += 1;
    }

    Ok(report)
}
