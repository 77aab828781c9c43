//! Access to the on-disk store of rendered HTML pages.

use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageStoreError {
    #[error("Failed to read pages directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Metadata for one rendered page file.
///
/// Rebuilt from directory metadata on every listing; nothing here is
/// cached or persisted.
#[derive(Debug, Clone)]
pub struct PageInfo {
    /// File name without the `.html` suffix.
    pub name: String,
    /// File name with the suffix.
    pub file: String,
    pub modified: DateTime<Local>,
}

/// List the HTML pages directly inside `dir`, most recently modified first.
///
/// Entries whose metadata cannot be read are skipped. Ties on the
/// modification time keep directory listing order (the sort is stable).
pub fn list_pages(dir: &Path) -> Result<Vec<PageInfo>, PageStoreError> {
    let entries = fs::read_dir(dir).map_err(|source| PageStoreError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut pages = Vec::new();
    for entry in entries.filter_map(|e| e.ok()) {
        let file = entry.file_name().to_string_lossy().into_owned();
        if !file.ends_with(".html") {
            continue;
        }

        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        if metadata.is_dir() {
            continue;
        }
        let Ok(modified) = metadata.modified() else {
            continue;
        };

        let name = file.strip_suffix(".html").unwrap_or(&file).to_string();
        pages.push(PageInfo {
            name,
            file,
            modified: modified.into(),
        });
    }

    pages.sort_by(|a, b| b.modified.cmp(&a.modified));

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::time::{Duration, SystemTime};
    use tempfile::tempdir;

    fn write_with_mtime(dir: &Path, name: &str, secs_after_epoch: u64) {
        let path = dir.join(name);
        fs::write(&path, "<p>body</p>").unwrap();
        let file = File::options().write(true).open(&path).unwrap();
        file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs_after_epoch))
            .unwrap();
    }

    #[test]
    fn lists_newest_first() {
        let dir = tempdir().unwrap();
        write_with_mtime(dir.path(), "older.html", 1_000);
        write_with_mtime(dir.path(), "newest.html", 3_000);
        write_with_mtime(dir.path(), "middle.html", 2_000);

        let pages = list_pages(dir.path()).unwrap();

        let names: Vec<&str> = pages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["newest", "middle", "older"]);
        for pair in pages.windows(2) {
            assert!(pair[0].modified >= pair[1].modified);
        }
    }

    #[test]
    fn strips_suffix_and_keeps_file_name() {
        let dir = tempdir().unwrap();
        write_with_mtime(dir.path(), "notes.html", 1_000);

        let pages = list_pages(dir.path()).unwrap();

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].name, "notes");
        assert_eq!(pages[0].file, "notes.html");
    }

    #[test]
    fn skips_directories_and_other_suffixes() {
        let dir = tempdir().unwrap();
        write_with_mtime(dir.path(), "real.html", 1_000);
        fs::write(dir.path().join("style.css"), "body {}").unwrap();
        fs::create_dir(dir.path().join("assets.html")).unwrap();

        let pages = list_pages(dir.path()).unwrap();

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].file, "real.html");
    }

    #[test]
    fn unreadable_dir_is_an_error() {
        let dir = tempdir().unwrap();
        let result = list_pages(&dir.path().join("absent"));
        assert!(matches!(result, Err(PageStoreError::ReadDir { .. })));
    }
}
