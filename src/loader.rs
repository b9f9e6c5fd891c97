use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ReportError, Result};

/// Raw HTML of one input file plus the name it is reported under.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub source: String,
    pub html: String,
}

/// List the `.html` files (any extension case) directly inside `dir`, sorted by name.
/// Sub-directories and other files are ignored.
pub fn list_html_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let input_err = |source| ReportError::InputDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(input_err)? {
        let path = entry.map_err(input_err)?.path();
        if path.is_file() && has_html_extension(&path) {
            files.push(path);
        } else {
            debug!("Skipping {}", path.display());
        }
    }
    files.sort();
    Ok(files)
}

fn has_html_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("html"))
}

/// Read a whole document into memory. Invalid UTF-8 counts as unreadable.
pub fn read_document(path: &Path) -> Result<SourceDocument> {
    let html = fs::read_to_string(path).map_err(|source| ReportError::Document {
        path: path.to_path_buf(),
        source,
    })?;
    let source = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(SourceDocument { source, html })
}
