//! Image directory scanning
//!
//! Lists the direct children of the image directory, keeps the regular files
//! whose extension is in the accepted set and turns each into a web-relative
//! path. Results are sorted by file name so repeated runs produce the same list.

use crate::error::{Result, SyncError};
use std::path::Path;
use tracing::{debug, warn};

/// A qualifying image file and the path it is published under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// File name as found in the directory
    pub file_name: String,

    /// Forward-slash path used inside the page script
    pub web_path: String,
}

/// Join a web prefix and a file name with a single `/`
///
/// The host path separator is never used; an empty prefix yields the bare
/// name and a root prefix `/` yields `/<name>`.
pub fn web_path(prefix: &str, file_name: &str) -> String {
    if prefix.is_empty() {
        return file_name.to_string();
    }
    let prefix = prefix.trim_end_matches(['/', '\\']).replace('\\', "/");
    format!("{}/{}", prefix, file_name)
}

/// Check a file name against the accepted extensions
///
/// `extensions` must already be lowercased and dot-less
/// (see [`crate::Config::normalized_extensions`]).
pub fn has_supported_extension(file_name: &str, extensions: &[String]) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            extensions.iter().any(|accepted| *accepted == ext)
        })
        .unwrap_or(false)
}

/// Scan `dir` for images, sorted by file name
pub fn scan_images(dir: &Path, extensions: &[String], prefix: &str) -> Result<Vec<ImageEntry>> {
    if !dir.is_dir() {
        return Err(SyncError::DirectoryNotFound(dir.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(dir).map_err(|source| SyncError::ReadDirectory {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| SyncError::ReadDirectory {
            path: dir.to_path_buf(),
            source,
        })?;

        // Follows symlinks so a linked image still counts
        if !entry.path().is_file() {
            debug!("Skipping non-file entry: {}", entry.path().display());
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => warn!("Skipping file with non UTF-8 name: {:?}", raw),
        }
    }

    names.sort();

    let entries: Vec<ImageEntry> = names
        .into_iter()
        .filter(|name| has_supported_extension(name, extensions))
        .map(|file_name| {
            let web_path = web_path(prefix, &file_name);
            debug!("Found image: {}", web_path);
            ImageEntry {
                file_name,
                web_path,
            }
        })
        .collect();

    Ok(entries)
}
