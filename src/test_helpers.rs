//! Shared test utilities for the dirindex test suite.
//!
//! Trees are described as flat path lists; a trailing `/` makes a directory,
//! anything else a file (parents are created as needed).
//!
//! ```rust
//! let tmp = build_tree(&["maps/", "maps/a.zip", "notes.txt", "private/EXCLUDE_FOLDER"]);
//! let listing = list_directory(tmp.path(), "EXCLUDE_FOLDER", &mut Vec::new()).unwrap();
//! assert_eq!(entry_names(&listing), vec!["maps", "private", "notes.txt"]);
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::listing::DirectoryListing;

// =========================================================================
// Tree setup
// =========================================================================

/// Create a temp directory containing `paths`.
///
/// Files get their own name as contents, so sizes differ but stay stable.
pub fn build_tree(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for rel in paths {
        let path = tmp.path().join(rel.trim_end_matches('/'));
        if rel.ends_with('/') {
            fs::create_dir_all(&path).unwrap();
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&path, rel.as_bytes()).unwrap();
        }
    }
    tmp
}

// =========================================================================
// Extractors
// =========================================================================

/// Entry names in listing order.
pub fn entry_names(listing: &DirectoryListing) -> Vec<&str> {
    listing.entries.iter().map(|e| e.name.as_str()).collect()
}

/// Sorted names of the `.html` files directly inside `dir`.
pub fn page_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|n| n.ends_with(".html"))
        .collect();
    names.sort();
    names
}

/// Read a generated page. Panics with the directory contents on a miss.
pub fn read_page(root: &Path, rel: &str) -> String {
    let path = root.join(rel);
    fs::read_to_string(&path).unwrap_or_else(|err| {
        let dir = path.parent().unwrap_or(root);
        let present = page_names(dir);
        panic!("page '{rel}' unreadable ({err}). Pages present: {present:?}")
    })
}
