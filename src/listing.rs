//! Reading one directory into a sorted, classified listing.
//!
//! Every page for a directory is rendered from the same [`DirectoryListing`],
//! read once per visit. Nothing is cached between runs.
//!
//! ## Order
//!
//! Entries are sorted directories first, then by case-insensitive name, with
//! the raw name as a tiebreak so `A.txt` always precedes `a.txt`:
//!
//! ```text
//! Z/          ← folders first
//! A.txt
//! a.txt
//! b.txt
//! ```
//!
//! Folder lists, file lists, and counts all come from this one order.
//!
//! ## Symlinks
//!
//! Links are followed when classifying, so a symlink to a directory is a
//! folder and a symlink to a file is a file. Dangling links are skipped.

use crate::classify;
use crate::error::{Stage, StageError};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A direct child of a listed directory.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_directory: bool,
    /// Directory that directly contains the exclusion marker. Always false
    /// for files.
    pub is_excluded: bool,
    /// Reached through a symlink rather than a real directory entry.
    pub is_symlink: bool,
}

/// A regular file and what the listing shows about it.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    pub name: String,
    /// `None` when the size could not be read.
    pub byte_size: Option<u64>,
    /// `None` when the modification time could not be read.
    pub last_modified: Option<DateTime<Utc>>,
    pub extension: String,
}

#[derive(Debug, Clone)]
pub struct DirectoryListing {
    pub path: PathBuf,
    /// All readable children, in listing order.
    pub entries: Vec<DirectoryEntry>,
    /// Regular files among `entries`, in listing order.
    pub files: Vec<FileRecord>,
}

impl DirectoryListing {
    /// Whether this directory itself carries the exclusion marker.
    ///
    /// Any kind of entry counts, the same test the parent applies when it
    /// sets [`DirectoryEntry::is_excluded`].
    pub fn has_marker(&self, marker: &str) -> bool {
        marker_present(&self.path, marker)
    }

    /// Every subdirectory, excluded or not. These are all visited.
    pub fn subdirectories(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.entries.iter().filter(|e| e.is_directory)
    }

    /// Subdirectories shown in this directory's folder list.
    pub fn folders(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.subdirectories().filter(|e| !e.is_excluded)
    }

    /// Sorted distinct extensions that get a typed page.
    pub fn filetypes(&self) -> Vec<String> {
        self.files
            .iter()
            .map(|f| f.extension.as_str())
            .filter(|ext| classify::has_typed_page(ext))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Files listed on the untyped index page.
    pub fn index_files(&self) -> impl Iterator<Item = &FileRecord> {
        self.files
            .iter()
            .filter(|f| !classify::is_ignored(&f.extension))
    }

    /// Files listed on the typed page for `extension`.
    pub fn typed_files<'a>(&'a self, extension: &'a str) -> impl Iterator<Item = &'a FileRecord> {
        self.files
            .iter()
            .filter(move |f| classify::matches_filetype(&f.name, extension))
    }
}

fn marker_present(dir: &Path, marker: &str) -> bool {
    dir.join(marker).exists()
}

/// Case-insensitive name, then raw name.
fn name_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Read the direct children of `dir`.
///
/// Failing to open `dir` itself is an error: the caller treats the directory
/// as empty and does not descend further. Problems with individual children
/// are pushed onto `issues` and the child is skipped, or shown with
/// placeholders when only its metadata is unreadable.
pub fn list_directory(
    dir: &Path,
    marker: &str,
    issues: &mut Vec<StageError>,
) -> Result<DirectoryListing, StageError> {
    let mut entries = Vec::new();
    let mut files = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(StageError::new(
                    Stage::ListDirectory,
                    dir,
                    io::Error::from(err),
                ));
            }
            Err(err) => {
                let path = err.path().unwrap_or(dir).to_path_buf();
                let err = StageError::new(Stage::ReadEntry, path, io::Error::from(err));
                warn!("{err}");
                issues.push(err);
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().to_string();
        let file_type = entry.file_type();

        if file_type.is_dir() {
            let is_excluded = marker_present(entry.path(), marker);
            entries.push(DirectoryEntry {
                name,
                path: entry.path().to_path_buf(),
                is_directory: true,
                is_excluded,
                is_symlink: entry.path_is_symlink(),
            });
        } else if file_type.is_file() {
            files.push(read_file_record(entry.path(), &name, issues));
            entries.push(DirectoryEntry {
                name,
                path: entry.path().to_path_buf(),
                is_directory: false,
                is_excluded: false,
                is_symlink: entry.path_is_symlink(),
            });
        } else {
            debug!("Skipping special file '{}'", entry.path().display());
        }
    }

    // Sorted after following links, so a symlinked directory sorts as one.
    entries.sort_by(|a, b| {
        b.is_directory
            .cmp(&a.is_directory)
            .then_with(|| name_order(&a.name, &b.name))
    });
    files.sort_by(|a, b| name_order(&a.name, &b.name));

    Ok(DirectoryListing {
        path: dir.to_path_buf(),
        entries,
        files,
    })
}

/// Build the record for one file. Links are followed, as in the listing.
///
/// Unreadable metadata is reported and shown with placeholders.
fn read_file_record(path: &Path, name: &str, issues: &mut Vec<StageError>) -> FileRecord {
    let extension = classify::file_extension(name);

    let metadata = match fs::metadata(path) {
        Ok(m) => m,
        Err(err) => {
            let err = StageError::new(Stage::ReadMetadata, path, err);
            warn!("{err}");
            issues.push(err);
            return FileRecord {
                name: name.to_string(),
                byte_size: None,
                last_modified: None,
                extension,
            };
        }
    };

    let last_modified = match metadata.modified() {
        Ok(time) => Some(DateTime::<Utc>::from(time)),
        Err(err) => {
            let err = StageError::new(Stage::ReadMetadata, path, err);
            warn!("{err}");
            issues.push(err);
            None
        }
    };

    FileRecord {
        name: name.to_string(),
        byte_size: Some(metadata.len()),
        last_modified,
        extension,
    }
}
