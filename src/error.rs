//! Non-fatal failures collected during a run.
//!
//! A [`StageError`] records which step failed, on which path, and the
//! underlying I/O cause. The walker logs each one as it happens and keeps it
//! in the run report; none of them stops the traversal of other directories.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The step of page generation a failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading a directory's children. Descent stops at that directory.
    ListDirectory,
    /// A single child could not be inspected. The child is skipped.
    ReadEntry,
    /// A file's size or mtime could not be read. Placeholders are shown.
    ReadMetadata,
    /// Writing one `index.html` / `<ext>.html`. Other pages still get written.
    WritePage,
    /// Writing `style.css` or `search.js` at the root.
    WriteAsset,
    /// Resolving a subdirectory before visiting it.
    Descend,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::ListDirectory => "list directory",
            Stage::ReadEntry => "read entry",
            Stage::ReadMetadata => "read metadata",
            Stage::WritePage => "write page",
            Stage::WriteAsset => "write asset",
            Stage::Descend => "descend",
        };
        f.write_str(label)
    }
}

#[derive(Error, Debug)]
#[error("{stage} failed for '{}': {source}", .path.display())]
pub struct StageError {
    pub stage: Stage,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl StageError {
    pub fn new(stage: Stage, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            stage,
            path: path.into(),
            source,
        }
    }
}
