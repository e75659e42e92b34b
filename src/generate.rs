//! Tree walk and page generation.
//!
//! Visits the root and every directory below it exactly once, depth-first,
//! and writes that directory's pages next to its files.
//!
//! ## Per-Directory Steps
//!
//! 1. List the directory. If that fails, log it and stop descending here.
//! 2. If the directory contains the exclusion marker, write nothing for it.
//! 3. Otherwise write one `<ext>.html` per typed extension, then `index.html`.
//! 4. Visit every subdirectory, excluded ones included. A symlinked
//!    subdirectory is only visited when it leads outside the root; anything
//!    inside is visited under its real path.
//!
//! ## Output Structure
//!
//! ```text
//! srv/
//! ├── index.html          # untyped index
//! ├── iso.html            # one per extension found here
//! ├── txt.html
//! ├── style.css           # shared assets (external mode only)
//! ├── search.js
//! ├── maps/
//! │   ├── index.html
//! │   └── zip.html
//! └── private/
//!     ├── EXCLUDE_FOLDER  # no pages here, hidden from srv/index.html
//!     └── nested/
//!         └── index.html  # still generated
//! ```
//!
//! ## Failures
//!
//! Only an unusable root is fatal ([`GenerateError`]). Everything else is a
//! [`StageError`], logged where it happens and collected in [`RunReport`].
//! A failed page never stops the directory's other pages, and a failed
//! directory never stops its siblings.
//!
//! Every run regenerates every page. Pages are written through a temp file
//! and a rename, so an interrupted run leaves each page either old or new.

use crate::assets;
use crate::config::{AssetMode, GeneratorConfig};
use crate::error::{Stage, StageError};
use crate::listing::{self, DirectoryListing};
use crate::render;
use log::{debug, info, warn};
use std::collections::HashSet;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Cannot resolve root directory '{}': {source}", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// What a run did.
#[derive(Debug, Default)]
pub struct RunReport {
    pub pages_written: usize,
    pub directories_visited: usize,
    pub directories_excluded: usize,
    pub assets_written: usize,
    pub failures: Vec<StageError>,
}

/// Generate every page under `root`.
pub fn run(root: &Path, config: &GeneratorConfig) -> Result<RunReport, GenerateError> {
    let base = root.canonicalize().map_err(|source| GenerateError::Resolve {
        path: root.to_path_buf(),
        source,
    })?;
    if !base.is_dir() {
        return Err(GenerateError::NotADirectory(base));
    }

    info!("Indexing {} for the {} mirror", base.display(), config.mirror.tag);

    let mut walker = Walker {
        base: &base,
        config,
        visited: HashSet::new(),
        report: RunReport::default(),
    };

    if config.assets == AssetMode::External {
        walker.report.assets_written = assets::write_assets(&base, &mut walker.report.failures);
    }

    walker.visited.insert(base.clone());
    walker.visit(&base);

    Ok(walker.report)
}

/// Render one page and write it into the listed directory.
///
/// Returns the path written.
pub fn generate_page(
    listing: &DirectoryListing,
    base: &Path,
    filetypes: &[String],
    selected: Option<&str>,
    config: &GeneratorConfig,
) -> Result<PathBuf, StageError> {
    let page = render::render_page(listing, base, filetypes, selected, config);
    let path = listing.path.join(render::page_filename(selected));
    write_atomic(&path, page.into_string().as_bytes())
        .map_err(|err| StageError::new(Stage::WritePage, &path, err))?;
    Ok(path)
}

/// Replace `path` with `contents` via a sibling temp file and a rename.
///
/// The temp file is named `.<random>.tmp`, which classifies as an ignored
/// `tmp` file should a run be killed before the rename.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut builder = tempfile::Builder::new();
    builder.prefix(".").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }

    let mut tmp = builder.tempfile_in(dir)?;
    tmp.write_all(contents)?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

struct Walker<'a> {
    base: &'a Path,
    config: &'a GeneratorConfig,
    /// Canonical paths already visited; symlinks can lead back into the tree.
    visited: HashSet<PathBuf>,
    report: RunReport,
}

impl Walker<'_> {
    fn fail(&mut self, err: StageError) {
        warn!("{err}");
        self.report.failures.push(err);
    }

    fn visit(&mut self, dir: &Path) {
        self.report.directories_visited += 1;

        let listing = match listing::list_directory(
            dir,
            &self.config.exclude_marker,
            &mut self.report.failures,
        ) {
            Ok(listing) => listing,
            Err(err) => {
                self.fail(err);
                return;
            }
        };

        if listing.has_marker(&self.config.exclude_marker) {
            info!("Skipping excluded directory: {}", dir.display());
            self.report.directories_excluded += 1;
        } else {
            self.generate_pages(&listing);
        }

        for sub in listing.subdirectories() {
            match sub.path.canonicalize() {
                Ok(real) => {
                    // Targets inside the tree get their pages under their own name.
                    if sub.is_symlink && real.starts_with(self.base) {
                        debug!("{} links into the tree, not descending", sub.path.display());
                        continue;
                    }
                    if !self.visited.insert(real) {
                        debug!("Already visited {}, not descending", sub.path.display());
                        continue;
                    }
                }
                Err(err) => {
                    self.fail(StageError::new(Stage::Descend, &sub.path, err));
                    continue;
                }
            }
            self.visit(&sub.path);
        }
    }

    fn generate_pages(&mut self, listing: &DirectoryListing) {
        let filetypes = listing.filetypes();
        let pages = filetypes
            .iter()
            .map(|ft| Some(ft.as_str()))
            .chain(std::iter::once(None));

        let mut written = 0;
        for selected in pages {
            match generate_page(listing, self.base, &filetypes, selected, self.config) {
                Ok(path) => {
                    debug!("Generated {}", path.display());
                    written += 1;
                }
                Err(err) => self.fail(err),
            }
        }

        self.report.pages_written += written;
        info!(
            "Indexed {} ({} of {} pages)",
            listing.path.display(),
            written,
            filetypes.len() + 1
        );
    }
}
