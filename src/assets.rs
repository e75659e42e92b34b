//! Shared stylesheet and search script.
//!
//! Both are embedded at compile time from `static/`. In
//! [`AssetMode::External`](crate::config::AssetMode) they are written once to
//! the tree root and every page links to them; in inline mode each page
//! carries its own copy and nothing is written here.

use crate::error::{Stage, StageError};
use crate::generate::write_atomic;
use log::{debug, warn};
use std::path::Path;

pub const STYLE_CSS: &str = include_str!("../static/style.css");
pub const SEARCH_JS: &str = include_str!("../static/search.js");

/// Filenames and contents of the root assets.
pub const ROOT_ASSETS: &[(&str, &str)] = &[("style.css", STYLE_CSS), ("search.js", SEARCH_JS)];

/// Write `style.css` and `search.js` into `root`.
///
/// Each write is independent: a failure is logged and pushed onto `failures`
/// and the other asset is still attempted. Returns how many were written.
pub fn write_assets(root: &Path, failures: &mut Vec<StageError>) -> usize {
    let mut written = 0;
    for (name, contents) in ROOT_ASSETS {
        let path = root.join(name);
        match write_atomic(&path, contents.as_bytes()) {
            Ok(()) => {
                debug!("Wrote {}", path.display());
                written += 1;
            }
            Err(err) => {
                let err = StageError::new(Stage::WriteAsset, path, err);
                warn!("{err}");
                failures.push(err);
            }
        }
    }
    written
}
