//! # dirindex
//!
//! Static HTML index pages for a file tree served by a plain file server.
//! Every directory gets an `index.html` listing its folders and files, plus
//! one `<ext>.html` per file extension found in it, with a client-side search
//! box and a link to the same directory on the sibling mirror. No
//! server-side scripting is needed to browse the result.
//!
//! # Pipeline
//!
//! ```text
//! list directory  →  classify + format  →  render (maud)  →  write pages
//!       ↑                                                        │
//!       └──────────────── recurse into subdirectories ───────────┘
//! ```
//!
//! One synchronous, depth-first pass. Every run regenerates every page.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`classify`] | Extension token for a filename, and the ignored set |
//! | [`format`] | Fixed-width size and UTC date strings |
//! | [`listing`] | One directory read into sorted, classified entries |
//! | [`render`] | One page as HTML, from a listing (pure) |
//! | [`generate`] | The tree walk, page writing, and the run report |
//! | [`mirror`] | The `eu`/`na` mirror profiles and cross-mirror links |
//! | [`config`] | [`config::GeneratorConfig`], built once at startup |
//! | [`assets`] | Embedded stylesheet and search script |
//! | [`error`] | [`error::StageError`], the non-fatal failure record |
//! | [`output`] | End-of-run summary formatting |
//!
//! # Exclusion Marker
//!
//! A directory containing a file named `EXCLUDE_FOLDER` gets no pages and is
//! left out of its parent's folder list. Its subdirectories are still
//! visited and indexed on their own.
//!
//! # Failure Policy
//!
//! Only an unusable root directory stops a run. Unreadable directories,
//! unreadable file metadata, and failed page writes are logged through
//! [`log`], collected in [`generate::RunReport`], and the walk carries on.

pub mod assets;
pub mod classify;
pub mod config;
pub mod error;
pub mod format;
pub mod generate;
pub mod listing;
pub mod mirror;
pub mod output;
pub mod render;

#[cfg(test)]
pub(crate) mod test_helpers;
