//! Extension classification for directory entries.
//!
//! Every file is keyed by a normalized, lowercase extension token. The token
//! decides two things: which typed page (`<ext>.html`) the file lands on, and
//! whether it shows up on the untyped `index.html` at all.
//!
//! ## Rules
//!
//! - `Report.PDF` → `"pdf"` (text after the last `.`, lowercased)
//! - `archive.tar.gz` → `"gz"`
//! - `.htaccess` → `"htaccess"` (dotfile: the bare name is the extension)
//! - `.config.yml` → `"yml"` (leading dots never count as a separator)
//! - `Makefile` → `""` (no extension)
//! - `trailing.` → `""`
//!
//! ## Dotfile Case
//!
//! Dotfile extensions are lowercased exactly like conventional ones, so
//! `.HTACCESS` and `.htaccess` are both ignored. Keeping one rule for both
//! forms means the ignored-set check never depends on how a dotfile happens
//! to be capitalized.

/// Extensions kept off the untyped index page and never given a typed page.
///
/// These are the generator's own output (`html`, `css`, `js`), server-side
/// scripts, sync-tool markers, and temp files.
pub const IGNORED_FILETYPES: &[&str] = &[
    "html", "php", "py", "sh", "js", "css", "htaccess", "tmp", "stignore",
];

/// Normalized lowercase extension of `filename`, or `""` when it has none.
pub fn file_extension(filename: &str) -> String {
    let stem_start = filename.len() - filename.trim_start_matches('.').len();
    let body = &filename[stem_start..];

    if let Some(dot) = body.rfind('.') {
        return body[dot + 1..].to_lowercase();
    }
    if filename.starts_with('.') {
        return filename[1..].to_lowercase();
    }
    String::new()
}

/// Whether an extension token is excluded from the untyped index.
///
/// The empty extension is never ignored.
pub fn is_ignored(extension: &str) -> bool {
    IGNORED_FILETYPES.contains(&extension)
}

/// Whether files with this extension get their own `<ext>.html` page.
///
/// `index` never does: `index.html` is the untyped page.
pub fn has_typed_page(extension: &str) -> bool {
    !extension.is_empty() && !is_ignored(extension) && extension != "index"
}

/// Whether `filename` belongs on the typed page for `extension`.
///
/// Matches case-insensitively on the `.<ext>` suffix, so `.bashrc` lands on
/// `bashrc.html` and `Photo.JPG` on `jpg.html`.
pub fn matches_filetype(filename: &str, extension: &str) -> bool {
    filename
        .to_lowercase()
        .ends_with(&format!(".{}", extension))
}
