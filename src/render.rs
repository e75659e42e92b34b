//! HTML page rendering.
//!
//! Turns a [`DirectoryListing`] into one standalone page. Rendering is pure:
//! no filesystem access, so every layout rule is testable with hand-built
//! listings. Writing the result is [`crate::generate`]'s job.
//!
//! ## Page Layout
//!
//! ```text
//! <h1> FKZ File Index - EU - /maps/ - .ISO
//! [Home] | [TXT] | [ZIP]          ← type switcher (selected type omitted)
//! [ search box ]
//! [NA Site]                       ← same directory on the other mirror
//! Folders - 2
//!     [Go Back]
//!     [csgo]
//!     [tf2]
//! Files - 3
//!     [  1.5 KB] 2024-03-09 07:05 notes.txt
//!     ...
//!     [Back to Top]               ← only on long lists
//! ```
//!
//! Names are escaped for display by maud and percent-encoded for links.

use crate::assets::{SEARCH_JS, STYLE_CSS};
use crate::config::{AssetMode, GeneratorConfig};
use crate::format::{format_date, format_size};
use crate::listing::{DirectoryEntry, DirectoryListing, FileRecord};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::path::Path;

/// Fixed product name at the start of every title.
pub const PRODUCT_TAG: &str = "FKZ File Index";

const SCROLL_TO_TOP: &str = "window.scrollTo({top: 0, behavior: 'smooth'}); return false;";

/// Output filename for a page: `index.html`, or `<ext>.html` for a typed page.
pub fn page_filename(selected: Option<&str>) -> String {
    match selected {
        Some(ext) => format!("{}.html", ext),
        None => "index.html".to_string(),
    }
}

/// Path components of `dir` below `base`. Empty for the root itself.
pub fn relative_segments(dir: &Path, base: &Path) -> Vec<String> {
    dir.strip_prefix(base)
        .map(|rel| {
            rel.components()
                .map(|c| c.as_os_str().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Page title and `<h1>` text.
fn page_title(dir_name: &str, tag: &str, selected: Option<&str>) -> String {
    let mut title = format!("{} - {} - /{}/", PRODUCT_TAG, tag, dir_name);
    if let Some(ext) = selected {
        title.push_str(&format!(" - .{}", ext.to_uppercase()));
    }
    title
}

/// Relative path from a page back to the root, where shared assets live.
fn assets_prefix(depth: usize) -> String {
    if depth == 0 {
        ".".to_string()
    } else {
        vec![".."; depth].join("/")
    }
}

/// Render one page for `listing`.
///
/// `filetypes` is the full set of typed pages generated for this directory;
/// `selected` is the type this page is restricted to, or `None` for the
/// untyped index.
pub fn render_page(
    listing: &DirectoryListing,
    base: &Path,
    filetypes: &[String],
    selected: Option<&str>,
    config: &GeneratorConfig,
) -> Markup {
    let segments = relative_segments(&listing.path, base);
    let is_root = segments.is_empty();
    let dir_name = listing
        .path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let title = page_title(&dir_name, config.mirror.tag, selected);
    let prefix = assets_prefix(segments.len());
    let mirror_link = config.mirror.link_for(&segments);

    let folders: Vec<&DirectoryEntry> = listing.folders().collect();
    let files: Vec<&FileRecord> = match selected {
        Some(ext) => listing.typed_files(ext).collect(),
        None => listing.index_files().collect(),
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @if config.assets == AssetMode::Inline {
                    style { (PreEscaped(STYLE_CSS)) }
                } @else {
                    link rel="stylesheet" href={ (prefix) "/style.css" };
                }
                @if let Some(icon) = &config.favicon {
                    link rel="shortcut icon" href=(icon);
                }
            }
            body {
                h1 { (title) }
                (filetype_nav(filetypes, selected))
                br;
                input id="search" type="text" placeholder="Search... :3";
                br;
                nav.mirror {
                    a href=(mirror_link) { "[" (config.mirror.display_name) "]" }
                }
                br;
                @if !folders.is_empty() || !is_root {
                    (folder_section(&folders, is_root, selected.is_none(), config))
                }
                @if !files.is_empty() {
                    (file_section(&files, is_root, config))
                }
                @if config.assets == AssetMode::Inline {
                    script { (PreEscaped(SEARCH_JS)) }
                } @else {
                    script src={ (prefix) "/search.js" } {}
                }
            }
        }
    }
}

/// Type switcher: a home link on typed pages, then every other type.
fn filetype_nav(filetypes: &[String], selected: Option<&str>) -> Markup {
    let mut links: Vec<(String, String)> = Vec::new();
    if selected.is_some() {
        links.push(("./".to_string(), "Home".to_string()));
    }
    for ft in filetypes.iter().filter(|ft| Some(ft.as_str()) != selected) {
        links.push((
            format!("{}.html", urlencoding::encode(ft)),
            ft.to_uppercase(),
        ));
    }

    html! {
        nav.filetypes {
            @for (i, (href, label)) in links.iter().enumerate() {
                @if i > 0 { " | " }
                a href=(href) { "[" (label) "]" }
            }
        }
    }
}

fn go_back() -> Markup {
    html! {
        li.go-back { a href="../" { "[Go Back]" } }
    }
}

/// Repeated go-back link plus a scroll-to-top link, closing a long list.
///
/// The scroll link is a `nav`, not an `li`, so searching never hides it.
fn back_to_top(is_root: bool) -> Markup {
    html! {
        @if !is_root { (go_back()) }
        nav.back-to-top { a href="#" onclick=(SCROLL_TO_TOP) { "[Back to Top]" } }
    }
}

fn folder_section(
    folders: &[&DirectoryEntry],
    is_root: bool,
    is_index: bool,
    config: &GeneratorConfig,
) -> Markup {
    html! {
        h2 { "Folders - " (folders.len()) }
        ul.folders {
            @if !is_root { (go_back()) }
            @for folder in folders {
                li {
                    a href={ (urlencoding::encode(&folder.name)) "/" } { "[" (folder.name) "]" }
                }
            }
            @if is_index && folders.len() >= config.min_folders_for_nav {
                (back_to_top(is_root))
            }
        }
    }
}

fn file_section(files: &[&FileRecord], is_root: bool, config: &GeneratorConfig) -> Markup {
    html! {
        h2 { "Files - " (files.len()) }
        ul.files {
            @for file in files {
                li {
                    span.file-size { "[" (format_size(file.byte_size)) "]" }
                    " "
                    span.file-date { (format_date(file.last_modified)) }
                    " "
                    a href=(urlencoding::encode(&file.name)) { (file.name) }
                }
            }
            @if files.len() >= config.min_files_for_nav {
                (back_to_top(is_root))
            }
        }
    }
}
