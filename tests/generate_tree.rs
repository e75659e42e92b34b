//! End-to-end runs over real temp trees.
//!
//! Each test builds a small tree, runs the generator through the public
//! `generate::run` entry point, and inspects the pages left on disk.
//!
//! `tree` mirrors the crate's `test_helpers::build_tree`, which is
//! `#[cfg(test)]` and so not visible from here. Keep the two in step.

use dirindex::config::GeneratorConfig;
use dirindex::generate::{self, RunReport};
use dirindex::mirror::Mirror;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn tree(paths: &[&str]) -> TempDir {
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

fn run(root: &Path) -> RunReport {
    generate::run(root, &GeneratorConfig::new(Mirror::Eu)).unwrap()
}

fn page(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap_or_else(|e| panic!("{rel}: {e}"))
}

/// Link targets inside the type-switcher nav, in order.
fn nav_links(html: &str) -> Vec<String> {
    let start = html.find(r#"<nav class="filetypes">"#).unwrap();
    let end = start + html[start..].find("</nav>").unwrap();
    html[start..end]
        .split(r#"href=""#)
        .skip(1)
        .map(|s| s[..s.find('"').unwrap()].to_string())
        .collect()
}

/// Display text of every list item link, in page order.
fn list_labels(html: &str) -> Vec<String> {
    html.split("<li>")
        .skip(1)
        .filter_map(|li| {
            let a = li.find("<a href=")?;
            let text_start = a + li[a..].find('>')? + 1;
            let text_end = text_start + li[text_start..].find("</a>")?;
            Some(li[text_start..text_end].to_string())
        })
        .collect()
}

#[test]
fn index_links_every_typed_page() {
    let tmp = tree(&["a.iso", "b.txt", "c.zip"]);
    run(tmp.path());

    let index = page(tmp.path(), "index.html");
    assert_eq!(nav_links(&index), vec!["iso.html", "txt.html", "zip.html"]);
}

#[test]
fn typed_pages_reach_each_other() {
    let tmp = tree(&["a.iso", "b.txt", "c.zip"]);
    run(tmp.path());

    assert_eq!(nav_links(&page(tmp.path(), "iso.html")), vec!["./", "txt.html", "zip.html"]);
    assert_eq!(nav_links(&page(tmp.path(), "txt.html")), vec!["./", "iso.html", "zip.html"]);
    assert_eq!(nav_links(&page(tmp.path(), "zip.html")), vec!["./", "iso.html", "txt.html"]);
}

#[test]
fn folders_first_then_case_insensitive_names() {
    let tmp = tree(&["b.txt", "A.txt", "a.txt", "Z/"]);
    run(tmp.path());

    let index = page(tmp.path(), "index.html");
    assert_eq!(list_labels(&index), vec!["[Z]", "A.txt", "a.txt", "b.txt"]);
}

#[test]
fn excluded_directory_hidden_silent_and_still_descended() {
    let tmp = tree(&[
        "public/a.txt",
        "private/EXCLUDE_FOLDER",
        "private/secret.txt",
        "private/nested/b.txt",
    ]);
    let report = run(tmp.path());

    let index = page(tmp.path(), "index.html");
    assert!(index.contains("[public]"));
    assert!(!index.contains("[private]"));

    assert!(!tmp.path().join("private/index.html").exists());
    assert!(!tmp.path().join("private/txt.html").exists());
    assert!(tmp.path().join("private/nested/index.html").is_file());
    assert!(tmp.path().join("private/nested/txt.html").is_file());

    assert_eq!(report.directories_excluded, 1);
    assert_eq!(report.directories_visited, 4);
}

#[test]
fn long_listing_gets_back_to_top() {
    let mut paths: Vec<String> = (0..25).map(|i| format!("big/f{i:02}.txt")).collect();
    paths.extend((0..5).map(|i| format!("small/f{i}.txt")));
    let refs: Vec<&str> = paths.iter().map(String::as_str).collect();
    let tmp = tree(&refs);
    run(tmp.path());

    assert!(page(tmp.path(), "big/index.html").contains("[Back to Top]"));
    assert!(page(tmp.path(), "big/txt.html").contains("[Back to Top]"));
    assert!(!page(tmp.path(), "small/index.html").contains("[Back to Top]"));
}

#[test]
fn rerun_is_byte_identical() {
    let tmp = tree(&["a.txt", "b.iso", "sub/c.zip", "sub/deep/d.txt", "hidden/EXCLUDE_FOLDER"]);
    let pages = ["index.html", "iso.html", "txt.html", "sub/index.html", "sub/zip.html", "sub/deep/txt.html"];

    run(tmp.path());
    let first: Vec<String> = pages.iter().map(|p| page(tmp.path(), p)).collect();
    run(tmp.path());
    let second: Vec<String> = pages.iter().map(|p| page(tmp.path(), p)).collect();

    assert_eq!(first, second);
}

#[test]
fn mirror_link_follows_directory() {
    let tmp = tree(&["maps/csgo/a.bsp"]);
    let config = GeneratorConfig::new(Mirror::Na);
    generate::run(tmp.path(), &config).unwrap();

    assert!(page(tmp.path(), "index.html").contains(r#"href="https://files.femboy.kz/""#));
    assert!(page(tmp.path(), "maps/csgo/index.html")
        .contains(r#"href="https://files.femboy.kz/maps/csgo/""#));
}

#[test]
fn assets_linked_relative_to_root() {
    let tmp = tree(&["one/two/a.txt"]);
    run(tmp.path());

    assert!(page(tmp.path(), "index.html").contains(r#"href="./style.css""#));
    assert!(page(tmp.path(), "one/two/index.html").contains(r#"href="../../style.css""#));
    assert!(tmp.path().join("search.js").is_file());
}

#[test]
fn dotfiles_follow_lowercased_policy() {
    let tmp = tree(&[".HTACCESS", ".bashrc", "notes.txt"]);
    run(tmp.path());

    let index = page(tmp.path(), "index.html");
    assert!(!index.contains(".HTACCESS"));
    assert!(index.contains(".bashrc"));
    assert!(page(tmp.path(), "bashrc.html").contains(".bashrc"));
    assert!(!tmp.path().join("htaccess.html").exists());
}

#[cfg(unix)]
#[test]
fn unreadable_directory_does_not_stop_siblings() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = tree(&["locked/a.txt", "open/b.txt"]);
    let locked = tmp.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Root ignores permission bits; nothing to observe then.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let report = run(tmp.path());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(tmp.path().join("open/index.html").is_file());
    assert!(!report.failures.is_empty());
}
