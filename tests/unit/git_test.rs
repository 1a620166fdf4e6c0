//! Unit tests for git helpers

use std::fs;

use ghdash::git::{discover, parse_origin_url, repo_short_name};
use tempfile::TempDir;

#[test]
fn short_names_for_common_remotes() {
    let cases = [
        ("git@github.com:dlvhdr/gh-dash.git", "dlvhdr/gh-dash"),
        ("https://github.com/dlvhdr/gh-dash", "dlvhdr/gh-dash"),
        ("https://github.com/dlvhdr/gh-dash.git", "dlvhdr/gh-dash"),
        ("ssh://git@github.com/dlvhdr/gh-dash.git", "dlvhdr/gh-dash"),
    ];
    for (url, expected) in cases {
        assert_eq!(repo_short_name(url).as_deref(), Some(expected), "{}", url);
    }
}

#[test]
fn short_name_needs_owner_and_repo() {
    assert_eq!(repo_short_name("https://github.com/"), None);
    assert_eq!(repo_short_name("not a url"), None);
}

#[test]
fn origin_is_read_from_its_own_section() {
    let config = "[core]\n\tbare = false\n[remote \"upstream\"]\n\turl = https://x/y/z\n[remote \"origin\"]\n\turl = git@github.com:a/b.git\n";
    assert_eq!(
        parse_origin_url(config).as_deref(),
        Some("git@github.com:a/b.git")
    );
}

#[test]
fn discover_walks_up_from_subdirectory() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("repo");
    let nested = root.join("src").join("deep");
    fs::create_dir_all(&nested).unwrap();
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::write(
        root.join(".git").join("config"),
        "[remote \"origin\"]\n\turl = https://github.com/a/b.git\n",
    )
    .unwrap();

    let info = discover(&nested).unwrap();
    assert_eq!(info.path, root);
    assert_eq!(info.origin_url.as_deref(), Some("https://github.com/a/b.git"));
}

#[test]
fn discover_without_origin() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join(".git")).unwrap();
    let info = discover(temp.path()).unwrap();
    assert_eq!(info.origin_url, None);
}
