//! Local git repository helpers
//!
//! Just enough git awareness for the footer: find the enclosing checkout and
//! its `origin` remote, and shorten remote URLs to `owner/repo`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

/// A local checkout and its origin remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoInfo {
    pub path: PathBuf,
    pub origin_url: Option<String>,
}

/// Find the checkout containing `start` by walking up to a `.git` entry.
pub fn discover(start: &Path) -> Option<RepoInfo> {
    let root = start.ancestors().find(|dir| dir.join(".git").exists())?;
    let origin_url = fs::read_to_string(root.join(".git").join("config"))
        .ok()
        .and_then(|contents| parse_origin_url(&contents));
    debug!(path = %root.display(), origin = ?origin_url, "discovered repository");
    Some(RepoInfo {
        path: root.to_path_buf(),
        origin_url,
    })
}

/// Extract `remote "origin"`'s url from the text of a `.git/config` file.
pub fn parse_origin_url(contents: &str) -> Option<String> {
    let mut in_origin = false;
    for line in contents.lines().map(str::trim) {
        if line.starts_with('[') {
            in_origin = line == "[remote \"origin\"]";
            continue;
        }
        if !in_origin {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            if key.trim() == "url" {
                return Some(value.trim().to_string());
            }
        }
    }
    None
}

/// Shorten a remote URL to `owner/repo`.
///
/// Handles scp-style (`git@github.com:owner/repo.git`) and URL-style
/// (`https://github.com/owner/repo`, `ssh://git@host/owner/repo.git`) remotes.
pub fn repo_short_name(url: &str) -> Option<String> {
    let url = url.trim().trim_end_matches('/');
    let url = url.strip_suffix(".git").unwrap_or(url);

    let path = if let Some((_, rest)) = url.split_once("://") {
        let (_, path) = rest.split_once('/')?;
        path
    } else {
        let (_, path) = url.split_once(':')?;
        path
    };

    let mut parts = path.rsplit('/').filter(|p| !p.is_empty());
    let repo = parts.next()?;
    let owner = parts.next()?;
    Some(format!("{}/{}", owner, repo))
}
