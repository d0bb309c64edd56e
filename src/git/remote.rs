//! Remote selection and URL-to-web-origin rewriting.

use crate::error::{OpenError, Result};
use git2::{Config, Repository};
use log::debug;

/// Remote preferred over all others when present
pub const UPSTREAM: &str = "upstream";

const GITHUB_SSH_PREFIX: &str = "git@github.com:";
const GITHUB_HTTPS_PREFIX: &str = "https://github.com/";

/// A configured remote: its name and fetch URLs in configuration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDescriptor {
    pub name: String,
    pub urls: Vec<String>,
}

impl RemoteDescriptor {
    pub fn new(name: &str, urls: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            urls: urls.iter().map(|u| u.to_string()).collect(),
        }
    }
}

/// Remotes in the order they first appear in `config`.
///
/// A remote that only has a `pushurl` is listed with no fetch URLs.
pub fn remotes_from_config(config: &Config) -> Result<Vec<RemoteDescriptor>> {
    let entries = config
        .entries(Some(r"^remote\..+\.(push)?url$"))
        .map_err(|e| OpenError::Repository(e.message().to_string()))?;

    let mut remotes: Vec<RemoteDescriptor> = Vec::new();
    entries
        .for_each(|entry| {
            let (Some(key), Some(value)) = (entry.name(), entry.value()) else {
                return;
            };
            let Some((name, variable)) = key
                .strip_prefix("remote.")
                .and_then(|rest| rest.rsplit_once('.'))
            else {
                return;
            };

            let index = match remotes.iter().position(|r| r.name == name) {
                Some(i) => i,
                None => {
                    remotes.push(RemoteDescriptor::new(name, &[]));
                    remotes.len() - 1
                }
            };
            if variable == "url" {
                remotes[index].urls.push(value.to_string());
            }
        })
        .map_err(|e| OpenError::Repository(e.message().to_string()))?;

    Ok(remotes)
}

/// Pick `upstream` if configured, else the first remote.
pub fn select_remote(remotes: &[RemoteDescriptor]) -> Result<&RemoteDescriptor> {
    remotes
        .iter()
        .find(|r| r.name == UPSTREAM)
        .or_else(|| remotes.first())
        .ok_or(OpenError::NoRemotes)
}

/// Rewrite a remote URL into the repository's web origin.
///
/// Only a trailing `.git` is removed, and only `git@github.com:` SSH URLs are
/// rewritten; anything else is passed through as-is.
pub fn web_origin(url: &str) -> String {
    let url = url.trim().trim_end_matches('/');
    let url = url.strip_suffix(".git").unwrap_or(url);

    if let Some(path) = url.strip_prefix(GITHUB_SSH_PREFIX) {
        return format!("{}{}", GITHUB_HTTPS_PREFIX, path);
    }
    url.to_string()
}

/// Web origin of the preferred remote of `repo`.
pub fn resolve_origin(repo: &Repository) -> Result<String> {
    let config = repo
        .config()
        .map_err(|e| OpenError::Repository(e.message().to_string()))?;
    let remotes = remotes_from_config(&config)?;
    let remote = select_remote(&remotes)?;

    let url = remote
        .urls
        .first()
        .ok_or_else(|| OpenError::RemoteWithoutUrl(remote.name.clone()))?;
    let origin = web_origin(url);
    debug!("Using remote {} ({}) -> {}", remote.name, url, origin);
    Ok(origin)
}
