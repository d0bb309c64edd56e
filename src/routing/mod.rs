//! Decide whether a commit opens as a commit view or as the pull request it
//! came from.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// `#123` anywhere in the message
static LOOSE_PR: Lazy<Regex> = Lazy::new(|| Regex::new(r"#([0-9]+)").unwrap());

/// GitHub's merge-commit subject, at the very start of the message
static STRICT_PR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Merge pull request #([0-9]+)").unwrap());

/// How a commit message is matched against a pull request number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Any `#<digits>` token, e.g. squash merges titled `Fix bug (#123)`
    #[default]
    Loose,
    /// Only merge commits starting `Merge pull request #<digits>`
    Strict,
}

impl MatchMode {
    /// Pull request number referenced by `message`, if any.
    pub fn pull_number<'m>(self, message: &'m str) -> Option<&'m str> {
        let re = match self {
            MatchMode::Loose => &*LOOSE_PR,
            MatchMode::Strict => &*STRICT_PR,
        };
        re.captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteOptions {
    /// Always open the commit view, whatever the message says
    pub force_commit: bool,
    pub match_mode: MatchMode,
}

/// Where on the remote a commit is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Commit(String),
    Pull(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Commit(hash) => format!("/commit/{}", hash),
            Route::Pull(number) => format!("/pull/{}", number),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Route the commit `hash` with `message` according to `options`.
pub fn route(hash: &str, message: &str, options: RouteOptions) -> Route {
    if options.force_commit {
        return Route::Commit(hash.to_string());
    }
    match options.match_mode.pull_number(message) {
        Some(number) => Route::Pull(number.to_string()),
        None => Route::Commit(hash.to_string()),
    }
}
