//! Reference in, URL out.
//!
//! [`resolve`] is a function of (reference, options, environment, runner) with
//! no process-global reads, so it can be tested against a scratch repository
//! and a [`RecordingRunner`](crate::exec::RecordingRunner).

use crate::browser;
use crate::env::Environment;
use crate::error::Result;
use crate::exec::CommandRunner;
use crate::git;
use crate::routing::{self, Route, RouteOptions};
use log::debug;

/// A fully resolved destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Web origin of the selected remote, e.g. `https://github.com/owner/repo`
    pub origin: String,
    pub route: Route,
    pub url: String,
}

/// Resolve `reference` to the web URL it should open.
pub fn resolve(
    reference: &str,
    options: RouteOptions,
    env: &Environment,
    runner: &dyn CommandRunner,
) -> Result<Target> {
    let repo = git::open_repository(&env.cwd)?;
    let id = git::normalize_reference(runner, git::repository_dir(&repo), reference);
    let origin = git::resolve_origin(&repo)?;

    let commit = git::find_commit(&repo, &id)?;
    let hash = commit.id().to_string();
    let message = String::from_utf8_lossy(commit.message_bytes());
    let route = routing::route(&hash, &message, options);
    debug!("Routing {} to {}", hash, route);

    let url = format!("{}{}", origin, route.path());
    Ok(Target { origin, route, url })
}

/// Resolve `reference` and open the result in a browser.
pub fn open(
    reference: &str,
    options: RouteOptions,
    env: &Environment,
    runner: &dyn CommandRunner,
    is_available: impl Fn(&str) -> bool,
) -> Result<Target> {
    let target = resolve(reference, options, env, runner)?;
    let program = browser::opener_program(env, is_available)?;
    browser::open_url(runner, &program, &target.url)?;
    Ok(target)
}
