use crate::env::Environment;
use crate::error::{OpenError, Result};
use crate::exec::CommandRunner;
use log::{debug, info};

/// Default URL openers per operating system, in order of preference.
const OPENERS: &[(&str, &[&str])] = &[
    ("linux", &["xdg-open", "gnome-open"]),
    ("macos", &["open"]),
];

/// Candidate openers for `os`, or `None` if the platform has no known opener.
pub fn default_openers(os: &str) -> Option<&'static [&'static str]> {
    OPENERS
        .iter()
        .find(|(name, _)| *name == os)
        .map(|(_, programs)| *programs)
}

/// Choose the program that opens URLs.
///
/// `BROWSER` wins when set. Otherwise the first platform opener for which
/// `is_available` holds is used, falling back to the first candidate so a
/// missing opener is reported by name when it fails to start.
pub fn opener_program(env: &Environment, is_available: impl Fn(&str) -> bool) -> Result<String> {
    if let Some(browser) = &env.browser {
        return Ok(browser.clone());
    }

    let candidates =
        default_openers(&env.os).ok_or_else(|| OpenError::UnsupportedPlatform(env.os.clone()))?;
    let program = candidates
        .iter()
        .find(|p| is_available(p))
        .or_else(|| candidates.first())
        .ok_or_else(|| OpenError::UnsupportedPlatform(env.os.clone()))?;
    Ok(program.to_string())
}

/// True if `program` can be found on `PATH`.
pub fn on_path(program: &str) -> bool {
    which::which(program).is_ok()
}

/// Open a URL with `program`
///
/// # Errors
/// Returns error if the program cannot be started or exits unsuccessfully
pub fn open_url(runner: &dyn CommandRunner, program: &str, url: &str) -> Result<()> {
    info!("Opening {} with {}", url, program);

    let out = runner
        .status(program, &[url])
        .map_err(|e| OpenError::LaunchFailed {
            program: program.to_string(),
            reason: e.to_string(),
        })?;

    if !out.success {
        let reason = match out.code {
            Some(code) => format!("exited with status {}", code),
            None => "terminated by signal".to_string(),
        };
        return Err(OpenError::LaunchFailed {
            program: program.to_string(),
            reason,
        });
    }

    debug!("{} exited successfully", program);
    Ok(())
}
