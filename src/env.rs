use anyhow::{Context, Result};
use std::path::PathBuf;

/// Environment variable that overrides the platform URL opener
pub const BROWSER_VAR: &str = "BROWSER";

/// Process-wide inputs to the pipeline, captured once and passed explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// Directory the repository is discovered from
    pub cwd: PathBuf,
    /// Value of `BROWSER`, if set and non-empty after trimming
    pub browser: Option<String>,
    /// Operating system identifier, as in `std::env::consts::OS`
    pub os: String,
}

impl Environment {
    /// Capture the current process's working directory, `BROWSER` and OS.
    pub fn from_process() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to determine current directory")?;
        Ok(Self {
            cwd,
            browser: browser_override(std::env::var(BROWSER_VAR).ok()),
            os: std::env::consts::OS.to_string(),
        })
    }
}

fn browser_override(value: Option<String>) -> Option<String> {
    let trimmed = value?.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_override_ignores_blank() {
        assert_eq!(browser_override(None), None);
        assert_eq!(browser_override(Some(String::new())), None);
        assert_eq!(browser_override(Some("   ".to_string())), None);
    }

    #[test]
    fn test_browser_override_trims() {
        assert_eq!(
            browser_override(Some(" firefox\n".to_string())),
            Some("firefox".to_string())
        );
    }

    #[test]
    fn test_from_process_reports_current_os() {
        let env = Environment::from_process().unwrap();
        assert_eq!(env.os, std::env::consts::OS);
        assert!(env.cwd.is_absolute());
    }
}
