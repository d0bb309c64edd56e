//! Subprocess execution behind a narrow interface.
//!
//! Everything that spawns a process (`git rev-parse`, the URL opener) goes
//! through [`CommandRunner`], so the resolution pipeline can be driven in tests
//! by a [`RecordingRunner`] without touching real processes.

mod recording;

pub use recording::RecordingRunner;

use log::debug;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// A single program invocation, as seen by a runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    /// Whether stdout/stderr are captured (true) or inherited (false)
    pub captured: bool,
}

impl Invocation {
    fn new(program: &str, args: &[&str], cwd: Option<&Path>, captured: bool) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: cwd.map(Path::to_path_buf),
            captured,
        }
    }
}

/// Result of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    /// Exit code, if the process exited normally
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// A successful run that printed `stdout`.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A run that exited with a non-zero `code`.
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Capability to run external programs.
///
/// `Err` means the program could not be started at all; a started program that
/// exits unsuccessfully is an `Ok` with `success == false`.
pub trait CommandRunner {
    fn execute(&self, invocation: &Invocation) -> io::Result<CommandOutput>;

    /// Run `program` in `cwd`, capturing its output.
    fn output(&self, program: &str, args: &[&str], cwd: &Path) -> io::Result<CommandOutput> {
        self.execute(&Invocation::new(program, args, Some(cwd), true))
    }

    /// Run `program` with inherited stdio and wait for it to exit.
    fn status(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
        self.execute(&Invocation::new(program, args, None, false))
    }
}

/// Runs programs for real via `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn execute(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        debug!("$ {} {}", invocation.program, invocation.args.join(" "));

        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        if let Some(cwd) = &invocation.cwd {
            cmd.current_dir(cwd);
        }

        if invocation.captured {
            let output = cmd.stdin(Stdio::null()).output()?;
            Ok(CommandOutput {
                success: output.status.success(),
                code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        } else {
            let status = cmd.status()?;
            Ok(CommandOutput {
                success: status.success(),
                code: status.code(),
                ..CommandOutput::default()
            })
        }
    }
}
