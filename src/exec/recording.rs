use super::{CommandOutput, CommandRunner, Invocation};
use std::cell::RefCell;
use std::io;

type Responder = Box<dyn Fn(&Invocation) -> io::Result<CommandOutput>>;

/// Test double that records every invocation instead of spawning it.
///
/// The reply for each call comes from a responder closure, so a test can
/// emulate `git rev-parse` or a browser that fails to start.
pub struct RecordingRunner {
    calls: RefCell<Vec<Invocation>>,
    responder: Responder,
}

impl RecordingRunner {
    pub fn new(responder: impl Fn(&Invocation) -> io::Result<CommandOutput> + 'static) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            responder: Box::new(responder),
        }
    }

    /// Every call succeeds and prints `stdout`.
    pub fn succeeding(stdout: &str) -> Self {
        let stdout = stdout.to_string();
        Self::new(move |_| Ok(CommandOutput::ok(stdout.clone())))
    }

    /// Every call exits with `code`.
    pub fn exiting(code: i32) -> Self {
        Self::new(move |_| Ok(CommandOutput::failed(code, "")))
    }

    /// No program can be started.
    pub fn unspawnable() -> Self {
        Self::new(|inv| {
            Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: not found", inv.program),
            ))
        })
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn execute(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        self.calls.borrow_mut().push(invocation.clone());
        (self.responder)(invocation)
    }
}
