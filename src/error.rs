use std::fmt;

/// Every way resolving or opening a commit URL can fail.
///
/// All variants are terminal: the binary prints the message and exits 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenError {
    /// No reference was supplied on the command line
    Usage,
    /// Not inside a repository, or the repository could not be opened
    Repository(String),
    /// The repository has no remotes at all
    NoRemotes,
    /// The selected remote has no fetch URL configured
    RemoteWithoutUrl(String),
    /// The reference does not name a commit in this repository
    CommitNotFound(String),
    /// No default URL opener is known for this operating system
    UnsupportedPlatform(String),
    /// The opener could not be started or exited unsuccessfully
    LaunchFailed { program: String, reason: String },
}

impl fmt::Display for OpenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenError::Usage => write!(f, "missing commit reference"),
            OpenError::Repository(msg) => write!(f, "repository not found: {}", msg),
            OpenError::NoRemotes => write!(f, "no remotes configured"),
            OpenError::RemoteWithoutUrl(name) => write!(f, "remote '{}' has no URL", name),
            OpenError::CommitNotFound(reference) => write!(f, "commit not found: {}", reference),
            OpenError::UnsupportedPlatform(os) => write!(f, "unsupported platform: {}", os),
            OpenError::LaunchFailed { program, reason } => {
                write!(f, "failed to launch '{}': {}", program, reason)
            }
        }
    }
}

impl std::error::Error for OpenError {}

pub type Result<T> = std::result::Result<T, OpenError>;
