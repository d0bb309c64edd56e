#![allow(dead_code)]

use commit_opener::env::Environment;
use commit_opener::exec::{CommandOutput, RecordingRunner};
use git2::{ConfigLevel, Oid, Repository, Signature};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch repository with an empty tree, built through git2 so tests do
/// not depend on a `git` binary.
pub struct TestRepo {
    pub repo: Repository,
    dir: TempDir,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        Self { repo, dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn add_remote(&self, name: &str, url: &str) {
        self.repo.remote(name, url).unwrap();
    }

    pub fn set_local_config(&self, key: &str, value: &str) {
        let mut config = self
            .repo
            .config()
            .unwrap()
            .open_level(ConfigLevel::Local)
            .unwrap();
        config.set_str(key, value).unwrap();
    }

    /// Commit on HEAD with `message`, returning the new id.
    pub fn commit(&self, message: &str) -> Oid {
        let sig = Signature::now("Test", "test@example.com").unwrap();
        let tree_id = self.repo.index().unwrap().write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();
        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<_> = parent.iter().collect();
        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    pub fn env(&self) -> Environment {
        Environment {
            cwd: self.path().to_path_buf(),
            browser: None,
            os: "linux".to_string(),
        }
    }
}

/// Runner that answers `git rev-parse` from the repository at `path` and
/// reports success for any other program.
pub fn rev_parse_runner(path: &Path) -> RecordingRunner {
    let path: PathBuf = path.to_path_buf();
    RecordingRunner::new(move |inv| {
        if inv.program != "git" {
            return Ok(CommandOutput::ok(""));
        }
        let repo = Repository::open(&path).unwrap();
        let spec = inv.args.last().cloned().unwrap_or_default();
        let reply = match repo.revparse_single(&spec).and_then(|o| o.peel_to_commit()) {
            Ok(commit) => CommandOutput::ok(format!("{}\n", commit.id())),
            Err(_) => CommandOutput::failed(128, "fatal: Needed a single revision"),
        };
        Ok(reply)
    })
}
