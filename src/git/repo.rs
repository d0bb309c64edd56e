use crate::error::{OpenError, Result};
use git2::{Commit, Oid, Repository};
use log::debug;
use std::path::Path;

const FULL_HEX_LEN: usize = 40;

/// Open the repository enclosing `cwd`, searching parent directories.
pub fn open_repository(cwd: &Path) -> Result<Repository> {
    let repo = Repository::discover(cwd)
        .map_err(|e| OpenError::Repository(e.message().to_string()))?;
    debug!("Repository root: {}", repository_dir(&repo).display());
    Ok(repo)
}

/// Top-level working directory, or the git directory for bare repositories.
pub fn repository_dir(repo: &Repository) -> &Path {
    repo.workdir().unwrap_or_else(|| repo.path())
}

/// Look up the commit named by `id`.
///
/// A full hex id is looked up directly. Anything else (an abbreviation the
/// normalizer could not expand, a branch, a tag) goes through the revision
/// parser. Tags are peeled to the commit they point at.
pub fn find_commit<'r>(repo: &'r Repository, id: &str) -> Result<Commit<'r>> {
    let object = if is_full_hex(id) {
        Oid::from_str(id).and_then(|oid| repo.find_object(oid, None))
    } else {
        repo.revparse_single(id)
    };

    object
        .and_then(|obj| obj.peel_to_commit())
        .map_err(|e| {
            debug!("Lookup of {} failed: {}", id, e.message());
            OpenError::CommitNotFound(id.to_string())
        })
}

fn is_full_hex(id: &str) -> bool {
    id.len() == FULL_HEX_LEN && id.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_full_hex() {
        assert!(is_full_hex("3f786850e387550fdab836ed7e6dc881de23001b"));
        assert!(is_full_hex("3F786850E387550FDAB836ED7E6DC881DE23001B"));
        assert!(!is_full_hex("3f78685"));
        assert!(!is_full_hex("main"));
        assert!(!is_full_hex("zf786850e387550fdab836ed7e6dc881de23001b"));
    }

    #[test]
    fn test_open_outside_repository_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_repository(dir.path()).err();
        assert!(matches!(err, Some(OpenError::Repository(_))));
    }

    #[test]
    fn test_open_from_subdirectory_finds_root() {
        let dir = tempfile::tempdir().unwrap();
        Repository::init(dir.path()).unwrap();
        let nested = dir.path().join("src").join("deep");
        std::fs::create_dir_all(&nested).unwrap();

        let repo = open_repository(&nested).unwrap();
        assert_eq!(
            repository_dir(&repo).canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_find_commit_by_full_id_and_branch() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let sig = git2::Signature::now("Test", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let oid = repo
            .commit(Some("refs/heads/topic"), &sig, &sig, "Initial", &tree, &[])
            .unwrap();

        let by_id = find_commit(&repo, &oid.to_string()).unwrap();
        assert_eq!(by_id.id(), oid);
        let by_branch = find_commit(&repo, "topic").unwrap();
        assert_eq!(by_branch.id(), oid);
        let short = &oid.to_string()[..7];
        assert_eq!(find_commit(&repo, short).unwrap().id(), oid);
    }

    #[test]
    fn test_find_commit_missing() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let missing = "0123456789abcdef0123456789abcdef01234567";
        assert_eq!(
            find_commit(&repo, missing).err(),
            Some(OpenError::CommitNotFound(missing.to_string()))
        );
        assert!(matches!(
            find_commit(&repo, "no-such-branch"),
            Err(OpenError::CommitNotFound(_))
        ));
    }
}
