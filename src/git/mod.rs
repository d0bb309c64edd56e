//! Everything that reads the local repository: reference normalization,
//! repository discovery, commit lookup and remote resolution.

pub mod hash;
pub mod remote;
pub mod repo;

pub use hash::normalize_reference;
pub use remote::{resolve_origin, select_remote, web_origin, RemoteDescriptor};
pub use repo::{find_commit, open_repository, repository_dir};
