use crate::exec::CommandRunner;
use log::debug;
use std::path::Path;

/// Expand `reference` to a full commit id using `git rev-parse`.
///
/// Lenient: if git cannot be run, rejects the reference, or prints nothing,
/// the reference is returned unchanged and the commit lookup reports the
/// failure instead.
pub fn normalize_reference(runner: &dyn CommandRunner, repo_dir: &Path, reference: &str) -> String {
    let peeled = format!("{}^{{commit}}", reference);
    let args = ["rev-parse", "--verify", "--quiet", peeled.as_str()];

    match runner.output("git", &args, repo_dir) {
        Ok(out) if out.success => {
            let full = out.stdout.trim();
            if full.is_empty() {
                reference.to_string()
            } else {
                debug!("Resolved {} to {}", reference, full);
                full.to_string()
            }
        }
        Ok(out) => {
            debug!("git rev-parse rejected {} (exit {:?})", reference, out.code);
            reference.to_string()
        }
        Err(e) => {
            debug!("Could not run git rev-parse: {}", e);
            reference.to_string()
        }
    }
}
