use std::path::{Path, PathBuf};

/// Walk up from `start` looking for a lock file named `filename`.
/// Returns the path to the lock file itself, or `None` if no ancestor
/// directory contains one.
pub fn find_lockfile(start: &Path, filename: &str) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(filename);
        if candidate.is_file() {
            return Some(candidate);
        }
        current = current.parent()?;
    }
}
