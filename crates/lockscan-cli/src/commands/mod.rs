//! Command dispatch and handler modules.

mod scan;
mod tree;

use std::path::{Path, PathBuf};

use miette::Result;

use lockscan_php::COMPOSER_LOCK;
use lockscan_util::errors::LockscanError;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Scan { path } => scan::exec(path.as_deref()),
        Command::Tree { path, depth } => tree::exec(path.as_deref(), depth),
    }
}

/// Resolve the user-supplied path to a concrete lock file.
///
/// Accepts a lock file, a directory containing one, or nothing at all, in
/// which case the search walks up from the current directory.
fn locate_lockfile(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(p) if p.is_file() => Ok(p.to_path_buf()),
        Some(p) if p.is_dir() => {
            let candidate = p.join(COMPOSER_LOCK);
            if candidate.is_file() {
                Ok(candidate)
            } else {
                Err(LockscanError::Lockfile {
                    message: format!("no {COMPOSER_LOCK} in {}", p.display()),
                }
                .into())
            }
        }
        Some(p) => Err(LockscanError::Lockfile {
            message: format!("{} does not exist", p.display()),
        }
        .into()),
        None => {
            let cwd = std::env::current_dir().map_err(LockscanError::Io)?;
            lockscan_util::fs::find_lockfile(&cwd, COMPOSER_LOCK).ok_or_else(|| {
                LockscanError::Lockfile {
                    message: format!("no {COMPOSER_LOCK} found in this directory or any parent"),
                }
                .into()
            })
        }
    }
}

/// Name the synthetic root after the project directory holding the lock
/// file, falling back to a generic label.
fn root_name(lock_path: &Path) -> String {
    lock_path
        .parent()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .unwrap_or("project")
        .to_string()
}
