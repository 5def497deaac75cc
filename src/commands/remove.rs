use crate::commands::{find, REMOVE_PATTERN};
use crate::{EnvFilesError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Outcome of a removal run.
#[derive(Debug, Default)]
pub struct RemoveReport {
    /// Files deleted (or that would be, on a dry run).
    pub removed: Vec<PathBuf>,
    /// Matches that are not regular files.
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, EnvFilesError)>,
}

impl RemoveReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Delete every regular file under `root` whose path ends in `.env`.
pub fn remove_env_files(root: &Path, dry_run: bool) -> Result<RemoveReport> {
    let paths = find(root, REMOVE_PATTERN)?;
    Ok(remove_paths(&paths, dry_run))
}

/// The regular files among `paths`, i.e. what [`remove_paths`] would delete.
pub fn removable_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    paths.iter().filter(|p| p.is_file()).cloned().collect()
}

/// Delete the regular files among `paths`, continuing past failures.
pub fn remove_paths(paths: &[PathBuf], dry_run: bool) -> RemoveReport {
    let mut report = RemoveReport::default();
    for path in paths {
        if !path.is_file() {
            debug!("Not a regular file, skipping {:?}", path);
            report.skipped.push(path.clone());
            continue;
        }
        if dry_run {
            report.removed.push(path.clone());
            continue;
        }
        match std::fs::remove_file(path) {
            Ok(()) => {
                info!("Removed {:?}", path);
                report.removed.push(path.clone());
            }
            Err(e) => {
                warn!("Failed to remove {:?}: {}", path, e);
                report.failed.push((path.clone(), EnvFilesError::from_io(path, e)));
            }
        }
    }
    report
}
