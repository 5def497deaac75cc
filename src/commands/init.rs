use crate::commands::{find, INIT_PATTERN};
use crate::{EnvFilesError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const EXAMPLE_SUFFIX: &str = ".example";

/// Outcome of an initialization run.
#[derive(Debug, Default)]
pub struct InitReport {
    /// `(example, destination)` pairs copied (or that would be, on a dry run).
    pub created: Vec<(PathBuf, PathBuf)>,
    /// Destinations left alone because they already exist.
    pub skipped: Vec<PathBuf>,
    /// Matches that are not regular files.
    pub ignored: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, EnvFilesError)>,
}

impl InitReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// `dir/name.env.example` -> `dir/name.env`.
pub fn env_destination(example: &Path) -> Option<PathBuf> {
    let name = example.file_name()?.to_str()?;
    let stem = name.strip_suffix(EXAMPLE_SUFFIX)?;
    if !stem.ends_with(".env") {
        return None;
    }
    Some(example.with_file_name(stem))
}

/// Create a `.env` next to every `.env.example` under `root`.
///
/// Existing destinations are kept unless `force` is set, in which case they
/// are deleted and re-created from the example.
pub fn init_env_files(root: &Path, force: bool, dry_run: bool) -> Result<InitReport> {
    let examples = find(root, INIT_PATTERN)?;
    let mut report = InitReport::default();

    for example in examples {
        if !example.is_file() {
            debug!("Not a regular file, ignoring {:?}", example);
            report.ignored.push(example);
            continue;
        }
        let Some(destination) = env_destination(&example) else {
            warn!("Cannot derive a destination for {:?}", example);
            report.ignored.push(example);
            continue;
        };

        let exists = destination.symlink_metadata().is_ok();
        if exists && !force {
            debug!("{:?} already exists, skipping", destination);
            report.skipped.push(destination);
            continue;
        }
        if dry_run {
            report.created.push((example, destination));
            continue;
        }

        match copy_example(&example, &destination, exists) {
            Ok(()) => {
                info!("Created {:?} from {:?}", destination, example);
                report.created.push((example, destination));
            }
            Err(e) => {
                warn!("Failed to create {:?}: {}", destination, e);
                report.failed.push((destination, e));
            }
        }
    }

    Ok(report)
}

fn copy_example(example: &Path, destination: &Path, replace: bool) -> Result<()> {
    if replace {
        std::fs::remove_file(destination).map_err(|e| EnvFilesError::from_io(destination, e))?;
    }
    std::fs::copy(example, destination).map_err(|e| EnvFilesError::from_io(example, e))?;
    Ok(())
}
