use crate::scanner::{ScanRequest, Scanner};
use crate::{EnvFilesError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub struct LocalScanner;

impl LocalScanner {
    pub fn new() -> Self {
        Self
    }
}

impl Scanner for LocalScanner {
    fn scan(&self, request: &ScanRequest) -> Result<Vec<PathBuf>> {
        let root = &request.root;
        match std::fs::metadata(root) {
            Ok(meta) if meta.is_dir() => {}
            _ => return Err(EnvFilesError::NotFound(root.clone())),
        }

        let filter = request.pattern.as_deref().map(Regex::new).transpose()?;
        let accepts = |path: &Path| match &filter {
            Some(re) => re.is_match(&path.to_string_lossy()),
            None => true,
        };

        let mut paths = Vec::new();
        let mut pending = vec![root.clone()];
        while let Some(dir) = pending.pop() {
            let listing = match list_dir(&dir) {
                Ok(listing) => listing,
                Err(err) if dir == *root => return Err(walk_error(root, err)),
                Err(err) => {
                    tracing::warn!("Skipping unreadable directory {:?}: {}", dir, err);
                    continue;
                }
            };

            // A directory's own entries, subdirectories first, come before
            // anything nested below it.
            for path in listing.dirs.iter().chain(listing.files.iter()) {
                if accepts(path) {
                    paths.push(path.clone());
                }
            }

            if request.recursive {
                // Popped last-in first, so push in reverse name order.
                pending.extend(listing.descend.into_iter().rev());
            }
        }

        tracing::debug!("Scanned {:?}: {} matching entries", root, paths.len());
        Ok(paths)
    }
}

/// Immediate entries of one directory, each group sorted by name.
#[derive(Debug, Default)]
struct Listing {
    /// Directories, including symlinks pointing at one.
    dirs: Vec<PathBuf>,
    files: Vec<PathBuf>,
    /// Real directories to walk next. Symlinks are listed, never descended.
    descend: Vec<PathBuf>,
}

fn list_dir(dir: &Path) -> std::result::Result<Listing, walkdir::Error> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    let mut listing = Listing::default();
    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            // Depth 0 is `dir` itself: it could not be read at all.
            Err(err) if err.depth() == 0 => return Err(err),
            Err(err) => {
                // Entry removed mid-walk.
                tracing::warn!("Scan error: {}", err);
                continue;
            }
        };

        let file_type = entry.file_type();
        let path = entry.into_path();
        if file_type.is_dir() {
            listing.dirs.push(path.clone());
            listing.descend.push(path);
        } else if file_type.is_symlink() && path.is_dir() {
            listing.dirs.push(path);
        } else {
            listing.files.push(path);
        }
    }
    Ok(listing)
}

fn walk_error(root: &Path, err: walkdir::Error) -> EnvFilesError {
    match err.into_io_error() {
        Some(io) => EnvFilesError::from_io(root, io),
        None => EnvFilesError::NotFound(root.to_path_buf()),
    }
}
