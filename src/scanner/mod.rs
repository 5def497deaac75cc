use std::path::PathBuf;
use crate::Result;

pub mod local;

pub use local::LocalScanner;

/// What to scan and how.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Directory to walk. Must exist and be a directory.
    pub root: PathBuf,
    /// Regex searched (not full-matched) against each entry's full path.
    pub pattern: Option<String>,
    /// Descend into every subdirectory instead of listing only `root`.
    pub recursive: bool,
}

impl ScanRequest {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            pattern: None,
            recursive: true,
        }
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}

/// Scanner trait
pub trait Scanner {
    /// Return the paths under `request.root` accepted by the request's filter.
    ///
    /// Paths are `root` joined with the entry's relative path, sorted by file
    /// name within each directory, each directory before its contents.
    fn scan(&self, request: &ScanRequest) -> Result<Vec<PathBuf>>;
}

/// Scan the local filesystem.
pub fn scan(request: &ScanRequest) -> Result<Vec<PathBuf>> {
    LocalScanner::new().scan(request)
}
