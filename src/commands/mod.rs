//! Dot env file operations built on the scanner and inspector.

use crate::scanner::{scan, ScanRequest};
use crate::Result;
use std::path::{Path, PathBuf};

pub mod init;
pub mod list;
pub mod remove;

pub use init::{env_destination, init_env_files, InitReport};
pub use list::{list_env_files, render_line};
pub use remove::{removable_files, remove_env_files, remove_paths, RemoveReport};

/// Anything with `.env` somewhere in its path.
pub const LIST_PATTERN: &str = r".*\.env.*";
/// Paths ending in `.env`.
pub const REMOVE_PATTERN: &str = r"\.env$";
/// Paths ending in `.env.example`.
pub const INIT_PATTERN: &str = r"\.env\.example$";

/// Recursive scan of `root` with `pattern`.
pub fn find(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    scan(&ScanRequest::new(root).pattern(pattern).recursive(true))
}
