use crate::commands::{find, LIST_PATTERN};
use crate::inspect::{FileMetadataSnapshot, IdentityResolver, Inspector};
use crate::Result;
use dialoguer::console::style;
use std::path::Path;

/// Scan `root` for dot env entries and inspect each one.
///
/// Entries that disappear or become unreadable between the scan and the
/// inspection are skipped with a warning.
pub fn list_env_files<R: IdentityResolver>(
    root: &Path,
    inspector: &Inspector<R>,
) -> Result<Vec<FileMetadataSnapshot>> {
    let paths = find(root, LIST_PATTERN)?;
    let mut snapshots = Vec::with_capacity(paths.len());
    for path in paths {
        match inspector.inspect(&path) {
            Ok(snapshot) => snapshots.push(snapshot),
            Err(e) => tracing::warn!("Skipping {:?}: {}", path, e),
        }
    }
    Ok(snapshots)
}

/// One `ls -l` style line:
/// `<mode> <links>\t<owner>\t<group>\t<size>\t<date> <path>`.
///
/// With `styled`, directories are blue and executables green.
pub fn render_line(entry: &FileMetadataSnapshot, styled: bool) -> String {
    let path = entry.path.display().to_string();
    let path = if !styled {
        path
    } else if entry.is_dir {
        style(path).blue().bold().to_string()
    } else if entry.is_executable_file() {
        style(path).green().bold().to_string()
    } else {
        path
    };

    format!(
        "{} {}\t{}\t{}\t{}\t{} {}",
        entry.mode_string(),
        entry.links,
        entry.owner,
        entry.group,
        entry.size,
        entry.modified_display,
        path
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permissions::PermissionMode;
    use std::path::PathBuf;

    fn snapshot(path: &str, is_dir: bool, mode: u32) -> FileMetadataSnapshot {
        FileMetadataSnapshot {
            name: ".env".into(),
            path: PathBuf::from(path),
            is_dir,
            size: 42,
            modified: 0,
            modified_display: "Oct 01 12:30".into(),
            mode: PermissionMode::from(mode),
            inode: 1,
            device: 1,
            links: 1,
            uid: 1000,
            gid: 1000,
            owner: "dev".into(),
            group: "staff".into(),
        }
    }

    #[test]
    fn test_render_plain_line() {
        let line = render_line(&snapshot("./app/.env", false, 0o644), false);
        assert_eq!(line, "-rw-r--r-- 1\tdev\tstaff\t42\tOct 01 12:30 ./app/.env");
    }

    #[test]
    fn test_render_directory_line() {
        let line = render_line(&snapshot("./conf.env.d", true, 0o755), false);
        assert!(line.starts_with("drwxr-xr-x 1\t"));
        assert!(line.ends_with(" ./conf.env.d"));
    }

    #[test]
    fn test_styled_line_keeps_path() {
        let line = render_line(&snapshot("./run.env.sh", false, 0o755), true);
        assert!(line.contains("./run.env.sh"));
        assert!(line.starts_with("-rwxr-xr-x 1\t"));
    }
}
