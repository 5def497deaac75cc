use crate::permissions::PermissionMode;
use crate::{EnvFilesError, Result};
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::Serialize;
use std::fmt::Display;
use std::path::{Path, PathBuf};

pub mod identity;

pub use identity::{IdentityResolver, SystemIdentityResolver};

#[cfg(unix)]
use std::os::unix::fs::MetadataExt;

/// Entries older than this show the year instead of the time of day.
pub const RECENT_DAYS: i64 = 365;

const RECENT_FORMAT: &str = "%b %d %H:%M";
const OLD_FORMAT: &str = "%b %d %Y";

/// Point-in-time view of one path's metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileMetadataSnapshot {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    /// Size in bytes
    pub size: u64,
    /// Modification time (Unix timestamp, seconds)
    pub modified: i64,
    /// `ls -l` style date, see [`format_modified`]
    pub modified_display: String,
    pub mode: PermissionMode,
    pub inode: u64,
    pub device: u64,
    pub links: u64,
    pub uid: u32,
    pub gid: u32,
    pub owner: String,
    pub group: String,
}

impl FileMetadataSnapshot {
    /// Classic listing form, e.g. `drwxr-xr-x` or `-rw-r--r--`.
    pub fn mode_string(&self) -> String {
        let kind = if self.is_dir { 'd' } else { '-' };
        format!("{}{}", kind, self.mode)
    }

    pub fn is_executable_file(&self) -> bool {
        !self.is_dir && self.mode.any_executable()
    }
}

/// Reads metadata and resolves owner names through `R`.
#[derive(Debug, Default, Clone)]
pub struct Inspector<R = SystemIdentityResolver> {
    resolver: R,
}

impl Inspector<SystemIdentityResolver> {
    pub fn new() -> Self {
        Self { resolver: SystemIdentityResolver }
    }
}

impl<R: IdentityResolver> Inspector<R> {
    pub fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn inspect(&self, path: &Path) -> Result<FileMetadataSnapshot> {
        self.inspect_at(path, Local::now())
    }

    /// Inspect `path`, formatting its date relative to `now`.
    pub fn inspect_at(&self, path: &Path, now: DateTime<Local>) -> Result<FileMetadataSnapshot> {
        let metadata = std::fs::metadata(path).map_err(|e| EnvFilesError::from_io(path, e))?;
        let raw = RawStat::from_metadata(&metadata);

        let modified_at = DateTime::<Utc>::from_timestamp(raw.mtime, 0)
            .unwrap_or_default()
            .with_timezone(&Local);

        let owner = self.resolver.user_name(raw.uid).unwrap_or_else(|| {
            tracing::debug!("No user name for uid {}, using the id", raw.uid);
            raw.uid.to_string()
        });
        let group = self.resolver.group_name(raw.gid).unwrap_or_else(|| {
            tracing::debug!("No group name for gid {}, using the id", raw.gid);
            raw.gid.to_string()
        });

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        Ok(FileMetadataSnapshot {
            name,
            path: path.to_path_buf(),
            is_dir: metadata.is_dir(),
            size: metadata.len(),
            modified: raw.mtime,
            modified_display: format_modified(&modified_at, &now),
            mode: PermissionMode::from(raw.mode),
            inode: raw.inode,
            device: raw.device,
            links: raw.links,
            uid: raw.uid,
            gid: raw.gid,
            owner,
            group,
        })
    }
}

/// Inspect `path` using the host's user database.
pub fn inspect(path: &Path) -> Result<FileMetadataSnapshot> {
    Inspector::new().inspect(path)
}

/// `Oct 01 12:30` when `modified` is less than 365 days before `now`,
/// `Oct 01 2023` otherwise.
pub fn format_modified<Tz>(modified: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let age = now.clone().signed_duration_since(modified.clone());
    if age < chrono::Duration::days(RECENT_DAYS) {
        modified.format(RECENT_FORMAT).to_string()
    } else {
        modified.format(OLD_FORMAT).to_string()
    }
}

struct RawStat {
    mtime: i64,
    mode: u32,
    inode: u64,
    device: u64,
    links: u64,
    uid: u32,
    gid: u32,
}

impl RawStat {
    #[cfg(unix)]
    fn from_metadata(metadata: &std::fs::Metadata) -> Self {
        Self {
            mtime: metadata.mtime(),
            mode: metadata.mode(),
            inode: metadata.ino(),
            device: metadata.dev(),
            links: metadata.nlink(),
            uid: metadata.uid(),
            gid: metadata.gid(),
        }
    }

    #[cfg(not(unix))]
    fn from_metadata(metadata: &std::fs::Metadata) -> Self {
        let mtime = metadata
            .modified()
            .ok()
            .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);

        // Synthesize mode for non-unix
        let mode = if metadata.permissions().readonly() {
            0o444
        } else if metadata.is_dir() {
            0o755
        } else {
            0o644
        };
        Self { mtime, mode, inode: 0, device: 0, links: 1, uid: 0, gid: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    struct FixedNames;

    impl IdentityResolver for FixedNames {
        fn user_name(&self, _uid: u32) -> Option<String> {
            Some("alice".into())
        }
        fn group_name(&self, _gid: u32) -> Option<String> {
            None
        }
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 17, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_recent_date_shows_time() {
        let now = noon();
        let modified = now - Duration::days(10);
        assert_eq!(format_modified(&modified, &now), "Oct 07 12:30");
    }

    #[test]
    fn test_old_date_shows_year() {
        let now = noon();
        let modified = Utc.with_ymd_and_hms(2022, 3, 5, 8, 0, 0).unwrap();
        assert_eq!(format_modified(&modified, &now), "Mar 05 2022");
    }

    #[test]
    fn test_365_day_boundary() {
        let now = noon();
        let exactly = now - Duration::days(365);
        assert_eq!(format_modified(&exactly, &now), "Oct 18 2023");

        let just_under = exactly + Duration::seconds(1);
        assert_eq!(format_modified(&just_under, &now), "Oct 18 12:30");
    }

    #[test]
    fn test_future_date_shows_time() {
        let now = noon();
        let modified = now + Duration::days(400);
        assert_eq!(format_modified(&modified, &now), "Nov 21 12:30");
    }

    #[test]
    fn test_inspect_missing_path() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("gone.env");

        let err = inspect(&missing).unwrap_err();
        assert!(matches!(err, EnvFilesError::NotFound(p) if p == missing));
    }

    #[cfg(unix)]
    #[test]
    fn test_inspect_file() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(".env");
        std::fs::write(&path, b"A=1\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        let snap = Inspector::with_resolver(FixedNames).inspect(&path).unwrap();
        assert_eq!(snap.name, ".env");
        assert_eq!(snap.path, path);
        assert!(!snap.is_dir);
        assert_eq!(snap.size, 4);
        assert_eq!(snap.mode.to_string(), "rw-r--r--");
        assert_eq!(snap.mode_string(), "-rw-r--r--");
        assert_eq!(snap.links, 1);
        assert_eq!(snap.owner, "alice");
        // Unresolved group falls back to the numeric id.
        assert_eq!(snap.group, snap.gid.to_string());
        assert!(!snap.is_executable_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_inspect_directory() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("conf.env.d");
        std::fs::create_dir(&dir).unwrap();
        std::fs::set_permissions(&dir, std::fs::Permissions::from_mode(0o755)).unwrap();

        let snap = Inspector::with_resolver(FixedNames).inspect(&dir).unwrap();
        assert!(snap.is_dir);
        assert_eq!(snap.mode_string(), "drwxr-xr-x");
        assert!(!snap.is_executable_file());
    }
}
