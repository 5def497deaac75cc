use crate::{EnvFilesError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// POSIX permission bits (owner, group, other), without file type or
/// setuid/setgid/sticky bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PermissionMode(u16);

impl PermissionMode {
    pub const MASK: u32 = 0o777;

    /// Parse a mode written as octal digits, e.g. `"644"` or `"0755"`.
    pub fn parse(text: &str) -> Result<Self> {
        let digits = text.trim();
        if digits.is_empty() || digits.len() > 4 {
            return Err(EnvFilesError::InvalidMode(text.to_string()));
        }
        let value = u32::from_str_radix(digits, 8)
            .map_err(|_| EnvFilesError::InvalidMode(text.to_string()))?;
        if value > Self::MASK {
            return Err(EnvFilesError::InvalidMode(text.to_string()));
        }
        Ok(Self(value as u16))
    }

    pub fn bits(&self) -> u32 {
        u32::from(self.0)
    }

    pub fn any_executable(&self) -> bool {
        self.0 & 0o111 != 0
    }
}

impl From<u32> for PermissionMode {
    /// Keep only the permission bits of a raw `st_mode`.
    fn from(mode: u32) -> Self {
        Self((mode & Self::MASK) as u16)
    }
}

impl FromStr for PermissionMode {
    type Err = EnvFilesError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PermissionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&permissions_to_string(*self))
    }
}

/// Render a mode as `rwxr-xr-x`, owner group first, others last.
pub fn permissions_to_string(mode: PermissionMode) -> String {
    let mut out = String::with_capacity(9);
    for shift in [6u32, 3, 0] {
        let set = (mode.bits() >> shift) & 0o7;
        out.push(if set & 0o4 != 0 { 'r' } else { '-' });
        out.push(if set & 0o2 != 0 { 'w' } else { '-' });
        out.push(if set & 0o1 != 0 { 'x' } else { '-' });
    }
    out
}
