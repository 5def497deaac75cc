//! Owner and group name lookup.
//!
//! Name resolution depends on the host's user database, which is often
//! incomplete inside containers. Callers fall back to the numeric id when a
//! resolver returns `None`.

/// Resolve numeric owner ids to names.
pub trait IdentityResolver {
    fn user_name(&self, uid: u32) -> Option<String>;
    fn group_name(&self, gid: u32) -> Option<String>;
}

/// Looks names up in the host's user and group databases.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemIdentityResolver;

impl IdentityResolver for SystemIdentityResolver {
    fn user_name(&self, uid: u32) -> Option<String> {
        sys::user_name(uid)
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        sys::group_name(gid)
    }
}

#[cfg(unix)]
mod sys {
    pub fn user_name(uid: u32) -> Option<String> {
        uzers::get_user_by_uid(uid).map(|user| user.name().to_string_lossy().into_owned())
    }

    pub fn group_name(gid: u32) -> Option<String> {
        uzers::get_group_by_gid(gid).map(|group| group.name().to_string_lossy().into_owned())
    }
}

#[cfg(not(unix))]
mod sys {
    pub fn user_name(_uid: u32) -> Option<String> {
        None
    }

    pub fn group_name(_gid: u32) -> Option<String> {
        None
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_root_resolves() {
        // uid/gid 0 exist on every unix host, containers included.
        let resolver = SystemIdentityResolver;
        assert!(resolver.user_name(0).is_some());
        assert!(resolver.group_name(0).is_some());
    }

    #[test]
    fn test_current_user_matches_process() {
        let resolver = SystemIdentityResolver;
        let expected = uzers::get_current_username().map(|n| n.to_string_lossy().into_owned());
        assert_eq!(resolver.user_name(uzers::get_current_uid()), expected);
    }

    #[test]
    fn test_unknown_id_is_none() {
        let resolver = SystemIdentityResolver;
        assert_eq!(resolver.user_name(4_000_000_000), None);
        assert_eq!(resolver.group_name(4_000_000_000), None);
    }
}
