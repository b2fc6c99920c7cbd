//! Detection of elevated privileges
//!
//! Running as superuser only produces a warning; nothing else changes.

use std::env;

/// User id of the superuser on Unix
#[cfg(unix)]
const SUPERUSER_ID: u32 = 0;

/// Whether the process runs with superuser privileges
///
/// On Unix this means running through `sudo` with an effective uid of 0. On
/// Windows, only administrators can list the system temp directory.
#[cfg(unix)]
pub fn is_superuser() -> bool {
    use std::os::unix::fs::MetadataExt;

    let uid = std::fs::metadata("/proc/self").map(|m| m.uid()).ok();
    let user = env::var("USER").or_else(|_| env::var("LOGNAME")).ok();

    elevated(env::var_os("SUDO_USER").is_some(), uid, user.as_deref())
}

#[cfg(windows)]
pub fn is_superuser() -> bool {
    let system_root = env::var("SystemRoot").unwrap_or_else(|_| "C:\\windows".to_string());
    std::fs::read_dir(std::path::Path::new(&system_root).join("temp")).is_ok()
}

#[cfg(not(any(unix, windows)))]
pub fn is_superuser() -> bool {
    false
}

/// Without a readable uid, the login name decides
#[cfg(unix)]
fn elevated(under_sudo: bool, uid: Option<u32>, user: Option<&str>) -> bool {
    if !under_sudo {
        return false;
    }
    match uid {
        Some(uid) => uid == SUPERUSER_ID,
        None => user == Some("root"),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_elevated() {
        assert!(elevated(true, Some(0), Some("alice")));
        assert!(elevated(true, None, Some("root")));
        assert!(!elevated(true, Some(1000), Some("root")));
        assert!(!elevated(false, Some(0), Some("root")));
        assert!(!elevated(true, None, None));
    }
}
