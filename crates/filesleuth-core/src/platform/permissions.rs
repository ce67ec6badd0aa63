/// Permission anomaly checks on Unix mode bits.
///
/// Each check is an independent test against the mode; a file can carry
/// any combination of tags. Works from the `stat` the scanner already did,
/// so no extra I/O happens here.
use crate::model::{Anomaly, AnomalySet};
use std::fs::Metadata;
use std::path::Path;

/// Others may write.
pub const MODE_WORLD_WRITABLE: u32 = 0o002;
/// Set-user-ID on execution.
pub const MODE_SETUID: u32 = 0o4000;
/// Set-group-ID on execution.
pub const MODE_SETGID: u32 = 0o2000;
/// Owner may execute.
pub const MODE_OWNER_EXEC: u32 = 0o100;

/// Extensions of plain data files that have no business being executable.
const DATA_ONLY_EXTENSIONS: &[&str] = &["txt", "log", "conf", "cfg", "ini"];

/// Inspect `mode` for risky permission bits.
///
/// `path` is only consulted for its extension, to spot data files with the
/// owner-execute bit set.
pub fn check_mode(mode: u32, path: &Path) -> AnomalySet {
    let mut anomalies = AnomalySet::new();

    if mode & MODE_WORLD_WRITABLE != 0 {
        anomalies.insert(Anomaly::WorldWritable);
    }
    if mode & MODE_SETUID != 0 {
        anomalies.insert(Anomaly::SetuidSet);
    }
    if mode & MODE_SETGID != 0 {
        anomalies.insert(Anomaly::SetgidSet);
    }
    if mode & MODE_OWNER_EXEC != 0 && is_data_only(path) {
        anomalies.insert(Anomaly::SuspiciousExecutable);
    }

    anomalies
}

/// Run [`check_mode`] on a file's metadata. Always empty on platforms
/// without Unix permission bits.
pub fn check_metadata(meta: &Metadata, path: &Path) -> AnomalySet {
    match mode_bits(meta) {
        Some(mode) => check_mode(mode, path),
        None => AnomalySet::new(),
    }
}

#[cfg(unix)]
fn mode_bits(meta: &Metadata) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;
    Some(meta.permissions().mode())
}

#[cfg(not(unix))]
fn mode_bits(_meta: &Metadata) -> Option<u32> {
    None
}

fn is_data_only(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            DATA_ONLY_EXTENSIONS
                .iter()
                .any(|d| d.eq_ignore_ascii_case(ext))
        })
}
