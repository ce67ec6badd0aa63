/// Recoverable problems met during a scan.
///
/// None of these stop the traversal: the affected file or subtree is
/// skipped (or classified without its signature) and the scan goes on.
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningKind {
    /// A directory could not be listed; its subtree was not visited.
    DirectorySkipped,
    /// A file could not be stat'ed (permission denied, removed mid-scan).
    FileSkipped,
    /// The file was counted but its leading bytes could not be read, so
    /// only the extension was used.
    SignatureUnreadable,
    /// A followed symlink pointed back at one of its ancestors.
    SymlinkLoop,
}

impl WarningKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::DirectorySkipped => "directory-skipped",
            Self::FileSkipped => "file-skipped",
            Self::SignatureUnreadable => "signature-unreadable",
            Self::SymlinkLoop => "symlink-loop",
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A non-fatal error tied to one path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanWarning {
    pub path: PathBuf,
    pub kind: WarningKind,
    pub message: String,
}

impl ScanWarning {
    pub fn new(path: impl Into<PathBuf>, kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            message: message.into(),
        }
    }
}
