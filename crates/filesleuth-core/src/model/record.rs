/// Per-file scan record and the permission anomaly tags attached to it.
use crate::analysis::{FileCategory, FileSignature};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;

/// A permission-bit pattern considered unusual or risky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anomaly {
    /// Anyone on the system may modify the file.
    WorldWritable,
    /// Executes with the owner's privileges.
    SetuidSet,
    /// Executes with the group's privileges.
    SetgidSet,
    /// Owner-executable file whose extension marks it as plain data
    /// (`.txt`, `.log`, `.conf`, `.cfg`, `.ini`).
    SuspiciousExecutable,
}

impl Anomaly {
    /// Every tag, in reporting order.
    pub const ALL: [Anomaly; 4] = [
        Anomaly::WorldWritable,
        Anomaly::SetuidSet,
        Anomaly::SetgidSet,
        Anomaly::SuspiciousExecutable,
    ];

    /// Tag as shown in reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::WorldWritable => "world-writable",
            Self::SetuidSet => "setuid-set",
            Self::SetgidSet => "setgid-set",
            Self::SuspiciousExecutable => "suspicious-executable",
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A set of zero or more [`Anomaly`] tags.
///
/// Stored as a one-byte bitmask; iteration always follows [`Anomaly::ALL`]
/// order regardless of insertion order.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AnomalySet(u8);

impl AnomalySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, anomaly: Anomaly) {
        self.0 |= anomaly.bit();
    }

    pub fn contains(self, anomaly: Anomaly) -> bool {
        self.0 & anomaly.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Anomaly> {
        Anomaly::ALL.into_iter().filter(move |a| self.contains(*a))
    }
}

impl FromIterator<Anomaly> for AnomalySet {
    fn from_iter<I: IntoIterator<Item = Anomaly>>(iter: I) -> Self {
        let mut set = Self::new();
        for anomaly in iter {
            set.insert(anomaly);
        }
        set
    }
}

impl fmt::Debug for AnomalySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for AnomalySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, anomaly) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(anomaly.label())?;
        }
        Ok(())
    }
}

impl Serialize for AnomalySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// How a file's category was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "by", content = "signature", rename_all = "kebab-case")]
pub enum ClassifiedBy {
    /// A magic-byte signature matched the file prefix.
    Signature(FileSignature),
    /// The file name's extension is in the extension table.
    Extension,
    /// Neither source was conclusive; the category is `Other`.
    Fallback,
}

impl fmt::Display for ClassifiedBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signature(sig) => f.write_str(sig.label()),
            Self::Extension => f.write_str("extension"),
            Self::Fallback => f.write_str("unrecognised"),
        }
    }
}

/// Everything the scanner learned about one regular file.
///
/// Built once per visited file and handed to the aggregator, which owns it
/// from then on.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Full path as produced by the traversal.
    pub path: PathBuf,
    /// Logical file size in bytes.
    pub size: u64,
    pub category: FileCategory,
    pub classified_by: ClassifiedBy,
    pub anomalies: AnomalySet,
    /// Last-modified timestamp, when the platform reports one.
    pub modified: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classified_by_display_names_the_signature() {
        assert_eq!(
            ClassifiedBy::Signature(FileSignature::Png).to_string(),
            "PNG image"
        );
        assert_eq!(ClassifiedBy::Extension.to_string(), "extension");
        assert_eq!(ClassifiedBy::Fallback.to_string(), "unrecognised");
    }

    #[test]
    fn classified_by_serialises_with_tag() {
        let json = serde_json::to_string(&ClassifiedBy::Signature(FileSignature::Png)).unwrap();
        assert_eq!(json, r#"{"by":"signature","signature":"png"}"#);
        let json = serde_json::to_string(&ClassifiedBy::Extension).unwrap();
        assert_eq!(json, r#"{"by":"extension"}"#);
    }

    #[test]
    fn empty_set_has_no_members() {
        let set = AnomalySet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.iter().count(), 0);
        assert_eq!(set.to_string(), "");
    }

    #[test]
    fn insert_is_idempotent() {
        let mut set = AnomalySet::new();
        set.insert(Anomaly::SetuidSet);
        set.insert(Anomaly::SetuidSet);
        assert_eq!(set.len(), 1);
        assert!(set.contains(Anomaly::SetuidSet));
        assert!(!set.contains(Anomaly::SetgidSet));
    }

    /// Iteration follows the fixed reporting order, not insertion order.
    #[test]
    fn iteration_order_is_stable() {
        let set: AnomalySet = [Anomaly::SetgidSet, Anomaly::WorldWritable]
            .into_iter()
            .collect();
        let tags: Vec<_> = set.iter().collect();
        assert_eq!(tags, vec![Anomaly::WorldWritable, Anomaly::SetgidSet]);
        assert_eq!(set.to_string(), "world-writable, setgid-set");
    }

    #[test]
    fn serializes_as_tag_list() {
        let set: AnomalySet = [Anomaly::SuspiciousExecutable, Anomaly::SetuidSet]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["setuid-set","suspicious-executable"]"#);
    }
}
