/// File type categorisation based on file extensions.
///
/// Groups files into a closed set of categories (Text, Image, Executable,
/// Archive, Document, Video, Audio, Config, Other) and defines the
/// per-category size/count totals the aggregator maintains.
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Broad file type categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Text,
    Image,
    Executable,
    Archive,
    Document,
    Video,
    Audio,
    Config,
    Other,
}

impl FileCategory {
    /// Every category, in declaration order. Reports list all of them,
    /// including the empty ones.
    pub const ALL: [FileCategory; 9] = [
        FileCategory::Text,
        FileCategory::Image,
        FileCategory::Executable,
        FileCategory::Archive,
        FileCategory::Document,
        FileCategory::Video,
        FileCategory::Audio,
        FileCategory::Config,
        FileCategory::Other,
    ];

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Image => "Image",
            Self::Executable => "Executable",
            Self::Archive => "Archive",
            Self::Document => "Document",
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::Config => "Config",
            Self::Other => "Other",
        }
    }

    /// Position of this category in [`FileCategory::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Size and count totals for a single file category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub category: FileCategory,
    pub total_size: u64,
    pub file_count: u64,
}

impl CategoryStats {
    pub fn new(category: FileCategory) -> Self {
        Self {
            category,
            total_size: 0,
            file_count: 0,
        }
    }

    /// Fold one file of `size` bytes into the running totals.
    #[inline]
    pub fn record(&mut self, size: u64) {
        self.file_count += 1;
        self.total_size = self.total_size.saturating_add(size);
    }
}

/// Categorise a file extension (without the leading dot).
///
/// Zero-heap-allocation hot path: extensions are lowercased into a fixed-size
/// stack buffer (`[u8; 16]`) rather than allocating a `String`.  File
/// extensions longer than 16 bytes are treated as `Other`.
pub fn categorise_extension(ext: &str) -> FileCategory {
    let bytes = ext.as_bytes();
    if bytes.len() > 16 {
        return FileCategory::Other;
    }

    let mut lower = [0u8; 16];
    for (dest, &src) in lower.iter_mut().zip(bytes.iter()) {
        *dest = src.to_ascii_lowercase();
    }
    let lower_str = match std::str::from_utf8(&lower[..bytes.len()]) {
        Ok(s) => s,
        Err(_) => return FileCategory::Other,
    };

    match lower_str {
        // Text and source code
        "txt" | "md" | "rst" | "log" | "csv" | "tsv" | "json" | "xml" | "html" | "htm"
        | "css" | "js" | "ts" | "py" | "rs" | "c" | "h" | "cpp" | "hpp" | "go" | "java"
        | "rb" | "php" | "sql" => FileCategory::Text,
        // Images
        "jpg" | "jpeg" | "png" | "gif" | "bmp" | "svg" | "ico" | "webp" | "tif" | "tiff"
        | "heic" | "psd" => FileCategory::Image,
        // Executables and scripts
        "exe" | "bin" | "sh" | "bat" | "cmd" | "com" | "msi" | "dll" | "so" | "dylib"
        | "ps1" | "app" => FileCategory::Executable,
        // Archives
        "zip" | "tar" | "gz" | "tgz" | "rar" | "7z" | "bz2" | "xz" | "zst" | "iso"
        | "dmg" => FileCategory::Archive,
        // Documents
        "pdf" | "doc" | "docx" | "xls" | "xlsx" | "ppt" | "pptx" | "odt" | "ods" | "rtf"
        | "epub" => FileCategory::Document,
        // Video
        "mp4" | "avi" | "mkv" | "mov" | "wmv" | "flv" | "webm" | "m4v" | "mpg" | "mpeg" => {
            FileCategory::Video
        }
        // Audio
        "mp3" | "wav" | "flac" | "aac" | "ogg" | "wma" | "m4a" | "opus" => FileCategory::Audio,
        // Configuration
        "conf" | "cfg" | "ini" | "yaml" | "yml" | "toml" | "env" | "properties" => {
            FileCategory::Config
        }
        _ => FileCategory::Other,
    }
}

/// Categorise a file by the final extension of its name.
///
/// `archive.tar.gz` is judged by `gz`; names without an extension
/// (including dot-files such as `.bashrc`) are `Other`.
pub fn categorise_path(path: &Path) -> FileCategory {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(categorise_extension)
        .unwrap_or(FileCategory::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── categorise_extension ─────────────────────────────────────────────

    #[test]
    fn categorise_known_image_extensions() {
        for ext in &["jpg", "jpeg", "png", "gif", "bmp", "webp", "tiff", "heic"] {
            assert_eq!(
                categorise_extension(ext),
                FileCategory::Image,
                "expected Image for .{ext}"
            );
        }
    }

    #[test]
    fn categorise_known_text_extensions() {
        for ext in &["txt", "md", "py", "js", "json", "csv", "log", "rs"] {
            assert_eq!(
                categorise_extension(ext),
                FileCategory::Text,
                "expected Text for .{ext}"
            );
        }
    }

    #[test]
    fn categorise_known_archive_extensions() {
        for ext in &["zip", "rar", "7z", "tar", "gz", "xz"] {
            assert_eq!(
                categorise_extension(ext),
                FileCategory::Archive,
                "expected Archive for .{ext}"
            );
        }
    }

    #[test]
    fn categorise_remaining_categories() {
        assert_eq!(categorise_extension("sh"), FileCategory::Executable);
        assert_eq!(categorise_extension("exe"), FileCategory::Executable);
        assert_eq!(categorise_extension("pdf"), FileCategory::Document);
        assert_eq!(categorise_extension("mp4"), FileCategory::Video);
        assert_eq!(categorise_extension("mp3"), FileCategory::Audio);
        assert_eq!(categorise_extension("ini"), FileCategory::Config);
        assert_eq!(categorise_extension("toml"), FileCategory::Config);
    }

    #[test]
    fn categorise_unknown_extension_returns_other() {
        assert_eq!(categorise_extension("xyz"), FileCategory::Other);
        assert_eq!(categorise_extension(""), FileCategory::Other);
        assert_eq!(
            categorise_extension("averyveryverylongextension"),
            FileCategory::Other
        );
    }

    /// Extension matching must be case-insensitive so "JPG" == "jpg".
    #[test]
    fn categorise_case_insensitive() {
        assert_eq!(categorise_extension("JPG"), FileCategory::Image);
        assert_eq!(categorise_extension("Txt"), FileCategory::Text);
        assert_eq!(categorise_extension("ZIP"), FileCategory::Archive);
    }

    // ── categorise_path ──────────────────────────────────────────────────

    #[test]
    fn path_uses_final_suffix() {
        assert_eq!(categorise_path(Path::new("a/b/notes.TXT")), FileCategory::Text);
        assert_eq!(
            categorise_path(Path::new("backup.tar.gz")),
            FileCategory::Archive
        );
        assert_eq!(categorise_path(Path::new("report.pdf.exe")), FileCategory::Executable);
    }

    #[test]
    fn path_without_extension_is_other() {
        assert_eq!(categorise_path(Path::new("Makefile")), FileCategory::Other);
        assert_eq!(categorise_path(Path::new(".bashrc")), FileCategory::Other);
        assert_eq!(categorise_path(Path::new("trailing.")), FileCategory::Other);
    }

    // ── CategoryStats ────────────────────────────────────────────────────

    #[test]
    fn index_matches_position_in_all() {
        for (i, cat) in FileCategory::ALL.iter().enumerate() {
            assert_eq!(cat.index(), i);
        }
    }

    #[test]
    fn stats_accumulate() {
        let mut stats = CategoryStats::new(FileCategory::Image);
        stats.record(100);
        stats.record(250);
        assert_eq!(stats.file_count, 2);
        assert_eq!(stats.total_size, 350);
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&FileCategory::Executable).unwrap();
        assert_eq!(json, "\"executable\"");
    }
}
