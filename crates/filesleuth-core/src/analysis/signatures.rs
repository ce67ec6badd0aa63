/// Magic-byte signature detection.
///
/// Identifies a file's real format from the first [`SIGNATURE_PREFIX_LEN`]
/// bytes, independent of its name. The table is scanned in order and the
/// first entry whose patterns all match wins, so entries that refine a
/// shorter pattern (`RIFF....WAVE` vs bare `RIFF`) are listed first and the
/// two-byte patterns (`BM`, `MZ`) come last.
use super::file_types::FileCategory;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Number of leading bytes read for detection. Covers every table entry
/// and gives the plain-text heuristic a reasonable sample.
pub const SIGNATURE_PREFIX_LEN: usize = 32;

/// Share of printable bytes (in percent) above which an unmatched prefix
/// is considered plain text.
const PLAIN_TEXT_PERCENT: usize = 85;

/// A file format recognised from its leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileSignature {
    Jpeg,
    Png,
    Gif,
    Bmp,
    Ico,
    Zip,
    Gzip,
    Bzip2,
    Pdf,
    OleCompound,
    PeExecutable,
    Elf,
    MachO,
    Mp3,
    Ogg,
    Flac,
    Wav,
    Avi,
    Riff,
    Mp4,
    QuickTime,
    M4a,
    UnicodeBom,
    PlainText,
}

impl FileSignature {
    /// Short human-readable format name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Jpeg => "JPEG image",
            Self::Png => "PNG image",
            Self::Gif => "GIF image",
            Self::Bmp => "BMP image",
            Self::Ico => "ICO icon",
            Self::Zip => "ZIP archive",
            Self::Gzip => "gzip archive",
            Self::Bzip2 => "bzip2 archive",
            Self::Pdf => "PDF document",
            Self::OleCompound => "MS Office document",
            Self::PeExecutable => "PE/DOS executable",
            Self::Elf => "ELF executable",
            Self::MachO => "Mach-O executable",
            Self::Mp3 => "MP3 audio",
            Self::Ogg => "Ogg audio",
            Self::Flac => "FLAC audio",
            Self::Wav => "WAV audio",
            Self::Avi => "AVI video",
            Self::Riff => "RIFF container",
            Self::Mp4 => "MP4 video",
            Self::QuickTime => "QuickTime video",
            Self::M4a => "MPEG-4 audio",
            Self::UnicodeBom => "Unicode text",
            Self::PlainText => "plain text",
        }
    }

    /// `false` for the text matches (byte-order mark, printable-byte
    /// heuristic): they say "text" but cannot tell a config file or a
    /// script from prose, so a known extension outranks them.
    pub fn is_conclusive(self) -> bool {
        !matches!(self, Self::UnicodeBom | Self::PlainText)
    }

    /// Category this format belongs to.
    pub fn category(self) -> FileCategory {
        match self {
            Self::Jpeg | Self::Png | Self::Gif | Self::Bmp | Self::Ico => FileCategory::Image,
            Self::Zip | Self::Gzip | Self::Bzip2 => FileCategory::Archive,
            Self::Pdf | Self::OleCompound => FileCategory::Document,
            Self::PeExecutable | Self::Elf | Self::MachO => FileCategory::Executable,
            Self::Mp3 | Self::Ogg | Self::Flac | Self::Wav | Self::Riff | Self::M4a => {
                FileCategory::Audio
            }
            Self::Avi | Self::Mp4 | Self::QuickTime => FileCategory::Video,
            Self::UnicodeBom | Self::PlainText => FileCategory::Text,
        }
    }
}

/// A byte pattern expected at a fixed offset.
#[derive(Clone, Copy)]
struct Pattern {
    offset: usize,
    bytes: &'static [u8],
}

impl Pattern {
    #[inline]
    fn matches(self, prefix: &[u8]) -> bool {
        prefix.get(self.offset..self.offset + self.bytes.len()) == Some(self.bytes)
    }
}

/// One table entry: a leading pattern plus an optional refinement.
struct Magic {
    head: Pattern,
    tail: Option<Pattern>,
    signature: FileSignature,
}

impl Magic {
    fn matches(&self, prefix: &[u8]) -> bool {
        self.head.matches(prefix) && self.tail.is_none_or(|t| t.matches(prefix))
    }
}

const fn at(offset: usize, bytes: &'static [u8]) -> Pattern {
    Pattern { offset, bytes }
}

const fn magic(bytes: &'static [u8], signature: FileSignature) -> Magic {
    Magic {
        head: at(0, bytes),
        tail: None,
        signature,
    }
}

const fn magic2(head: Pattern, tail: Pattern, signature: FileSignature) -> Magic {
    Magic {
        head,
        tail: Some(tail),
        signature,
    }
}

/// Ordered signature table. First match wins.
const SIGNATURES: &[Magic] = &[
    // Images
    magic(b"\xFF\xD8\xFF", FileSignature::Jpeg),
    magic(b"\x89PNG\r\n\x1a\n", FileSignature::Png),
    magic(b"GIF87a", FileSignature::Gif),
    magic(b"GIF89a", FileSignature::Gif),
    magic(b"\x00\x00\x01\x00", FileSignature::Ico),
    // Byte-order marks
    magic(b"\xEF\xBB\xBF", FileSignature::UnicodeBom),
    magic(b"\xFF\xFE", FileSignature::UnicodeBom),
    magic(b"\xFE\xFF", FileSignature::UnicodeBom),
    // Archives
    magic(b"PK\x03\x04", FileSignature::Zip),
    magic(b"PK\x05\x06", FileSignature::Zip),
    magic(b"PK\x07\x08", FileSignature::Zip),
    magic(b"\x1f\x8b", FileSignature::Gzip),
    magic(b"BZh", FileSignature::Bzip2),
    // Documents
    magic(b"%PDF", FileSignature::Pdf),
    magic(b"\xD0\xCF\x11\xE0\xA1\xB1\x1A\xE1", FileSignature::OleCompound),
    // Executables
    magic(b"\x7fELF", FileSignature::Elf),
    magic(b"\xFE\xED\xFA\xCE", FileSignature::MachO),
    magic(b"\xFE\xED\xFA\xCF", FileSignature::MachO),
    magic(b"\xCA\xFE\xBA\xBE", FileSignature::MachO),
    magic(b"\xCE\xFA\xED\xFE", FileSignature::MachO),
    magic(b"\xCF\xFA\xED\xFE", FileSignature::MachO),
    // RIFF containers: the form type at offset 8 decides.
    magic2(at(0, b"RIFF"), at(8, b"WAVE"), FileSignature::Wav),
    magic2(at(0, b"RIFF"), at(8, b"AVI "), FileSignature::Avi),
    magic(b"RIFF", FileSignature::Riff),
    // Audio
    magic(b"ID3", FileSignature::Mp3),
    magic(b"\xFF\xFB", FileSignature::Mp3),
    magic(b"OggS", FileSignature::Ogg),
    magic(b"fLaC", FileSignature::Flac),
    // ISO base media: `ftyp` box at offset 4, major brand at offset 8.
    magic2(at(4, b"ftyp"), at(8, b"mp41"), FileSignature::Mp4),
    magic2(at(4, b"ftyp"), at(8, b"mp42"), FileSignature::Mp4),
    magic2(at(4, b"ftyp"), at(8, b"isom"), FileSignature::Mp4),
    magic2(at(4, b"ftyp"), at(8, b"f4v "), FileSignature::Mp4),
    magic2(at(4, b"ftyp"), at(8, b"F4V "), FileSignature::Mp4),
    magic2(at(4, b"ftyp"), at(8, b"M4V "), FileSignature::Mp4),
    magic2(at(4, b"ftyp"), at(8, b"qt  "), FileSignature::QuickTime),
    magic2(at(4, b"ftyp"), at(8, b"M4A "), FileSignature::M4a),
    // Two-byte patterns last.
    magic(b"BM", FileSignature::Bmp),
    magic(b"MZ", FileSignature::PeExecutable),
];

/// Detect a file format from its leading bytes.
///
/// Returns `None` for an empty prefix or when neither the signature table
/// nor the plain-text heuristic matches.
pub fn detect_signature(prefix: &[u8]) -> Option<FileSignature> {
    if prefix.is_empty() {
        return None;
    }
    if let Some(entry) = SIGNATURES.iter().find(|m| m.matches(prefix)) {
        return Some(entry.signature);
    }
    looks_like_text(prefix).then_some(FileSignature::PlainText)
}

/// Read at most [`SIGNATURE_PREFIX_LEN`] bytes from the start of `path`.
pub fn read_prefix(path: &Path) -> io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut buf = Vec::with_capacity(SIGNATURE_PREFIX_LEN);
    file.take(SIGNATURE_PREFIX_LEN as u64).read_to_end(&mut buf)?;
    Ok(buf)
}

/// Read the prefix of `path` and detect its format.
///
/// Any I/O failure (permission denied, broken symlink, file removed) is
/// treated as "no match".
pub fn sniff_file(path: &Path) -> Option<FileSignature> {
    read_prefix(path)
        .ok()
        .and_then(|prefix| detect_signature(&prefix))
}

/// More than [`PLAIN_TEXT_PERCENT`] of the bytes are printable ASCII or
/// tab / LF / CR.
fn looks_like_text(data: &[u8]) -> bool {
    let printable = data
        .iter()
        .filter(|&&b| matches!(b, 0x20..=0x7E | b'\t' | b'\n' | b'\r'))
        .count();
    printable * 100 > data.len() * PLAIN_TEXT_PERCENT
}
