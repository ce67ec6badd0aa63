/// Size utilities — human-readable byte counts in both directions.
///
/// All internal sizes are `u64` bytes. Floating point is only used
/// at the display-formatting and threshold-parsing boundaries.
///
/// Both directions use binary units (K = 1024) so that a threshold typed
/// as `10M` and a file reported as `10.0 MB` refer to the same number.
use thiserror::Error;

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;
const TIB: u64 = GIB * 1024;

/// Unit suffixes accepted by [`parse_size`], longest first so that `KB`
/// is tried before `B`.
const UNIT_SUFFIXES: &[(&str, u64)] = &[
    ("TB", TIB),
    ("GB", GIB),
    ("MB", MIB),
    ("KB", KIB),
    ("T", TIB),
    ("G", GIB),
    ("M", MIB),
    ("K", KIB),
    ("B", 1),
];

/// A size string that could not be turned into a byte count.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSizeError {
    #[error("size threshold is empty")]
    Empty,
    #[error("invalid size format: '{0}' (use a form like 500K, 10M, 1.5G)")]
    InvalidFormat(String),
    #[error("size '{0}' does not fit in 64 bits")]
    Overflow(String),
}

/// Format a byte count into a human-readable string with appropriate unit.
///
/// Uses binary units (KiB = 1024) but labels them with common short forms
/// (KB, MB, GB, TB) because that is what users expect in a disk tool.
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = KIB as f64;
    const MB: f64 = MIB as f64;
    const GB: f64 = GIB as f64;
    const TB: f64 = TIB as f64;

    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < MB {
        format!("{:.1} KB", b / KB)
    } else if b < GB {
        format!("{:.1} MB", b / MB)
    } else if b < TB {
        format!("{:.2} GB", b / GB)
    } else {
        format!("{:.2} TB", b / TB)
    }
}

/// Format a file count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Parse a size string of the form `<number>[unit]` into bytes.
///
/// The unit is one of `B`, `K`/`KB`, `M`/`MB`, `G`/`GB`, `T`/`TB`
/// (case-insensitive); no unit means bytes. The number may carry a
/// fractional part (`1.5K` = 1536), which is truncated after scaling.
pub fn parse_size(input: &str) -> Result<u64, ParseSizeError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseSizeError::Empty);
    }
    let upper = trimmed.to_ascii_uppercase();

    let (number, multiplier) = UNIT_SUFFIXES
        .iter()
        .find_map(|&(suffix, mult)| upper.strip_suffix(suffix).map(|n| (n, mult)))
        .unwrap_or((upper.as_str(), 1));

    let number = number.trim_end();
    if !is_plain_decimal(number) {
        return Err(ParseSizeError::InvalidFormat(trimmed.to_string()));
    }

    // Integers take the exact path so large byte counts keep full precision.
    if let Ok(whole) = number.parse::<u64>() {
        return whole
            .checked_mul(multiplier)
            .ok_or_else(|| ParseSizeError::Overflow(trimmed.to_string()));
    }

    let value: f64 = number
        .parse()
        .map_err(|_| ParseSizeError::InvalidFormat(trimmed.to_string()))?;
    let bytes = value * multiplier as f64;
    if !bytes.is_finite() || bytes >= u64::MAX as f64 {
        return Err(ParseSizeError::Overflow(trimmed.to_string()));
    }
    Ok(bytes as u64)
}

/// `true` for `123`, `1.5`, `.5` and `2.`; rejects signs, exponents,
/// `inf`/`nan` and anything with more than one dot.
fn is_plain_decimal(s: &str) -> bool {
    let mut digits = 0usize;
    let mut dots = 0usize;
    for b in s.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}
