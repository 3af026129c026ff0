//! Human-readable size parsing (e.g., "5MB", "512KB").

use thiserror::Error;

const KB: usize = 1024;
const MB: usize = 1024 * KB;
const GB: usize = 1024 * MB;

/// Error parsing a size string.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid size '{input}' - expected format like '5MB', '512KB', or '1048576'")]
pub struct SizeParseError {
    input: String,
}

/// Parse a human-readable size string into bytes.
///
/// Accepts bare byte counts and `K`/`KB`, `M`/`MB`, `G`/`GB` suffixes
/// (binary multiples), case-insensitive, with optional inner whitespace.
///
/// ```
/// use mosaic::config::parse_size;
///
/// assert_eq!(parse_size("2048").unwrap(), 2048);
/// assert_eq!(parse_size("5MB").unwrap(), 5 * 1024 * 1024);
/// assert_eq!(parse_size("64 kb").unwrap(), 64 * 1024);
/// ```
pub fn parse_size(s: &str) -> Result<usize, SizeParseError> {
    let invalid = || SizeParseError {
        input: s.to_string(),
    };

    let trimmed = s.trim();
    let upper = trimmed.to_ascii_uppercase();
    let digits_end = upper
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(upper.len());
    let (number, suffix) = upper.split_at(digits_end);

    let multiplier = match suffix.trim() {
        "" => 1,
        "K" | "KB" => KB,
        "M" | "MB" => MB,
        "G" | "GB" => GB,
        _ => return Err(invalid()),
    };

    let number: usize = number.parse().map_err(|_| invalid())?;
    number.checked_mul(multiplier).ok_or_else(invalid)
}

/// Format a byte count using the largest unit that divides it evenly.
///
/// ```
/// use mosaic::config::format_size;
///
/// assert_eq!(format_size(5 * 1024 * 1024), "5MB");
/// assert_eq!(format_size(1536), "1536");
/// ```
pub fn format_size(bytes: usize) -> String {
    match bytes {
        0 => "0".to_string(),
        b if b % GB == 0 => format!("{}GB", b / GB),
        b if b % MB == 0 => format!("{}MB", b / MB),
        b if b % KB == 0 => format!("{}KB", b / KB),
        b => b.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_suffixes() {
        assert_eq!(parse_size("1K").unwrap(), 1024);
        assert_eq!(parse_size("1kb").unwrap(), 1024);
        assert_eq!(parse_size("5MB").unwrap(), 5 * 1024 * 1024);
        assert_eq!(parse_size("50m").unwrap(), 50 * 1024 * 1024);
        assert_eq!(parse_size("1G").unwrap(), 1024 * 1024 * 1024);
    }

    #[test]
    fn test_parse_whitespace() {
        assert_eq!(parse_size("  5MB  ").unwrap(), 5 * 1024 * 1024);
        assert_eq!(parse_size("512 KB").unwrap(), 512 * 1024);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_size("").is_err());
        assert!(parse_size("MB").is_err());
        assert!(parse_size("five").is_err());
        assert!(parse_size("-1MB").is_err());
        assert!(parse_size("1.5MB").is_err());
        assert!(parse_size("2TB").is_err());
    }

    #[test]
    fn test_parse_overflow() {
        assert!(parse_size(&format!("{}GB", usize::MAX)).is_err());
    }

    #[test]
    fn test_error_names_input() {
        let err = parse_size("lots").unwrap_err();
        assert!(err.to_string().contains("'lots'"));
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0");
        assert_eq!(format_size(1000), "1000");
        assert_eq!(format_size(1024), "1KB");
        assert_eq!(format_size(50 * 1024 * 1024), "50MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3GB");
    }
}
