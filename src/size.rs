//! Human-readable size parsing and formatting
//!
//! Sizes use binary multiples throughout: `1k`, `1kb` and `1kib` all mean
//! 1024 bytes.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::SizeError;

static SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9]+(?:\.[0-9]+)?)\s*([a-zA-Z]*)\s*$").expect("size pattern is valid")
});

const DISPLAY_UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Multiplier for a lowercased unit suffix, or `None` if unrecognized.
fn unit_multiplier(unit: &str) -> Option<u64> {
    let exponent = match unit {
        "b" => 0,
        "k" | "kb" | "kib" => 1,
        "m" | "mb" | "mib" => 2,
        "g" | "gb" | "gib" => 3,
        "t" | "tb" | "tib" => 4,
        "p" | "pb" | "pib" => 5,
        _ => return None,
    };
    Some(1024u64.pow(exponent))
}

/// Parse a size like `5g`, `5GB`, `5GiB`, `500m`, `1.5 kb` or `123` into bytes.
///
/// Absent or blank input means "no constraint" and yields `Ok(None)`.
/// Fractional values are truncated toward zero after scaling; values past
/// `u64::MAX` saturate.
pub fn parse_size(input: Option<&str>) -> Result<Option<u64>, SizeError> {
    let Some(text) = input else {
        return Ok(None);
    };
    if text.trim().is_empty() {
        return Ok(None);
    }

    let caps = SIZE_RE
        .captures(text)
        .ok_or_else(|| SizeError::InvalidSizeFormat {
            input: text.to_string(),
        })?;
    let number = &caps[1];
    let unit = &caps[2];

    let multiplier = if unit.is_empty() {
        1
    } else {
        unit_multiplier(&unit.to_ascii_lowercase()).ok_or_else(|| SizeError::UnknownSizeUnit {
            unit: unit.to_string(),
        })?
    };

    // Whole numbers stay in integer arithmetic so large byte counts are exact.
    if let Ok(whole) = number.parse::<u64>() {
        return Ok(Some(whole.saturating_mul(multiplier)));
    }

    let value: f64 = number.parse().map_err(|_| SizeError::InvalidSizeFormat {
        input: text.to_string(),
    })?;
    Ok(Some((value * multiplier as f64) as u64))
}

/// Format a byte count for display: `0B`, `512B`, `1.5KB`, `3.0GB`.
///
/// Bytes render as an integer; every larger unit gets one decimal. PB is the
/// largest unit used.
pub fn human_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let last = DISPLAY_UNITS.len() - 1;
    for (i, unit) in DISPLAY_UNITS.iter().enumerate() {
        if value < 1024.0 || i == last {
            if i == 0 {
                return format!("{}{}", bytes, unit);
            }
            return format!("{:.1}{}", value, unit);
        }
        value /= 1024.0;
    }
    unreachable!("the last display unit always returns")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Option<u64>, SizeError> {
        parse_size(Some(s))
    }

    #[test]
    fn test_parse_size_absent_or_blank() {
        assert_eq!(parse_size(None), Ok(None));
        assert_eq!(parse(""), Ok(None));
        assert_eq!(parse("   "), Ok(None));
    }

    #[test]
    fn test_parse_size_raw_bytes() {
        assert_eq!(parse("123"), Ok(Some(123)));
        assert_eq!(parse("0"), Ok(Some(0)));
        // Fractional bytes truncate
        assert_eq!(parse("1.9"), Ok(Some(1)));
    }

    #[test]
    fn test_parse_size_unit_synonyms() {
        let five_gib = 5 * 1024 * 1024 * 1024;
        assert_eq!(parse("5g"), Ok(Some(five_gib)));
        assert_eq!(parse("5gb"), Ok(Some(five_gib)));
        assert_eq!(parse("5GiB"), Ok(Some(five_gib)));
        assert_eq!(parse("5G"), Ok(Some(five_gib)));

        assert_eq!(parse("1b"), Ok(Some(1)));
        assert_eq!(parse("100kb"), Ok(Some(102_400)));
        assert_eq!(parse("500M"), Ok(Some(500 * 1024 * 1024)));
        assert_eq!(parse("2t"), Ok(Some(2 * 1024u64.pow(4))));
        assert_eq!(parse("1PiB"), Ok(Some(1024u64.pow(5))));
    }

    #[test]
    fn test_parse_size_fractional() {
        assert_eq!(parse("1.5gb"), Ok(Some(1_610_612_736)));
        assert_eq!(parse("0.5k"), Ok(Some(512)));
        // 1.001 * 1024 = 1025.024, truncated
        assert_eq!(parse("1.001k"), Ok(Some(1025)));
    }

    #[test]
    fn test_parse_size_whitespace_tolerated() {
        assert_eq!(parse("  10 mb  "), Ok(Some(10 * 1024 * 1024)));
        assert_eq!(parse("\t7k\n"), Ok(Some(7 * 1024)));
    }

    #[test]
    fn test_parse_size_unknown_unit() {
        assert_eq!(
            parse("5xq"),
            Err(SizeError::UnknownSizeUnit {
                unit: "xq".to_string()
            })
        );
        assert!(matches!(parse("3 EB"), Err(SizeError::UnknownSizeUnit { .. })));
    }

    #[test]
    fn test_parse_size_invalid_format() {
        assert_eq!(
            parse("abc"),
            Err(SizeError::InvalidSizeFormat {
                input: "abc".to_string()
            })
        );
        assert!(matches!(parse("-5k"), Err(SizeError::InvalidSizeFormat { .. })));
        assert!(matches!(parse("1.k"), Err(SizeError::InvalidSizeFormat { .. })));
        assert!(matches!(parse("5 k b"), Err(SizeError::InvalidSizeFormat { .. })));
    }

    #[test]
    fn test_parse_size_saturates() {
        assert_eq!(parse("99999999999p"), Ok(Some(u64::MAX)));
    }

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(0), "0B");
        assert_eq!(human_size(1023), "1023B");
        assert_eq!(human_size(1024), "1.0KB");
        assert_eq!(human_size(1536), "1.5KB");
        assert_eq!(human_size(10 * 1024 * 1024), "10.0MB");
        assert_eq!(human_size(1_099_511_627_776), "1.0TB");
    }

    #[test]
    fn test_human_size_caps_at_pb() {
        assert_eq!(human_size(1024u64.pow(5)), "1.0PB");
        assert_eq!(human_size(2048 * 1024u64.pow(5)), "2048.0PB");
    }
}
