//! Shared formatting helpers for report output.
//!
//! All pure formatting functions (no I/O, no provider access) live here.

/// Unit prefixes selected by repeated division by 1024. Values that are
/// still at or above 1024 after the last division stay in the `P` range.
const UNITS: [&str; 5] = ["", "K", "M", "G", "T"];

/// Format byte count as human-readable size with a custom suffix.
///
/// Divides by 1024 until the magnitude drops below 1024, picking the
/// matching prefix from `""`, `K`, `M`, `G`, `T`, `P` and rendering two
/// decimal digits: `format_size_with_suffix(1536, "B")` is `"1.50KB"`.
pub fn format_size_with_suffix(bytes: u64, suffix: &str) -> String {
    let mut value = bytes as f64;
    for unit in UNITS {
        if value < 1024.0 {
            return format!("{value:.2}{unit}{suffix}");
        }
        value /= 1024.0;
    }
    format!("{value:.2}P{suffix}")
}

/// Format byte count as human-readable size: `"2.00GB"`, `"1.50KB"`.
pub fn format_size(bytes: u64) -> String {
    format_size_with_suffix(bytes, "B")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_values() {
        assert_eq!(format_size(0), "0.00B");
        assert_eq!(format_size(1023), "1023.00B");
        assert_eq!(format_size(1024), "1.00KB");
        assert_eq!(format_size(1536), "1.50KB");
        assert_eq!(format_size(2_147_483_648), "2.00GB");
        assert_eq!(format_size(1_099_511_627_776), "1.00TB");
        assert_eq!(format_size(1_125_899_906_842_624), "1.00PB");
    }

    #[test]
    fn custom_suffix() {
        assert_eq!(format_size_with_suffix(1024, "iB"), "1.00KiB");
        assert_eq!(format_size_with_suffix(0, ""), "0.00");
    }

    #[test]
    fn suffix_and_magnitude_in_range() {
        // Longest first so "KB" is not mistaken for a bare "B".
        let suffixes = ["PB", "TB", "GB", "MB", "KB", "B"];
        for bytes in [
            0,
            1,
            999,
            1024,
            1025,
            1024 * 1024 - 1,
            7 * 1024 * 1024,
            u32::MAX as u64,
            1 << 50,
            u64::MAX,
        ] {
            let text = format_size(bytes);
            let suffix = suffixes
                .iter()
                .find(|s| text.ends_with(*s))
                .unwrap_or_else(|| panic!("unexpected suffix in {text:?}"));
            let magnitude: f64 = text[..text.len() - suffix.len()].parse().unwrap();
            if *suffix != "PB" {
                assert!(magnitude < 1024.0, "{text:?} out of range");
            }
            assert!(magnitude >= 0.0);
        }
    }

    #[test]
    fn beyond_petabyte_stays_in_petabytes() {
        // 1024^6 bytes still renders with the P prefix.
        assert_eq!(format_size(1_152_921_504_606_846_976), "1024.00PB");
        assert!(format_size(u64::MAX).ends_with("PB"));
    }
}
