//! Human-readable byte sizes.

const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB", "PB", "EB"];
const DIVISOR: f64 = 1024.0;

/// Format a byte count with the largest unit that keeps the value at or above 1.
///
/// Always uses `.` as the decimal separator. Zero and negative counts stay in bytes.
pub fn format_size(bytes: i64, precision: usize) -> String {
    let mut value = bytes as f64;
    let mut unit_index = 0;

    while value >= DIVISOR && unit_index < UNITS.len() - 1 {
        value /= DIVISOR;
        unit_index += 1;
    }

    format!("{value:.precision$} {}", UNITS[unit_index])
}

/// Format a `min`/`max` pair: a single size when equal, otherwise `"<min>-<max>"`.
pub fn format_size_range(min: i64, max: i64, precision: usize) -> String {
    if min == max {
        format_size(max, precision)
    } else {
        format!(
            "{}-{}",
            format_size(min, precision),
            format_size(max, precision)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_megabyte() {
        assert_eq!(format_size(1_048_576, 2), "1.00 MB");
    }

    #[test]
    fn test_zero_uses_base_unit() {
        assert_eq!(format_size(0, 2), "0.00 B");
    }

    #[test]
    fn test_negative_uses_base_unit() {
        assert_eq!(format_size(-512, 1), "-512.0 B");
    }

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(format_size(1023, 2), "1023.00 B");
        assert_eq!(format_size(1024, 2), "1.00 KB");
        assert_eq!(format_size(1_572_864, 3), "1.500 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024, 0), "3 GB");
        assert_eq!(format_size(5 * 1024_i64.pow(4), 2), "5.00 TB");
    }

    #[test]
    fn test_largest_unit_caps_at_exabytes() {
        assert!(format_size(i64::MAX, 2).ends_with(" EB"));
    }

    #[test]
    fn test_range_equal_bounds() {
        assert_eq!(format_size_range(1_048_576, 1_048_576, 2), "1.00 MB");
    }

    #[test]
    fn test_range_distinct_bounds() {
        assert_eq!(
            format_size_range(1_048_576, 2_097_152, 2),
            "1.00 MB-2.00 MB"
        );
    }
}
