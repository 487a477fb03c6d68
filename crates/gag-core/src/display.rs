//! Human-facing number formatting for counters.

/// Abbreviate a counter the way the feed shows it: `1.5K`, `2.3M`, or the
/// plain number below one thousand.
pub fn format_count(n: i64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1478), "1.5K");
        assert_eq!(format_count(15234), "15.2K");
        assert_eq!(format_count(2_340_000), "2.3M");
        assert_eq!(format_count(-4), "-4");
    }
}
