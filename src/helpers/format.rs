//! Number and reading-time helpers

/// Compact count for display: 892, 15.7K, 1.5M
pub fn format_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Reading time in whole minutes, never less than one
pub fn estimate_read_time(content: &str, words_per_minute: u32) -> u32 {
    let words = content.split_whitespace().count() as u64;
    let wpm = u64::from(words_per_minute.max(1));
    let minutes = words.div_ceil(wpm).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(892), "892");
        assert_eq!(format_number(1_000), "1.0K");
        assert_eq!(format_number(15_680), "15.7K");
        assert_eq!(format_number(1_500_000), "1.5M");
    }

    #[test]
    fn test_estimate_read_time() {
        assert_eq!(estimate_read_time("", 200), 1);
        assert_eq!(estimate_read_time("one two three", 200), 1);
        assert_eq!(estimate_read_time(&"word ".repeat(200), 200), 1);
        assert_eq!(estimate_read_time(&"word ".repeat(201), 200), 2);
        assert_eq!(estimate_read_time(&"word\n".repeat(10), 0), 10);
    }
}
