/// Format size in human-readable format
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KiB", "MiB", "GiB", "TiB"];
    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit_idx])
    }
}

/// Format a file count, abbreviating thousands and millions
pub fn format_file_count(count: u64) -> String {
    match count {
        1 => "1 file".to_string(),
        0..1_000 => format!("{count} files"),
        1_000..1_000_000 => format!("{:.1}K files", count as f64 / 1_000.0),
        _ => format!("{:.1}M files", count as f64 / 1_000_000.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(100), "100 B");
        assert_eq!(format_size(1024), "1.0 KiB");
        assert_eq!(format_size(1536), "1.5 KiB");
        assert_eq!(format_size(1024 * 1024), "1.0 MiB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1.0 GiB");
        assert_eq!(format_size(1024_u64.pow(4)), "1.0 TiB");
        assert_eq!(format_size(1024_u64.pow(5)), "1024.0 TiB");
    }

    #[test]
    fn test_format_file_count() {
        assert_eq!(format_file_count(0), "0 files");
        assert_eq!(format_file_count(1), "1 file");
        assert_eq!(format_file_count(999), "999 files");
        assert_eq!(format_file_count(1_000), "1.0K files");
        assert_eq!(format_file_count(12_345), "12.3K files");
        assert_eq!(format_file_count(2_500_000), "2.5M files");
    }
}
