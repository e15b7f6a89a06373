//! Human-readable byte sizes.

/// Formats a byte count on a 1024 ladder with two decimals.
///
/// # Example
/// ```
/// use spanner::readable_size;
///
/// assert_eq!(readable_size(0), "0 Bytes");
/// assert_eq!(readable_size(1536), "1.50KB");
/// ```
pub fn readable_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 9] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
    let value = bytes as f64;
    let index = ((value.ln() / 1024f64.ln()).floor() as usize).min(UNITS.len() - 1);
    let size = value / 1024f64.powi(index as i32);
    format!("{size:.2}{}", UNITS[index])
}
