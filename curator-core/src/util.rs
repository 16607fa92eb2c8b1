/// Format an optional byte count as a human-readable size.
///
/// Binary-prefixed at 1024 steps with two-decimal precision above 1 KB.
/// `None` renders as "N/A" and zero as "0", matching the report layout.
pub fn format_size(bytes: Option<u64>) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    let Some(bytes) = bytes else {
        return "N/A".to_string();
    };

    if bytes == 0 {
        "0".to_string()
    } else if bytes >= TB {
        format!("{:.2} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} bytes")
    }
}
