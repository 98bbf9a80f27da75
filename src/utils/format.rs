//! Pure display/formatting helpers

/// Format a view count the way the video card displays it
///
/// `1_500` becomes "1.5K", `2_500_000` becomes "2.5M", `3_200_000_000`
/// becomes "3.2B". Values below a thousand render as plain integers and a
/// missing count renders as "0". Rounding is half-up to one decimal.
pub fn format_view_count(count: Option<u64>) -> String {
    let Some(n) = count else {
        return "0".to_string();
    };

    if n >= 1_000_000_000 {
        format!("{:.1}B", round_one_decimal(n as f64 / 1_000_000_000.0))
    } else if n >= 1_000_000 {
        format!("{:.1}M", round_one_decimal(n as f64 / 1_000_000.0))
    } else if n >= 1_000 {
        format!("{:.1}K", round_one_decimal(n as f64 / 1_000.0))
    } else {
        n.to_string()
    }
}

// f64::round is half-away-from-zero, which is half-up for the non-negative
// values a view count can take.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Sanitize a video title for use as a filename stem
///
/// Replaces path separators and characters that are reserved on common
/// filesystems, strips control characters, and trims the leading/trailing
/// dots and spaces Windows rejects. A result that is empty or carries no
/// character beyond the replacements falls back to "video" so the caller
/// always gets a usable stem.
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect();

    let trimmed = cleaned.trim_matches(|c| c == '.' || c == ' ');

    if trimmed.chars().all(|c| c == '_') {
        "video".to_string()
    } else {
        trimmed.to_string()
    }
}
