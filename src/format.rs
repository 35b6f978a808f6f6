// src/format.rs
// =============================================================================
// Small helpers that turn raw numbers and timestamps into display text.
//
// - format_file_size: 110592 -> "108 KB"
// - format_relative:  a timestamp -> "3 days ago"
// - paginate:         one page of a list plus the page count
// =============================================================================

use chrono::{DateTime, Utc};

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Formats a byte count with binary (1024) units, two decimals at most.
///
/// Note: GitHub reports repository sizes in KB, multiply by 1024 first.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[unit])
}

/// Describes how long ago `then` was, relative to `now`.
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let seconds = elapsed.num_seconds();

    if seconds < 45 {
        return "less than a minute ago".to_string();
    }

    let minutes = (seconds as f64 / 60.0).round() as i64;
    if minutes < 45 {
        return plural(minutes.max(1), "minute", "");
    }

    let hours = (seconds as f64 / 3600.0).round() as i64;
    if hours < 24 {
        return plural(hours, "hour", "about ");
    }

    let days = elapsed.num_days();
    if days < 30 {
        return plural(days.max(1), "day", "");
    }
    if days < 365 {
        return plural(days / 30, "month", "");
    }
    plural(days / 365, "year", "about ")
}

fn plural(count: i64, unit: &str, prefix: &str) -> String {
    if count == 1 {
        format!("{}1 {} ago", prefix, unit)
    } else {
        format!("{}{} {}s ago", prefix, count, unit)
    }
}

/// Returns page `page` (1-based) of `items` and the total number of pages.
///
/// Pages past the end are empty; a `per_page` of 0 is treated as 1.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> (&[T], usize) {
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page);

    let start = page.saturating_sub(1).saturating_mul(per_page);
    if start >= items.len() {
        return (&[], total_pages);
    }
    let end = (start + per_page).min(items.len());
    (&items[start..end], total_pages)
}
