use chrono::NaiveDate;

/// Format an ISO calendar date (`2026-02-14`) as `Feb 14, 2026`.
/// Anything that does not parse is returned unchanged.
pub fn format_display_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}
