use chrono::{DateTime, NaiveDate, NaiveTime};

const INVALID_DATE: &str = "Invalid Date";

/// Render a catalog date (`2020-01-15` or a full RFC 3339 stamp) as `January 15, 2020`
pub fn format_date(value: &str) -> String {
    let value = value.trim();
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()));

    match date {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Render a 24h `HH:MM` airtime as `8:30 PM`; empty for unparsable input
pub fn format_time(value: &str) -> String {
    let mut parts = value.trim().splitn(2, ':');
    let hours = parts.next().and_then(|h| h.parse::<u32>().ok());
    let minutes = parts.next().and_then(|m| m.parse::<u32>().ok());

    match (hours, minutes) {
        (Some(h), Some(m)) => NaiveTime::from_hms_opt(h, m, 0)
            .map(|t| t.format("%-I:%M %p").to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// `Monday, Wednesday at 8:00 PM`
pub fn format_schedule<S: AsRef<str>>(time: &str, days: &[S]) -> String {
    let time = format_time(time);
    let days = days.iter().map(|d| d.as_ref()).collect::<Vec<_>>().join(", ");

    format!("{} at {}", days, time).trim().to_string()
}
