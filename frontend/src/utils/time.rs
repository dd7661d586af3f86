use chrono::{Local, NaiveDate, NaiveTime};

use crate::api::parse_time_of_day;

/// The browser's local calendar date.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Renders a wire time as `09:30 AM`. Missing or unreadable values show `N/A`.
pub fn format_clock_time(raw: Option<&str>) -> String {
    raw.and_then(parse_time_of_day)
        .map(|time: NaiveTime| time.format("%I:%M %p").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}
