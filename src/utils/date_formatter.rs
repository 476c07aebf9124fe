use chrono::{DateTime, TimeZone, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmartDateFormat {
    Year,       // 2024
    MonthYear,  // Jan 2024
    DayMonth,   // 12 Jan
    HourMin,    // 10:30
    HourMinSec, // 10:30:15
    Full,       // 2024-01-12 10:30:15.250Z
}

/// Picks the coarsest format that still tells ticks `visible_range_sec` apart.
pub fn determine_date_format(visible_range_sec: f64) -> SmartDateFormat {
    const MINUTE: f64 = 60.0;
    const HOUR: f64 = 3600.0;
    const DAY: f64 = 24.0 * HOUR;
    const MONTH: f64 = 30.0 * DAY;
    const YEAR: f64 = 365.0 * DAY;

    if !visible_range_sec.is_finite() || visible_range_sec <= 0.0 {
        SmartDateFormat::Full
    } else if visible_range_sec > YEAR * 2.0 {
        SmartDateFormat::Year
    } else if visible_range_sec > MONTH * 2.0 {
        SmartDateFormat::MonthYear
    } else if visible_range_sec > DAY * 1.5 {
        SmartDateFormat::DayMonth
    } else if visible_range_sec > MINUTE * 5.0 {
        SmartDateFormat::HourMin
    } else if visible_range_sec > 1.0 {
        SmartDateFormat::HourMinSec
    } else {
        SmartDateFormat::Full
    }
}

fn utc_from_millis(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() {
        return None;
    }
    match Utc.timestamp_millis_opt(millis.round() as i64) {
        chrono::LocalResult::Single(d) => Some(d),
        chrono::LocalResult::Ambiguous(d, _) => Some(d),
        chrono::LocalResult::None => None,
    }
}

/// Formats a UTC timestamp given in epoch milliseconds.
pub fn format_timestamp_millis(millis: f64, format: SmartDateFormat) -> String {
    let Some(dt) = utc_from_millis(millis) else {
        return format!("{:.2}", millis);
    };

    match format {
        SmartDateFormat::Year => dt.format("%Y").to_string(),
        SmartDateFormat::MonthYear => dt.format("%b %Y").to_string(),
        SmartDateFormat::DayMonth => dt.format("%d %b").to_string(),
        SmartDateFormat::HourMin => dt.format("%H:%M").to_string(),
        SmartDateFormat::HourMinSec => dt.format("%H:%M:%S").to_string(),
        SmartDateFormat::Full => dt.format("%Y-%m-%d %H:%M:%S%.3fZ").to_string(),
    }
}
