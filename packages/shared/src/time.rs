use chrono::{DateTime, Local, TimeZone};

/// Current wall-clock time in the local timezone
pub fn now_local() -> DateTime<Local> {
    Local::now()
}

/// Format a timestamp as `HH:MM:SS` for transcript lines
pub fn format_clock<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%H:%M:%S").to_string()
}
