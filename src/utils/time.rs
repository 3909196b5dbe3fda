use chrono::NaiveTime;

/// Parse a `HH:MM:SS` clock timestamp. Returns `None` for strings that match
/// the timestamp shape but are not a valid time of day (e.g. hour 77).
pub fn parse_clock(timestamp: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(timestamp, "%H:%M:%S").ok()
}

/// Signed whole seconds from `start` to `end`. Negative when the log runs
/// backwards (e.g. across midnight); callers clamp as needed.
pub fn seconds_between(start: NaiveTime, end: NaiveTime) -> f64 {
    end.signed_duration_since(start).num_seconds() as f64
}

pub fn format_duration(seconds: f64) -> String {
    let seconds = seconds.max(0.0) as u64;
    if seconds >= 60 {
        format!("{}m{}s", seconds / 60, seconds % 60)
    } else {
        format!("{}s", seconds)
    }
}
