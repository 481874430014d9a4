use chrono::{NaiveDateTime, NaiveTime, Timelike};
use unicode_width::UnicodeWidthStr;

/// Rendered in place of any timetable value that is not a real time.
pub const TIME_PLACEHOLDER: &str = "--:--";

/// Render a raw timetable value for display. Absent, empty, and
/// already-placeholder values all collapse to "--:--"; anything else passes
/// through untouched.
pub fn display_value(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.is_empty() && s != TIME_PLACEHOLDER => s.to_string(),
        _ => TIME_PLACEHOLDER.to_string(),
    }
}

/// "HH:MM" (24-hour) to minutes since midnight. Empty, placeholder, and
/// malformed strings read as no time at all.
pub fn minutes_of_day(s: &str) -> Option<u32> {
    if s.is_empty() || s == TIME_PLACEHOLDER {
        return None;
    }
    let t = NaiveTime::parse_from_str(s, "%H:%M").ok()?;
    Some(t.hour() * 60 + t.minute())
}

/// 12-hour clock with seconds, e.g. "01:05:09 PM".
pub fn clock_line(now: NaiveDateTime) -> String {
    now.format("%I:%M:%S %p").to_string()
}

/// Abbreviated date, e.g. "Wed, Aug 06, 2026".
pub fn date_line(now: NaiveDateTime) -> String {
    now.format("%a, %b %d, %Y").to_string()
}

/// Format whole minutes as "Xh Ym" or "Ym".
pub fn format_duration_mins(mins: u32) -> String {
    if mins == 0 {
        return "now".to_string();
    }
    let hours = mins / 60;
    let minutes = mins % 60;
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Pad with trailing spaces to `width` terminal columns. Width is measured
/// in display columns, not bytes, so non-ASCII labels line up.
pub fn pad_columns(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_display_value_passes_real_times_through() {
        assert_eq!(display_value(Some("05:25")), "05:25");
        assert_eq!(display_value(Some("19:33")), "19:33");
    }

    #[test]
    fn test_display_value_collapses_missing_to_placeholder() {
        assert_eq!(display_value(None), "--:--");
        assert_eq!(display_value(Some("")), "--:--");
        assert_eq!(display_value(Some("--:--")), "--:--");
    }

    #[test]
    fn test_minutes_of_day() {
        assert_eq!(minutes_of_day("00:00"), Some(0));
        assert_eq!(minutes_of_day("05:25"), Some(325));
        assert_eq!(minutes_of_day("23:59"), Some(1439));
        assert_eq!(minutes_of_day(""), None);
        assert_eq!(minutes_of_day("--:--"), None);
        assert_eq!(minutes_of_day("25:00"), None);
        assert_eq!(minutes_of_day("noon"), None);
    }

    #[test]
    fn test_clock_and_date_lines() {
        let at = NaiveDate::from_ymd_opt(2026, 8, 6)
            .unwrap()
            .and_hms_opt(13, 5, 9)
            .unwrap();
        assert_eq!(clock_line(at), "01:05:09 PM");
        assert_eq!(date_line(at), "Thu, Aug 06, 2026");
    }

    #[test]
    fn test_format_duration_mins() {
        assert_eq!(format_duration_mins(0), "now");
        assert_eq!(format_duration_mins(45), "45m");
        assert_eq!(format_duration_mins(83), "1h 23m");
    }

    #[test]
    fn test_pad_columns() {
        assert_eq!(pad_columns("Awwal", 8), "Awwal   ");
        assert_eq!(pad_columns("Khatm-e-Sehri", 8), "Khatm-e-Sehri");
    }
}
