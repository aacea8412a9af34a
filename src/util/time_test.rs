use super::*;

// 2017-03-15T13:45:30Z
const SAMPLE_MS: f64 = 1_489_585_530_000.0;

#[test]
fn format_clock_renders_time_of_day() {
    assert_eq!(format_clock(SAMPLE_MS), "13:45:30 pm");
}

#[test]
fn format_clock_morning_uses_am() {
    // 2017-03-15T05:45:30Z
    assert_eq!(format_clock(SAMPLE_MS - 8.0 * 3_600_000.0), "05:45:30 am");
}

#[test]
fn rfc3339_round_trips_millis() {
    let s = to_rfc3339(SAMPLE_MS);
    assert_eq!(from_rfc3339(&s), Some(SAMPLE_MS));
}

#[test]
fn from_rfc3339_rejects_garbage() {
    assert_eq!(from_rfc3339("not a timestamp"), None);
}

#[test]
fn from_rfc3339_accepts_offsets() {
    // Same instant as SAMPLE_MS, expressed with a +02:00 offset.
    assert_eq!(from_rfc3339("2017-03-15T15:45:30+02:00"), Some(SAMPLE_MS));
}
