//! Clock helpers: current instant and time-of-day display formatting.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use chrono::{DateTime, SecondsFormat, Utc};

/// Current instant as epoch milliseconds.
///
/// Uses the browser clock in the CSR build and the system clock otherwise
/// (native unit tests).
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        #[allow(clippy::cast_precision_loss)]
        {
            Utc::now().timestamp_millis() as f64
        }
    }
}

/// Format epoch milliseconds as a time-of-day stamp, e.g. `14:03:22 pm`.
///
/// Out-of-range timestamps render as an empty string rather than panicking.
pub fn format_clock(ms: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let ms = ms as i64;
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|dt| dt.format("%H:%M:%S %P").to_string())
        .unwrap_or_default()
}

/// Format epoch milliseconds as an RFC 3339 timestamp for the wire.
pub fn to_rfc3339(ms: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let ms = ms as i64;
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default()
}

/// Parse an RFC 3339 timestamp into epoch milliseconds.
pub fn from_rfc3339(s: &str) -> Option<f64> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| {
            #[allow(clippy::cast_precision_loss)]
            {
                dt.timestamp_millis() as f64
            }
        })
}
