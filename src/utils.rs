use chrono::{DateTime, Duration, FixedOffset, Utc};

use crate::track::Waypoint;

// Stand-in for a missing timestamp. Nothing is ever within `gap` of it, so a
// point without a time always starts a new segment.
lazy_static! {
    pub static ref FAR_FUTURE: DateTime<FixedOffset> = DateTime::<Utc>::MAX_UTC.fixed_offset();
}

pub fn effective_time(waypoint: &Waypoint) -> DateTime<FixedOffset> {
    waypoint.time().unwrap_or(*FAR_FUTURE)
}

/// `time + gap`, clamped to `FAR_FUTURE` instead of overflowing.
pub fn saturating_add(time: DateTime<FixedOffset>, gap: Duration) -> DateTime<FixedOffset> {
    time.checked_add_signed(gap).unwrap_or(*FAR_FUTURE)
}

/// ISO-8601 duration with hours as the largest unit, e.g. `PT1H2M3.5S`.
pub fn format_iso_duration(duration: Duration) -> String {
    let millis = duration.num_milliseconds();
    let sign = if millis < 0 { "-" } else { "" };
    let millis = millis.unsigned_abs();

    let hours = millis / 3_600_000;
    let minutes = millis % 3_600_000 / 60_000;
    let seconds = millis % 60_000 / 1000;
    let fraction = millis % 1000;

    let mut out = format!("{sign}PT");
    if hours > 0 {
        out.push_str(&format!("{hours}H"));
    }
    if minutes > 0 {
        out.push_str(&format!("{minutes}M"));
    }
    if fraction > 0 {
        let fraction = format!("{fraction:03}");
        out.push_str(&format!("{seconds}.{}S", fraction.trim_end_matches('0')));
    } else if seconds > 0 || (hours == 0 && minutes == 0) {
        out.push_str(&format!("{seconds}S"));
    }
    out
}
