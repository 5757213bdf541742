//! Display formatting for counts, dates and durations.

use time::OffsetDateTime;

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Compact count: `950`, `12.3K`, `4.5M`, `1.2B`. Values that round to a
/// thousand of one unit are shown in the next one (`999_950` is `1.0M`).
#[must_use]
pub fn format_count(n: u64) -> String {
    const UNITS: [(u64, &str); 3] = [(1_000, "K"), (1_000_000, "M"), (1_000_000_000, "B")];
    let Some(mut unit) = UNITS.iter().rposition(|(scale, _)| n >= *scale) else {
        return n.to_string();
    };
    let mut tenths = rounded_tenths(n, UNITS[unit].0);
    if tenths >= 10_000 && unit + 1 < UNITS.len() {
        unit += 1;
        tenths = rounded_tenths(n, UNITS[unit].0);
    }
    format!("{}.{}{}", tenths / 10, tenths % 10, UNITS[unit].1)
}

/// `n / scale` in tenths, rounded half up.
fn rounded_tenths(n: u64, scale: u64) -> u128 {
    let scale = u128::from(scale);
    (u128::from(n) * 10 + scale / 2) / scale
}

/// Calendar date (`YYYY-MM-DD`, UTC) of a millisecond timestamp.
#[must_use]
pub fn format_date(ms: i64) -> String {
    let nanos = i128::from(ms) * 1_000_000;
    match OffsetDateTime::from_unix_timestamp_nanos(nanos) {
        Ok(at) => {
            let date = at.date();
            format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
        }
        Err(_) => "—".to_owned(),
    }
}

/// Age of `ms` relative to `now_ms`; dates older than 30 days print as dates.
#[must_use]
pub fn format_relative(ms: i64, now_ms: i64) -> String {
    let age = now_ms.saturating_sub(ms);
    if age < MINUTE_MS {
        "just now".to_owned()
    } else if age < HOUR_MS {
        format!("{}m ago", age / MINUTE_MS)
    } else if age < DAY_MS {
        format!("{}h ago", age / HOUR_MS)
    } else if age <= 30 * DAY_MS {
        format!("{}d ago", age / DAY_MS)
    } else {
        format_date(ms)
    }
}

/// `850ms`, `12.4s`, `3m 05s`. Rounding never prints `60.0s`.
#[must_use]
pub fn format_duration_ms(ms: u64) -> String {
    if ms < 1_000 {
        return format!("{ms}ms");
    }
    let tenths = rounded_tenths(ms, 1_000);
    if tenths < 600 {
        format!("{}.{}s", tenths / 10, tenths % 10)
    } else {
        let secs = ms.saturating_add(500) / 1_000;
        format!("{}m {:02}s", secs / 60, secs % 60)
    }
}
