//! Human-readable rendering of durations, volumes and rates.

use std::fmt::Write as _;
use std::time::Duration;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

const KIB: f64 = 1024.0;
const MIB: f64 = KIB * 1024.0;
const GIB: f64 = MIB * 1024.0;

/// Formats `value` with at most three decimals, dropping trailing zeros.
///
/// ```
/// use cli::format::format_number;
///
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(1.23456), "1.235");
/// assert_eq!(format_number(7.0), "7");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    let mut text = format!("{value:.3}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}

/// Formats a duration as `[D d ][H h ][M m ]S s`.
///
/// Larger units appear only once the duration reaches them; once one unit is
/// printed every smaller one follows, so `3 h 0 m 1 s` keeps its minutes.
///
/// ```
/// use std::time::Duration;
/// use cli::format::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(4_500)), "4.5 s");
/// assert_eq!(format_duration(Duration::from_secs(3_725)), "1 h 2 m 5 s");
/// ```
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let mut remaining = duration.as_secs_f64();
    let mut text = String::new();

    for (unit, suffix) in [
        (SECONDS_PER_DAY, "d"),
        (SECONDS_PER_HOUR, "h"),
        (SECONDS_PER_MINUTE, "m"),
    ] {
        if remaining >= unit || !text.is_empty() {
            let whole = (remaining / unit).floor();
            remaining -= whole * unit;
            let _ = write!(text, "{whole} {suffix} ");
        }
    }

    let _ = write!(text, "{} s", format_number(remaining));
    text
}

/// Formats a byte count using binary units.
///
/// A unit is used only when the value strictly exceeds it, so exactly
/// 1024 bytes still reads `1024 B`.
///
/// ```
/// use cli::format::format_volume;
///
/// assert_eq!(format_volume(512.0), "512 B");
/// assert_eq!(format_volume(1536.0), "1.5 KiB");
/// ```
#[must_use]
pub fn format_volume(bytes: f64) -> String {
    if bytes > GIB {
        format!("{} GiB", format_number(bytes / GIB))
    } else if bytes > MIB {
        format!("{} MiB", format_number(bytes / MIB))
    } else if bytes > KIB {
        format!("{} KiB", format_number(bytes / KIB))
    } else {
        format!("{} B", format_number(bytes))
    }
}

/// Divides `amount` by the elapsed time, or returns `None` for an empty interval.
#[must_use]
pub fn rate(amount: f64, elapsed: Duration) -> Option<f64> {
    let seconds = elapsed.as_secs_f64();
    (seconds > 0.0).then(|| amount / seconds)
}
