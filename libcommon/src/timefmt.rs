use chrono::{DateTime, Local, Utc};
use serde::Deserialize;

/// Returned by [`offset_to_epoch_millis`] when the offset cannot be understood.
pub const INVALID_TIME: i64 = -1;

/// Layout of [`to_formatted_date`], e.g. `2024-05-01 13:37:00`
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timezone used to render a timestamp as a wall-clock date.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePolicy {
    #[default]
    Utc,
    Local,
}

/// Format a duration in milliseconds into a compact human-readable string,
/// such as `1h 20m 15s`. Hours are not folded into days.
///
/// Sub-second remainder is dropped. Zero components are skipped, except
/// that a duration under one second is rendered as `0s`.
/// # Example
/// ```
/// assert_eq!(libcommon::timefmt::strftime(4_815_000), "1h 20m 15s");
/// ```
pub fn strftime(millis: u64) -> String {
    let mut seconds = millis / 1000;
    let hours = seconds / 3600;
    seconds %= 3600;
    let minutes = seconds / 60;
    seconds %= 60;

    let mut out: Vec<String> = Vec::with_capacity(3);
    if hours > 0 {
        out.push(format!("{hours}h"));
    }
    if minutes > 0 {
        out.push(format!("{minutes}m"));
    }
    if seconds > 0 || out.is_empty() {
        out.push(format!("{seconds}s"));
    }

    out.join(" ")
}

/// Resolve a short relative offset like `10s`, `5m`, `2h` or `1d` against `now`
/// and return the resulting epoch milliseconds.
///
/// Unknown unit suffixes, unparsable amounts, empty input and arithmetic overflow
/// all yield [`INVALID_TIME`] instead of an error.
pub fn offset_to_epoch_millis(now: DateTime<Utc>, spec: &str) -> i64 {
    let spec = spec.trim();
    let Some(unit) = spec.chars().last() else {
        return INVALID_TIME;
    };

    let multiplier: i64 = match unit {
        's' => 1,
        'm' => 60,
        'h' => 3600,
        'd' => 86400,
        _ => {
            log::debug!("Unknown time unit '{unit}' in \"{spec}\"");
            return INVALID_TIME;
        }
    };

    let amount = match spec[..spec.len() - unit.len_utf8()].parse::<i64>() {
        Ok(amount) => amount,
        Err(err) => {
            log::debug!("Unable to parse time amount in \"{spec}\": {err}");
            return INVALID_TIME;
        }
    };

    amount
        .checked_mul(multiplier)
        .and_then(|s| s.checked_mul(1000))
        .and_then(|ms| ms.checked_add(now.timestamp_millis()))
        .unwrap_or(INVALID_TIME)
}

/// Render epoch milliseconds as [`DATE_FORMAT`] in the timezone chosen by `policy`.
/// Returns `None` if the timestamp is outside of the representable range.
pub fn to_formatted_date(millis: i64, policy: DatePolicy) -> Option<String> {
    let utc = DateTime::<Utc>::from_timestamp_millis(millis)?;
    Some(match policy {
        DatePolicy::Utc => utc.format(DATE_FORMAT).to_string(),
        DatePolicy::Local => utc.with_timezone(&Local).format(DATE_FORMAT).to_string(),
    })
}
