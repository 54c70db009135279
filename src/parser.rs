//! Relative-date label parsing.
//!
//! The upstream dashboard reports activity as free-text relative labels
//! ("7 days ago", "3 months ago", "2 hours ago") with `"-"` standing in for
//! "never". This module turns those labels into integer day counts. Month and
//! year are coarse approximations (30/365 days) — the downstream thresholds
//! were tuned against exactly these values, so calendar-exact math would
//! change behavior.

use std::sync::OnceLock;

use regex::Regex;

/// Approximate day lengths used by the upstream labels.
const DAYS_PER_MONTH: i64 = 30;
const DAYS_PER_YEAR: i64 = 365;

fn re_relative() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(\d+)\s*(day|month|year)s?(?:\s+ago)?").unwrap())
}

/// Parse a relative-date label into a days-ago count.
///
/// Returns `None` for the "never"/"unknown" sentinels (`None`, empty, `"-"`)
/// and for anything that does not match the `<n> <unit> [ago]` shape.
/// Sub-day labels ("minutes ago", "an hour ago") count as 0 days. Never
/// fails — unparseable input degrades to `None`.
pub fn parse_days_ago(label: Option<&str>) -> Option<i64> {
    let label = label?.trim();
    if label.is_empty() || label == "-" {
        return None;
    }

    let lower = label.to_lowercase();
    if lower.contains("minute") || lower.contains("hour") {
        return Some(0);
    }

    let caps = re_relative().captures(&lower)?;
    let value: i64 = caps[1].parse().ok()?;
    let days = match &caps[2] {
        "day" => value,
        "month" => value * DAYS_PER_MONTH,
        "year" => value * DAYS_PER_YEAR,
        _ => return None,
    };
    Some(days)
}
