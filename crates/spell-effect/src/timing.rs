use regex::Regex;
use std::sync::LazyLock;

use crate::model::{DurationUnit, SpellDuration, Timing};

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:up to\s+)?([0-9]+)\s+(round|minute|hour|day)").expect("duration regex")
});

/// Timing from the concentration flag and the lower-cased duration text
pub fn determine_timing(concentration: bool, duration: &str) -> Timing {
    if concentration {
        Timing::Concentration
    } else if duration != "instantaneous" {
        Timing::Duration
    } else {
        Timing::Instant
    }
}

/// Parse lower-cased duration text such as "up to 1 minute" or "until dispelled"
pub fn parse_duration(duration: &str) -> Option<SpellDuration> {
    if duration.contains("instantaneous") {
        return None;
    }

    let counted = DURATION_RE.captures(duration).and_then(|caps| {
        let value = caps[1].parse::<u32>().ok()?;
        let unit = DurationUnit::from_word(&caps[2])?;
        Some(SpellDuration { value, unit })
    });
    if counted.is_some() {
        return counted;
    }

    if duration.contains("permanent") || duration.contains("until dispelled") {
        return Some(SpellDuration::PERMANENT);
    }

    None
}
