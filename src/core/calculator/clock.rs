//! 12-hour clock parsing for duty-status times ("7:30 a.m.", "12:15 P.M.").

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

static CLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2}):(\d{2})\s*(a\.m\.|p\.m\.)").expect("clock pattern is valid")
});

/// A wall-clock time of day with no date attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    minutes: u32,
}

impl ClockTime {
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self { minutes })
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.minutes
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h24 = self.minutes / 60;
        let m = self.minutes % 60;
        let meridiem = if h24 < 12 { "a.m." } else { "p.m." };
        let h12 = match h24 % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{}:{:02} {}", h12, m, meridiem)
    }
}

/// Parse `H:MM a.m.` / `HH:MM p.m.` (case-insensitive, periods required).
///
/// Only the start of the string has to match; anything after the meridiem
/// is ignored. Hours outside 1..=12 or minutes above 59 are rejected.
pub fn parse_time(text: &str) -> Option<ClockTime> {
    let lower = text.to_lowercase();
    let caps = CLOCK_RE.captures(&lower)?;

    let hours: u32 = caps[1].parse().ok()?;
    let minutes: u32 = caps[2].parse().ok()?;

    if !(1..=12).contains(&hours) || minutes > 59 {
        return None;
    }

    let h24 = match (&caps[3], hours) {
        ("a.m.", 12) => 0,
        ("a.m.", h) => h,
        ("p.m.", 12) => 12,
        (_, h) => h + 12,
    };

    ClockTime::from_minutes(h24 * 60 + minutes)
}

/// Minutes since midnight, reading anything unparseable as midnight.
///
/// This is the engine's view of a time: it never fails. Callers that care
/// about malformed input must check with [`parse_time`] first.
pub fn minutes_or_midnight(text: &str) -> u32 {
    parse_time(text)
        .map(|t| t.minutes_since_midnight())
        .unwrap_or(0)
}

/// Minutes from `start` to `end`, assuming `end` is on the next day when it
/// reads earlier than `start`.
pub fn minutes_between(start: u32, end: u32) -> u32 {
    if end < start {
        end + MINUTES_PER_DAY - start
    } else {
        end - start
    }
}
