/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Remaining-hours color:
/// 0 → red
/// under 2h → yellow
/// otherwise → green
pub fn color_for_remaining(hours: f64) -> &'static str {
    if hours <= 0.0 {
        RED
    } else if hours < 2.0 {
        YELLOW
    } else {
        GREEN
    }
}

pub fn color_for_compliance(compliant: bool) -> &'static str {
    if compliant { GREEN } else { RED }
}

/// Wrap `value` in `color` … `RESET`.
pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
