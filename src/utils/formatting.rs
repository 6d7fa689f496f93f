//! Formatting utilities used for CLI and export outputs.

/// Shortest decimal form of `v`, keeping at least one fractional digit
/// for whole numbers: `20.0`, `20.5`, `7.25`.
pub fn float_repr(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}

/// Hours as `HHh MMm` (e.g. 10.5 → `10h 30m`).
pub fn hours2readable(hours: f64) -> String {
    let total = (hours * 60.0).round().max(0.0) as i64;
    format!("{:02}h {:02}m", total / 60, total % 60)
}

/// Cut `s` to `max` visible chars, ending with "..." when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}
