//! 24-hour ELD grid for `show --details`.
//!
//! Display only: the grid fills the day from midnight to midnight, which the
//! HOS totals never do. Before the first change the first status is drawn;
//! after the last change its status runs to the end of the day.

use crate::core::calculator::clock::{ClockTime, MINUTES_PER_DAY, minutes_or_midnight};
use crate::core::calculator::timeline::Timeline;
use crate::models::duty_status::DutyStatus;

pub const MINUTES_PER_CELL: u32 = 15;
const CELLS: usize = (MINUTES_PER_DAY / MINUTES_PER_CELL) as usize;
const LABEL_WIDTH: usize = 22;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Midnight up to the first change.
    BeforeFirstChange,
    /// Between two changes; the only kind the HOS totals count.
    Bounded,
    /// Last change up to midnight.
    ToEndOfDay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSpan {
    pub status: DutyStatus,
    pub start_minute: u32,
    pub end_minute: u32,
    pub kind: SpanKind,
}

#[derive(Debug, Default, Clone)]
pub struct DayGrid {
    pub spans: Vec<GridSpan>,
}

impl DayGrid {
    pub fn from_timeline(timeline: &Timeline) -> Self {
        let (Some(first), Some(last)) = (timeline.changes.first(), timeline.changes.last()) else {
            return Self::default();
        };

        let mut spans = Vec::with_capacity(timeline.segments.len() + 2);

        spans.push(GridSpan {
            status: first.status,
            start_minute: 0,
            end_minute: minutes_or_midnight(&first.time),
            kind: SpanKind::BeforeFirstChange,
        });

        for seg in &timeline.segments {
            spans.push(GridSpan {
                status: seg.change.status,
                start_minute: seg.start_minute,
                end_minute: seg.end_minute.min(MINUTES_PER_DAY),
                kind: SpanKind::Bounded,
            });
        }

        spans.push(GridSpan {
            status: last.status,
            start_minute: minutes_or_midnight(&last.time),
            end_minute: MINUTES_PER_DAY,
            kind: SpanKind::ToEndOfDay,
        });

        spans.retain(|s| s.end_minute > s.start_minute);
        Self { spans }
    }

    /// Span covering `minute`, if any.
    pub fn span_at(&self, minute: u32) -> Option<&GridSpan> {
        self.spans
            .iter()
            .find(|s| (s.start_minute..s.end_minute).contains(&minute))
    }

    /// One row per duty status, one cell per quarter hour. Bounded time is
    /// drawn solid, time outside the first and last change shaded.
    pub fn render(&self) -> String {
        let mut out = String::new();

        let mut ruler = vec![' '; CELLS];
        for hour in (0..24).step_by(3) {
            let label = match hour {
                0 => "12a".to_string(),
                12 => "12p".to_string(),
                h if h < 12 => format!("{h}a"),
                h => format!("{}p", h - 12),
            };
            let at = (hour * 60 / MINUTES_PER_CELL) as usize;
            for (i, ch) in label.chars().enumerate() {
                ruler[at + i] = ch;
            }
        }
        out.push_str(&format!(
            "{:w$} {}\n",
            "",
            ruler.iter().collect::<String>(),
            w = LABEL_WIDTH
        ));

        for status in DutyStatus::ALL {
            let row: String = (0..CELLS)
                .map(|cell| {
                    let minute = cell as u32 * MINUTES_PER_CELL;
                    match self.span_at(minute) {
                        Some(s) if s.status == status && s.kind == SpanKind::Bounded => '█',
                        Some(s) if s.status == status => '░',
                        _ => '·',
                    }
                })
                .collect();
            out.push_str(&format!("{:w$} {}\n", status, row, w = LABEL_WIDTH));
        }

        out
    }
}

impl GridSpan {
    /// `7:00 a.m. → 12:00 p.m.`; the end of the day prints as midnight.
    pub fn range_label(&self) -> String {
        format!(
            "{} → {}",
            clock_label(self.start_minute),
            clock_label(self.end_minute)
        )
    }
}

/// Minute offset (possibly 1440) as a 12-hour clock time.
pub fn clock_label(minute: u32) -> String {
    ClockTime::from_minutes(minute % MINUTES_PER_DAY)
        .map(|t| t.to_string())
        .unwrap_or_default()
}
