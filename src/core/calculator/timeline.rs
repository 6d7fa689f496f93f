use crate::core::calculator::clock::{minutes_between, minutes_or_midnight};
use crate::models::duty_change::DutyStatusChange;
use crate::models::duty_status::DutyStatus;

/// The span between one change and the next one in clock order.
#[derive(Debug, Clone)]
pub struct Segment {
    pub change: DutyStatusChange,
    pub start_minute: u32,
    /// May exceed 1439 when the segment crosses midnight.
    pub end_minute: u32,
    pub duration_minutes: u32,
}

/// Minutes spent in each status over the bounded segments.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatusTotals {
    pub off_duty: u32,
    pub sleeper_berth: u32,
    pub driving: u32,
    pub on_duty_not_driving: u32,
}

impl StatusTotals {
    fn add(&mut self, status: DutyStatus, minutes: u32) {
        match status {
            DutyStatus::OffDuty => self.off_duty += minutes,
            DutyStatus::SleeperBerth => self.sleeper_berth += minutes,
            DutyStatus::Driving => self.driving += minutes,
            DutyStatus::OnDutyNotDriving => self.on_duty_not_driving += minutes,
        }
    }

    pub fn get(&self, status: DutyStatus) -> u32 {
        match status {
            DutyStatus::OffDuty => self.off_duty,
            DutyStatus::SleeperBerth => self.sleeper_berth,
            DutyStatus::Driving => self.driving,
            DutyStatus::OnDutyNotDriving => self.on_duty_not_driving,
        }
    }

    /// Driving counts as on-duty time.
    pub fn on_duty(&self) -> u32 {
        self.driving + self.on_duty_not_driving
    }
}

#[derive(Debug, Default, Clone)]
pub struct Timeline {
    /// Changes in clock order (stable: equal times keep their input order).
    pub changes: Vec<DutyStatusChange>,
    /// One per adjacent pair; the last change opens no segment.
    pub segments: Vec<Segment>,
    pub totals: StatusTotals,
}

impl Timeline {
    pub fn driving_hours(&self) -> f64 {
        minutes_to_hours(self.totals.driving)
    }

    pub fn on_duty_hours(&self) -> f64 {
        minutes_to_hours(self.totals.on_duty())
    }
}

pub fn minutes_to_hours(minutes: u32) -> f64 {
    f64::from(minutes) / 60.0
}

pub fn build_timeline(changes: &[DutyStatusChange]) -> Timeline {
    if changes.is_empty() {
        return Timeline::default();
    }

    // -----------------------------
    // Sort changes chronologically
    // -----------------------------
    let mut sorted = changes.to_vec();
    sorted.sort_by_key(|c| minutes_or_midnight(&c.time));

    let mut segments = Vec::with_capacity(sorted.len() - 1);
    let mut totals = StatusTotals::default();

    // -----------------------------
    // Bound each change by the next
    // -----------------------------
    for w in sorted.windows(2) {
        let (current, next) = (&w[0], &w[1]);

        let start = minutes_or_midnight(&current.time);
        let end = minutes_or_midnight(&next.time);
        let duration = minutes_between(start, end);

        totals.add(current.status, duration);

        segments.push(Segment {
            change: current.clone(),
            start_minute: start,
            end_minute: start + duration,
            duration_minutes: duration,
        });
    }

    Timeline {
        changes: sorted,
        segments,
        totals,
    }
}

/// Daily (driving, on-duty) hours for a set of changes.
pub fn aggregate(changes: &[DutyStatusChange]) -> (f64, f64) {
    let timeline = build_timeline(changes);
    (timeline.driving_hours(), timeline.on_duty_hours())
}
