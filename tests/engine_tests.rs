use hoslogger::core::calculator::limits::{HosLimits, round1};
use hoslogger::core::calculator::timeline::{aggregate, build_timeline};
use hoslogger::core::logic::Core;
use hoslogger::models::duty_status::DutyStatus::{Driving, OffDuty, OnDutyNotDriving, SleeperBerth};
use hoslogger::models::hos_summary::Violation;

mod common;
use common::{change, sample_input};

fn assert_hours(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_empty_changes_are_zero_and_compliant() {
    let limits = HosLimits::default();
    let summary = Core::build_daily_summary(&[], 0.0, &limits);

    assert_eq!(aggregate(&[]), (0.0, 0.0));
    assert_eq!(summary.driving_hours, 0.0);
    assert_eq!(summary.on_duty_hours, 0.0);
    assert_eq!(summary.remaining.driving_hours, 11.0);
    assert_eq!(summary.remaining.on_duty_hours, 14.0);
    assert!(summary.is_compliant());
    assert!(summary.timeline.segments.is_empty());
}

#[test]
fn test_empty_changes_still_capped_by_cycle() {
    let summary = Core::build_daily_summary(&[], 65.5, &HosLimits::default());

    assert_eq!(summary.remaining.driving_hours, 4.5);
    assert_eq!(summary.remaining.on_duty_hours, 4.5);
    assert!(summary.is_compliant());
}

#[test]
fn test_eleven_hours_of_driving_uses_the_whole_allowance() {
    let changes = vec![change("6:00 a.m.", Driving), change("5:00 p.m.", OffDuty)];
    let summary = Core::build_daily_summary(&changes, 0.0, &HosLimits::default());

    assert_hours(summary.driving_hours, 11.0);
    assert_hours(summary.on_duty_hours, 11.0);
    assert_eq!(summary.remaining.driving_hours, 0.0);
    assert_eq!(summary.remaining.on_duty_hours, 3.0);
    // reaching the cap is not exceeding it
    assert!(summary.is_compliant());
}

#[test]
fn test_worked_example() {
    let changes = vec![
        change("7:00 a.m.", Driving),
        change("12:00 p.m.", OnDutyNotDriving),
        change("1:00 p.m.", Driving),
        change("6:00 p.m.", OffDuty),
    ];
    let summary = Core::build_daily_summary(&changes, 20.0, &HosLimits::default());

    assert_hours(summary.driving_hours, 10.0);
    assert_hours(summary.on_duty_hours, 11.0);
    assert_eq!(summary.remaining.driving_hours, 1.0);
    assert_eq!(summary.remaining.on_duty_hours, 3.0);
    assert!(summary.is_compliant());
    assert_eq!(summary.timeline.segments.len(), 3);
}

#[test]
fn test_last_change_contributes_no_duration() {
    // Driving is the last change: nothing bounds it, so it counts for nothing
    let changes = vec![change("8:00 a.m.", OffDuty), change("9:00 a.m.", Driving)];
    let timeline = build_timeline(&changes);

    assert_eq!(timeline.segments.len(), 1);
    assert_eq!(timeline.totals.off_duty, 60);
    assert_eq!(timeline.totals.driving, 0);
    assert_eq!(aggregate(&changes), (0.0, 0.0));
}

#[test]
fn test_single_change_has_no_segments() {
    let timeline = build_timeline(&[change("8:00 a.m.", Driving)]);

    assert_eq!(timeline.changes.len(), 1);
    assert!(timeline.segments.is_empty());
    assert_eq!(timeline.driving_hours(), 0.0);
}

#[test]
fn test_off_duty_and_sleeper_do_not_count_as_on_duty() {
    let changes = vec![
        change("12:00 a.m.", SleeperBerth),
        change("6:00 a.m.", OffDuty),
        change("7:00 a.m.", OnDutyNotDriving),
        change("8:00 a.m.", Driving),
        change("10:30 a.m.", OffDuty),
    ];
    let timeline = build_timeline(&changes);

    assert_eq!(timeline.totals.sleeper_berth, 360);
    assert_eq!(timeline.totals.off_duty, 60);
    assert_eq!(timeline.totals.on_duty_not_driving, 60);
    assert_eq!(timeline.totals.driving, 150);
    assert_hours(timeline.driving_hours(), 2.5);
    assert_hours(timeline.on_duty_hours(), 3.5);
}

#[test]
fn test_aggregate_is_independent_of_input_order() {
    let ordered = vec![
        change("7:00 a.m.", Driving),
        change("12:00 p.m.", OnDutyNotDriving),
        change("1:00 p.m.", Driving),
        change("6:00 p.m.", OffDuty),
    ];
    let shuffled = vec![
        ordered[2].clone(),
        ordered[0].clone(),
        ordered[3].clone(),
        ordered[1].clone(),
    ];

    assert_eq!(aggregate(&ordered), aggregate(&shuffled));
    assert_eq!(aggregate(&shuffled), aggregate(&shuffled));
}

#[test]
fn test_identical_times_keep_input_order() {
    let a = vec![
        change("7:00 a.m.", Driving),
        change("7:00 a.m.", OnDutyNotDriving),
        change("9:00 a.m.", OffDuty),
    ];
    // Driving lasts 0 minutes, on-duty 2 hours
    let (driving, on_duty) = aggregate(&a);
    assert_hours(driving, 0.0);
    assert_hours(on_duty, 2.0);

    let b = vec![a[1].clone(), a[0].clone(), a[2].clone()];
    let (driving, on_duty) = aggregate(&b);
    assert_hours(driving, 2.0);
    assert_hours(on_duty, 2.0);
}

#[test]
fn test_order_field_does_not_affect_sorting() {
    let mut late = change("3:00 p.m.", OffDuty);
    late.order = 0;
    let mut early = change("1:00 p.m.", Driving);
    early.order = 1;

    let timeline = build_timeline(&[late, early]);
    assert_eq!(timeline.changes[0].time, "1:00 p.m.");
    assert_eq!(timeline.totals.driving, 120);
}

#[test]
fn test_malformed_time_counts_as_midnight() {
    let changes = vec![change("noon", Driving), change("2:00 a.m.", OffDuty)];
    let timeline = build_timeline(&changes);

    assert_eq!(timeline.segments[0].start_minute, 0);
    assert_hours(timeline.driving_hours(), 2.0);
}

#[test]
fn test_remaining_hours_are_rounded_to_one_decimal() {
    // 8h20m of driving
    let changes = vec![change("7:00 a.m.", Driving), change("3:20 p.m.", OffDuty)];
    let summary = Core::build_daily_summary(&changes, 0.0, &HosLimits::default());

    assert_eq!(summary.remaining.driving_hours, 2.7);
    assert_eq!(summary.remaining.on_duty_hours, 5.7);
}

#[test]
fn test_over_the_limit_is_never_negative() {
    // 11.5 hours behind the wheel
    let changes = vec![change("6:00 a.m.", Driving), change("5:30 p.m.", OffDuty)];
    let summary = Core::build_daily_summary(&changes, 0.0, &HosLimits::default());

    assert_eq!(summary.remaining.driving_hours, 0.0);
    assert!(summary.remaining.driving_hours.is_sign_positive());
    assert_eq!(summary.remaining.on_duty_hours, 2.5);
    assert_eq!(summary.violations, vec![Violation::DailyDriving]);
}

#[test]
fn test_on_duty_violation() {
    let changes = vec![
        change("5:00 a.m.", OnDutyNotDriving),
        change("9:00 a.m.", Driving),
        change("7:30 p.m.", OffDuty),
    ];
    let summary = Core::build_daily_summary(&changes, 0.0, &HosLimits::default());

    assert_hours(summary.on_duty_hours, 14.5);
    assert_eq!(summary.remaining.on_duty_hours, 0.0);
    assert_eq!(summary.remaining.driving_hours, 0.5);
    assert_eq!(summary.violations, vec![Violation::DailyOnDuty]);
}

#[test]
fn test_cycle_caps_remaining_hours() {
    let changes = vec![change("8:00 a.m.", Driving), change("1:00 p.m.", OffDuty)];

    let at_cap = Core::build_daily_summary(&changes, 65.0, &HosLimits::default());
    assert_eq!(at_cap.remaining.driving_hours, 0.0);
    assert_eq!(at_cap.remaining.on_duty_hours, 0.0);
    assert!(at_cap.is_compliant());

    let over = Core::build_daily_summary(&changes, 66.0, &HosLimits::default());
    assert_eq!(over.violations, vec![Violation::Cycle]);
}

#[test]
fn test_custom_limits_are_applied() {
    let limits = HosLimits {
        max_driving_hours: 10.0,
        max_on_duty_hours: 15.0,
        max_cycle_hours: 60.0,
    };
    let changes = vec![change("7:00 a.m.", Driving), change("5:30 p.m.", OffDuty)];
    let summary = Core::build_daily_summary(&changes, 10.0, &limits);

    assert_eq!(summary.remaining.driving_hours, 0.0);
    assert_eq!(summary.remaining.on_duty_hours, 4.5);
    assert_eq!(summary.violations, vec![Violation::DailyDriving]);
}

#[test]
fn test_generate_log_result_matches_summary() {
    let input = sample_input(
        vec![change("7:00 a.m.", Driving), change("12:00 p.m.", OffDuty)],
        30.0,
    );
    let (summary, result) = Core::generate_log(&input, &HosLimits::default());

    assert_eq!(result.remaining_hours, summary.remaining);
    assert_eq!(result.remaining_hours.driving_hours, 6.0);
    assert!(summary.is_compliant());
    assert!(result.log_sheet.contains("Daily Driving Hours: 5.0"));
}

#[test]
fn test_round1() {
    assert_eq!(round1(2.6666), 2.7);
    assert_eq!(round1(0.04), 0.0);
    assert_eq!(round1(3.0), 3.0);
    assert!(round1(-0.01).is_sign_positive());
}
