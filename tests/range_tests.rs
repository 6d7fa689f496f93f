use chrono::NaiveDate;
use hoslogger::export::range::parse_range;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

#[test]
fn test_single_periods() {
    assert_eq!(parse_range("2025").unwrap(), (d(2025, 1, 1), d(2025, 12, 31)));
    assert_eq!(parse_range("2024-02").unwrap(), (d(2024, 2, 1), d(2024, 2, 29)));
    assert_eq!(parse_range("2025-12").unwrap(), (d(2025, 12, 1), d(2025, 12, 31)));
    assert_eq!(
        parse_range("2025-03-14").unwrap(),
        (d(2025, 3, 14), d(2025, 3, 14))
    );
}

#[test]
fn test_ranges() {
    assert_eq!(
        parse_range("2025-01:2025-03").unwrap(),
        (d(2025, 1, 1), d(2025, 3, 31))
    );
    assert_eq!(
        parse_range("2025-03-01:2025-03-14").unwrap(),
        (d(2025, 3, 1), d(2025, 3, 14))
    );
}

#[test]
fn test_invalid_ranges() {
    assert!(parse_range("2025-13").is_err());
    assert!(parse_range("2025:2025-03").is_err());
    assert!(parse_range("2025-03:2025-01").is_err());
    assert!(parse_range("last week").is_err());
}
