use hoslogger::config::Config;
use hoslogger::core::generate::GenerateLogic;
use hoslogger::db::initialize::init_db;
use hoslogger::db::pool::DbPool;
use hoslogger::db::queries::{load_log, load_recent_logs};
use hoslogger::models::duty_status::DutyStatus::{Driving, OffDuty};
use std::fs;

mod common;
use common::{change, sample_input, setup_test_db};

fn open_fresh(name: &str) -> DbPool {
    let db_path = setup_test_db(name);
    fs::File::create(&db_path).expect("create db file");
    let pool = DbPool::new(&db_path).expect("open db");
    init_db(&pool.conn).expect("migrations");
    pool
}

#[test]
fn test_verdict_ignores_label_text_in_metadata() {
    let mut pool = open_fresh("storage_label_text");

    let mut input = sample_input(
        vec![change("7:00 a.m.", Driving), change("9:00 a.m.", OffDuty)],
        20.0,
    );
    input.shipping_document_numbers = "BOL-1 ⚠ VIOLATION notice attached".into();
    input.driver_name = "⚠ VIOLATION Jones".into();

    let outcome =
        GenerateLogic::apply(Some(&mut pool), input, &Config::default(), true).expect("stored");
    assert!(outcome.summary.is_compliant());

    let id = outcome.id.expect("persisted");
    let stored = load_log(&pool, id).expect("loaded");
    assert!(stored.compliant);
    assert!(stored.result.log_sheet.contains("⚠ VIOLATION notice attached"));

    let recent = load_recent_logs(&pool, 10).expect("history");
    assert!(recent[0].compliant);
}

#[test]
fn test_violation_verdict_is_stored() {
    let mut pool = open_fresh("storage_violation");

    let input = sample_input(
        vec![change("5:00 a.m.", Driving), change("5:00 p.m.", OffDuty)],
        0.0,
    );
    let outcome =
        GenerateLogic::apply(Some(&mut pool), input, &Config::default(), true).expect("stored");
    assert!(!outcome.summary.is_compliant());

    let stored = load_log(&pool, outcome.id.expect("persisted")).expect("loaded");
    assert!(!stored.compliant);

    let violations: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM eld_logs WHERE compliant = 0",
            [],
            |row| row.get(0),
        )
        .expect("count");
    assert_eq!(violations, 1);
}

#[test]
fn test_stored_changes_keep_submitted_order() {
    let mut pool = open_fresh("storage_order");

    let input = sample_input(
        vec![change("1:00 p.m.", OffDuty), change("7:00 a.m.", Driving)],
        0.0,
    );
    let outcome =
        GenerateLogic::apply(Some(&mut pool), input, &Config::default(), true).expect("stored");

    let stored = load_log(&pool, outcome.id.expect("persisted")).expect("loaded");
    let times: Vec<&str> = stored
        .input
        .duty_status_changes
        .iter()
        .map(|c| c.time.as_str())
        .collect();
    assert_eq!(times, vec!["1:00 p.m.", "7:00 a.m."]);
    assert_eq!(stored.input.duty_status_changes[1].order, 1);
}
