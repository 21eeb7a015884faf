//! End-to-end flow: ingest an export, allocate, evaluate

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use webtree::application::{evaluate, AllocationEngine};
use webtree::infrastructure::load_roster;
use webtree::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn write_export(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("requests.csv");
    let mut content =
        String::from("ID,CLASS,CRN,TREE,BRANCH,COURSE_CEILING,MAJOR,MAJOR2,SUBJ,NUMB,SEQ\n");
    // 12 students in three tiers, all competing for four tight courses.
    for id in 1..=12u32 {
        let class = match id % 3 {
            0 => "SENI",
            1 => "JUNI",
            _ => "FRST",
        };
        let first = 30700 + id % 4;
        let second = 30700 + (id + 1) % 4;
        let third = 30700 + (id + 2) % 4;
        content.push_str(&format!("{id},{class},{first},1,1,5,ECO,,ECO,101,A\n"));
        content.push_str(&format!("{id},{class},{second},2,1,5,ECO,,BIO,210,A\n"));
        content.push_str(&format!("{id},{class},{third},4,1,5,ECO,,MAT,140,A\n"));
    }
    std::fs::write(&path, content).expect("write export file");
    path
}

#[test]
fn given_export_when_allocating_then_assignment_is_complete_and_within_limits() {
    let temp = TempDir::new().unwrap();
    let roster = load_roster(&write_export(&temp)).unwrap();
    let mut ledger = roster.ledger.clone();

    let mut engine = AllocationEngine::new(StdRng::seed_from_u64(2015));
    let assignment = engine.run(&roster.students, &roster.store, &mut ledger);

    assert_eq!(assignment.student_count(), 12);
    for (_, courses) in assignment.iter() {
        assert!(courses.len() <= 4);
    }

    let report = evaluate(&assignment, &roster.store, &roster.ledger);
    assert!(report.capacity_violations.is_empty());
    // Every student filed requests, so the average is defined.
    assert!(report.average_fill_ratio.is_some());
}

#[test]
fn given_export_when_allocating_twice_with_same_seed_then_results_match() {
    let temp = TempDir::new().unwrap();
    let roster = load_roster(&write_export(&temp)).unwrap();

    let mut ledger_a = roster.ledger.clone();
    let assignment_a = AllocationEngine::new(StdRng::seed_from_u64(7)).run(
        &roster.students,
        &roster.store,
        &mut ledger_a,
    );

    let mut ledger_b = roster.ledger.clone();
    let assignment_b = AllocationEngine::new(StdRng::seed_from_u64(7)).run(
        &roster.students,
        &roster.store,
        &mut ledger_b,
    );

    assert_eq!(assignment_a, assignment_b);
}
