mod common;

use mcstats_testing::TestWorld;
use predicates::prelude::*;

#[test]
fn test_snapshot_then_report() {
    let world = TestWorld::new().with_sample_ledger();
    let dst = world.root().join("app/ledger.sqlite");

    common::command(&world)
        .arg("snapshot")
        .arg("--src")
        .arg(world.ledger_path())
        .arg("--dst")
        .arg(&dst)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Snapshot complete: "));
    assert!(dst.exists());

    common::command(&world)
        .args(["ledger", "--format", "json", "--db"])
        .arg(&dst)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_actions\": 4"));
}

#[test]
fn test_snapshot_default_destination() {
    let world = TestWorld::new();
    let live = world.root().join("world/ledger.sqlite");
    std::fs::create_dir_all(live.parent().unwrap()).unwrap();
    mcstats_testing::LedgerFixture::with_sample_actions(&live).unwrap();

    common::command(&world)
        .args(["snapshot", "--src", "world/ledger.sqlite"])
        .assert()
        .success()
        .stdout("Snapshot complete: world/ledger.sqlite -> ledger.sqlite\n");
    assert!(world.root().join("ledger.sqlite").exists());
}

#[test]
fn test_snapshot_missing_source() {
    let world = TestWorld::new();

    common::command(&world)
        .args(["snapshot", "--src", "missing.sqlite", "--dst", "out.sqlite"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Database not found"));
    assert!(!world.root().join("out.sqlite").exists());
}
