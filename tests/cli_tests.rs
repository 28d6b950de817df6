use predicates::str::contains;
use std::fs;

mod common;
use common::{plg, setup_test_db, temp_out};

#[test]
fn init_creates_the_slot_pool() {
    let db_path = setup_test_db("cli_init");

    plg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("8 parking slots"));
}

#[test]
fn slots_lists_the_whole_pool() {
    let db_path = setup_test_db("cli_slots");

    plg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    plg()
        .args(["--db", &db_path, "slots"])
        .assert()
        .success()
        .stdout(contains("available"))
        .stdout(contains("8 of 8 slots shown"));
}

#[test]
fn book_then_free_records_a_booking() {
    let db_path = setup_test_db("cli_book_free");

    plg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    plg()
        .args([
            "--db", &db_path, "book", "3", "--user", "alice", "--vehicle", "DL01",
        ])
        .assert()
        .success()
        .stdout(contains("Booked slot 3"));

    plg()
        .args(["--db", &db_path, "slots"])
        .assert()
        .success()
        .stdout(contains("occupied"))
        .stdout(contains("alice"));

    plg()
        .args(["--db", &db_path, "free", "3"])
        .assert()
        .success()
        .stdout(contains("Freed slot 3"));

    plg()
        .args(["--db", &db_path, "records"])
        .assert()
        .success()
        .stdout(contains("alice"))
        .stdout(contains("DL01"))
        .stdout(contains("1 bookings"));
}

#[test]
fn booking_an_occupied_slot_fails() {
    let db_path = setup_test_db("cli_double_book");

    plg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    plg()
        .args([
            "--db", &db_path, "book", "2", "--user", "alice", "--vehicle", "DL01",
        ])
        .assert()
        .success();

    plg()
        .args([
            "--db", &db_path, "book", "2", "--user", "bob", "--vehicle", "KA05",
        ])
        .assert()
        .failure()
        .stderr(contains("already occupied"));
}

#[test]
fn free_by_identity_finds_the_active_booking() {
    let db_path = setup_test_db("cli_free_identity");

    plg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    plg()
        .args([
            "--db", &db_path, "book", "5", "--user", "alice", "--vehicle", "DL01",
        ])
        .assert()
        .success();

    plg()
        .args([
            "--db", &db_path, "free", "--user", "alice", "--vehicle", "DL01",
        ])
        .assert()
        .success()
        .stdout(contains("Freed slot 5"));

    // releasing again: no active booking left for that identity
    plg()
        .args([
            "--db", &db_path, "free", "--user", "alice", "--vehicle", "DL01",
        ])
        .assert()
        .success()
        .stdout(contains("No active booking"));
}

#[test]
fn cost_preview_reports_the_running_charge() {
    let db_path = setup_test_db("cli_cost");

    plg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    plg()
        .args([
            "--db", &db_path, "book", "4", "--user", "carol", "--vehicle", "MH12",
        ])
        .assert()
        .success();

    plg()
        .args(["--db", &db_path, "cost", "4"])
        .assert()
        .success()
        .stdout(contains("cost so far"));

    // an available slot has no cost to preview
    plg()
        .args(["--db", &db_path, "cost", "1"])
        .assert()
        .failure()
        .stderr(contains("not occupied"));
}

#[test]
fn add_slots_extends_the_pool() {
    let db_path = setup_test_db("cli_add_slots");

    plg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    plg()
        .args(["--db", &db_path, "add-slots", "2"])
        .assert()
        .success()
        .stdout(contains("Added 2 slots"));

    plg()
        .args(["--db", &db_path, "slots"])
        .assert()
        .success()
        .stdout(contains("10 of 10 slots shown"));
}

#[test]
fn add_slots_rejects_a_non_positive_count() {
    let db_path = setup_test_db("cli_add_zero");

    plg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    plg()
        .args(["--db", &db_path, "add-slots", "0"])
        .assert()
        .failure()
        .stderr(contains("must be positive"));
}

#[test]
fn clear_wipes_the_ledger_and_frees_every_slot() {
    let db_path = setup_test_db("cli_clear");

    plg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    plg()
        .args([
            "--db", &db_path, "book", "1", "--user", "alice", "--vehicle", "DL01",
        ])
        .assert()
        .success();
    plg()
        .args(["--db", &db_path, "free", "1"])
        .assert()
        .success();
    plg()
        .args([
            "--db", &db_path, "book", "2", "--user", "bob", "--vehicle", "KA05",
        ])
        .assert()
        .success();

    plg()
        .args(["--db", &db_path, "clear"])
        .assert()
        .success()
        .stdout(contains("Cleared all bookings"));

    plg()
        .args(["--db", &db_path, "records"])
        .assert()
        .success()
        .stdout(contains("No bookings recorded."));

    plg()
        .args(["--db", &db_path, "slots", "--available"])
        .assert()
        .success()
        .stdout(contains("8 of 8 slots shown"));
}

#[test]
fn export_writes_the_ledger_to_a_file() {
    let db_path = setup_test_db("cli_export");
    let csv_out = temp_out("cli_export_csv", "csv");
    let json_out = temp_out("cli_export_json", "json");

    plg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    plg()
        .args([
            "--db", &db_path, "book", "3", "--user", "alice", "--vehicle", "DL01",
        ])
        .assert()
        .success();
    plg()
        .args(["--db", &db_path, "free", "3"])
        .assert()
        .success();

    plg()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &csv_out,
        ])
        .assert()
        .success()
        .stdout(contains("Exported 1 bookings"));

    let csv_content = fs::read_to_string(&csv_out).expect("csv written");
    assert!(csv_content.starts_with("slot_id,user,vehicle,in_time,out_time,cost"));
    assert!(csv_content.contains("alice"));

    plg()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &json_out,
        ])
        .assert()
        .success();

    let json_content = fs::read_to_string(&json_out).expect("json written");
    assert!(json_content.contains("\"user\": \"alice\""));

    // refuses to clobber without --force
    plg()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &csv_out,
        ])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}
