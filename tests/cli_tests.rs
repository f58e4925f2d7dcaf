use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{setup_test_db, tk};

#[test]
fn init_creates_the_database() {
    let db_path = setup_test_db("cli_init");

    tk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn show_on_an_empty_day_reports_no_rows() {
    let db_path = setup_test_db("cli_show_empty");

    tk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    tk().args(["--db", &db_path, "--date", "2026-08-30", "show"])
        .assert()
        .success()
        .stdout(contains("No rows recorded for 2026-08-30"));
}

#[test]
fn show_rejects_a_bad_date() {
    let db_path = setup_test_db("cli_bad_date");

    tk().args(["--db", &db_path, "--date", "30/08/2026", "show"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn run_bootstraps_one_row_and_saves_on_quit() {
    let db_path = setup_test_db("cli_run_bootstrap");

    tk().args(["--db", &db_path, "--date", "2026-08-30", "run"])
        .write_stdin("quit\n")
        .assert()
        .success();

    tk().args(["--db", &db_path, "--date", "2026-08-30", "show"])
        .assert()
        .success()
        .stdout(contains("  0  "))
        .stdout(contains("00:00:00"));
}

#[test]
fn run_add_and_tag_survive_a_restart() {
    let db_path = setup_test_db("cli_run_add_tag");

    tk().args(["--db", &db_path, "--date", "2026-08-30", "run"])
        .write_stdin("add\ntag 1 alpha,beta\nquit\n")
        .assert()
        .success()
        .stdout(contains("Tag values"));

    tk().args(["--db", &db_path, "--date", "2026-08-30", "show"])
        .assert()
        .success()
        .stdout(contains("  1  "))
        .stdout(contains("alpha,beta"));
}

#[test]
fn run_name_requires_edit_mode() {
    let db_path = setup_test_db("cli_run_editmode");

    // Without edit mode the rename is refused...
    tk().args(["--db", &db_path, "--date", "2026-08-30", "run"])
        .write_stdin("name 0 alice\nquit\n")
        .assert()
        .success()
        .stdout(contains("Names are locked"));

    tk().args(["--db", &db_path, "--date", "2026-08-30", "show"])
        .assert()
        .success()
        .stdout(contains("alice").not());

    // ...with edit mode it sticks.
    tk().args(["--db", &db_path, "--date", "2026-08-30", "run"])
        .write_stdin("edit\nname 0 alice\nquit\n")
        .assert()
        .success();

    tk().args(["--db", &db_path, "--date", "2026-08-30", "show"])
        .assert()
        .success()
        .stdout(contains("alice"));
}

#[test]
fn run_reset_needs_confirmation_and_floors_to_one_row() {
    let db_path = setup_test_db("cli_run_reset");

    // "n" aborts: both rows survive.
    tk().args(["--db", &db_path, "--date", "2026-08-30", "run"])
        .write_stdin("add\nreset\nn\nquit\n")
        .assert()
        .success()
        .stdout(contains("Reset cancelled"));

    tk().args(["--db", &db_path, "--date", "2026-08-30", "show"])
        .assert()
        .success()
        .stdout(contains("  1  "));

    // "y" clears down to a single empty row.
    tk().args(["--db", &db_path, "--date", "2026-08-30", "run"])
        .write_stdin("reset\ny\nquit\n")
        .assert()
        .success()
        .stdout(contains("All rows cleared"));

    tk().args(["--db", &db_path, "--date", "2026-08-30", "show"])
        .assert()
        .success()
        .stdout(contains("  0  "))
        .stdout(contains("  1  ").not());
}

#[test]
fn run_unknown_command_keeps_the_session_alive() {
    let db_path = setup_test_db("cli_run_unknown");

    tk().args(["--db", &db_path, "--date", "2026-08-30", "run"])
        .write_stdin("bogus\nadd\nquit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command 'bogus'"));

    tk().args(["--db", &db_path, "--date", "2026-08-30", "show"])
        .assert()
        .success()
        .stdout(contains("  1  "));
}

#[test]
fn show_title_carries_the_active_date() {
    let db_path = setup_test_db("cli_show_title");

    tk().args(["--db", &db_path, "--date", "2026-08-30", "show"])
        .assert()
        .success()
        .stdout(contains("Time Keeper - 2026-08-30"));
}
