use assert_cmd::Command;
use predicates::prelude::*;

fn figo_log() -> Command {
    Command::new(env!("CARGO_BIN_EXE_figo-log"))
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

#[test]
fn info_line_has_prefix_timestamp_and_label() {
    let output = figo_log()
        .args(["--no-color", "info", "value=%d", "42"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .get_output()
        .clone();

    let stdout = stdout_of(&output);
    assert_eq!(
        test_support::normalize_timestamp(stdout.trim_end_matches('\n')),
        "[Figo] <timestamp> [ INFO] value=42"
    );
    assert!(stdout.ends_with('\n') && !stdout.ends_with("\n\n"));
}

#[test]
fn quiet_debug_prints_nothing() {
    figo_log()
        .args(["--quiet", "debug", "x"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn quiet_warning_still_prints() {
    figo_log()
        .args(["--quiet", "--no-color", "warn", "low disk"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(" [ WARN] low disk\n"));
}

#[test]
fn fatal_exits_with_one_after_single_line() {
    let output = figo_log()
        .args(["--quiet", "--no-color", "fatal", "giving up"])
        .assert()
        .code(1)
        .get_output()
        .clone();

    let stdout = stdout_of(&output);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.ends_with(" [FATAL] giving up\n"));
}

#[test]
fn color_flag_wraps_timestamp_and_label() {
    figo_log()
        .args(["--color", "error", "boom"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[Figo] \x1b[36m"))
        .stdout(predicate::str::contains("[\x1b[31mERROR\x1b[0m] boom\n"));
}

#[test]
fn no_color_flag_removes_escapes() {
    figo_log()
        .args(["--no-color", "error", "boom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b").not());
}

#[test]
fn show_caller_reports_front_end_location() {
    figo_log()
        .args(["--no-color", "--show-caller", "warn", "here"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"\[ WARN\] \[frontend\.rs:\d+ execute\(\)\] here\n$").expect("valid regex"));
}

#[test]
fn caller_depth_moves_reported_frame_out() {
    figo_log()
        .args(["--no-color", "--show-caller", "--caller-depth", "3", "warn", "here"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"\[ WARN\] \[frontend\.rs:\d+ run_with\(\)\] here\n$").expect("valid regex"));
}

#[test]
fn unknown_level_is_usage_error() {
    figo_log()
        .args(["loud", "x"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("loud"));
}

#[test]
fn missing_arguments_report_usage() {
    figo_log()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}
