//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;

fn memtest() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("memtest").unwrap();
    cmd.env_remove("MEMTEST_SYMBOLS").env_remove("MEMTEST_SEED");
    cmd
}

#[test]
fn check_pool_accepts_default_symbols() {
    memtest()
        .arg("check-pool")
        .assert()
        .success()
        .stdout(predicate::str::contains("pool ok: 30 symbols"));
}

#[test]
fn check_pool_reads_symbols_from_env() {
    memtest()
        .arg("check-pool")
        .env("MEMTEST_SYMBOLS", "a,b,c,d,e,f,g,h,i,j,k")
        .assert()
        .success()
        .stdout(predicate::str::contains("pool ok: 11 symbols"))
        .stdout(predicate::str::contains("a b c d e f g h i j k"));
}

#[test]
fn check_pool_rejects_small_pool() {
    memtest()
        .args(["--symbols", "a,b,c", "check-pool"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 10 are required"));
}

#[test]
fn check_pool_rejects_duplicates() {
    memtest()
        .args(["check-pool", "--symbols", "a,b,c,d,e,f,g,h,i,a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("appears more than once"));
}

#[test]
fn play_shows_intro_and_quits() {
    memtest()
        .args(["play", "--seed", "7"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Discover your unique study pattern!"));
}

#[test]
fn play_json_keeps_stdout_clean_without_a_result() {
    memtest()
        .args(["play", "--json", "--seed", "7"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Discover your unique study pattern!"));
}

#[test]
fn play_ignores_picks_that_match_nothing() {
    memtest()
        .args(["play", "--seed", "7"])
        .write_stdin("11\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?m)^\?$").unwrap());
}
