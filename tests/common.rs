#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Duration, NaiveDate};
use rbankroll::models::{Location, Session, TournamentDetails};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rbk() -> Command {
    cargo_bin_cmd!("rbankroll")
}

/// Fresh data directory inside the system temp dir
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rbankroll", name));
    fs::remove_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Temporary output file path; any previous file is removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_data_dir(dir: &str) {
    rbk()
        .args(["--data", dir, "--test", "init"])
        .assert()
        .success();
}

/// Three cash sessions: +100 on a Monday (2h), -40 on a Tuesday (1h),
/// +60 on a Monday (3h).
pub fn init_with_sessions(dir: &str) {
    init_data_dir(dir);

    for (date, start, end, buy_in, cash_out) in [
        ("2025-09-01", "18:00", "20:00", "200", "300"),
        ("2025-09-02", "18:00", "19:00", "200", "160"),
        ("2025-09-08", "18:00", "21:00", "300", "360"),
    ] {
        rbk()
            .args([
                "--data", dir, "--test", "add", date, "--start", start, "--end", end, "--buy-in",
                buy_in, "--cash-out", cash_out, "--stakes", "1/3", "--location", "Bellagio",
            ])
            .assert()
            .success();
    }
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Cash session starting at 18:00 and lasting `minutes`.
pub fn cash(date: &str, minutes: i64, buy_in: i64, cash_out: i64, stakes: &str) -> Session {
    let d = day(date);
    let start = d.and_hms_opt(18, 0, 0).expect("valid time");
    let end = start + Duration::minutes(minutes);
    Session::cash(d, start, end, buy_in, cash_out, 0, stakes, Location::new("Bellagio"))
}

pub fn tournament(
    date: &str,
    minutes: i64,
    buy_in: i64,
    cash_out: i64,
    details: TournamentDetails,
) -> Session {
    let d = day(date);
    let start = d.and_hms_opt(12, 0, 0).expect("valid time");
    let end = start + Duration::minutes(minutes);
    Session::tournament(d, start, end, buy_in, cash_out, details, Location::new("Aria"))
}

pub fn refs(sessions: &[Session]) -> Vec<&Session> {
    sessions.iter().collect()
}
