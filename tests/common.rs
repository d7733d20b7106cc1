#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wb() -> Command {
    cargo_bin_cmd!("workbalance")
}

/// Write a CSV sheet fixture inside the system temp dir and return its path
pub fn write_sheet(name: &str, contents: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_workbalance.csv", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, contents).expect("write sheet fixture");
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Two filled work weeks (Mon 01/09/2025 .. Fri 12/09/2025, two sessions of
/// 3h + 4h per weekday, weekends empty) followed by three pre-dated unfilled
/// rows. Headers use the default Portuguese locale profile.
pub fn two_week_sheet() -> String {
    let mut csv = String::from("Data,Início,Fim,Início 2,Fim 2,Horas requeridas\n");
    for day in 1..=12 {
        let weekday = matches!(day, 1..=5 | 8..=12);
        if weekday {
            csv.push_str(&format!("{:02}/09/2025,09:00,12:00,13:00,17:00,\n", day));
        } else {
            csv.push_str(&format!("{:02}/09/2025,,,,,\n", day));
        }
    }
    for day in 13..=15 {
        csv.push_str(&format!("{:02}/09/2025,,,,,\n", day));
    }
    csv
}

/// Sheet whose rows never reach the completeness threshold.
pub fn sparse_sheet() -> String {
    let mut csv = String::from("Data,Início,Fim,Início 2,Fim 2,Horas requeridas\n");
    for day in 1..=5 {
        csv.push_str(&format!("{:02}/09/2025,,,,,\n", day));
    }
    csv
}
