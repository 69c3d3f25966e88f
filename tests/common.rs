#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The five records of this fixture are all invalid, each for a different reason.
pub const INVALID_ENTRIES: &str = r#"[{"type": "flexible", "date": "not-a-date", "data": "day-begin", "hours": "08:00"},
  {"type": "waived", "date": "2020-01-01", "data": "example waiver 2", "hours": "not-an-hour"},
  {"type": "flexible", "date": "not-a-date", "data": "day-end", "hours": "17:00"},
  {"type": "flexible", "date": "not-a-date", "values": "not-an-array"},
  {"type": "not-a-type", "date": "not-a-date", "data": "day-end", "hours": "17:00"}
]"#;

/// Two valid records (one per store) mixed with three invalid ones.
pub const MIXED_ENTRIES: &str = r#"[
  {"type": "flexible", "date": "2021-06-15", "values": ["08:30", "12:00", "12:45", "17:15"]},
  {"type": "flexible", "date": "2021-06-16", "values": ["08:30", "25:00"]},
  {"type": "waived", "date": "2021-12-25", "data": "Christmas", "hours": "08:00"},
  {"date": "2021-06-17", "values": []},
  {"type": "waived", "date": "2021-02-30", "data": "Nope", "hours": "08:00"}
]"#;

/// Isolated environment: temp HOME, temp database, temp files.
pub struct TestEnv {
    pub dir: TempDir,
    pub db: String,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let db = dir
            .path()
            .join("timepunch.sqlite")
            .to_string_lossy()
            .to_string();
        Self { dir, db }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// `timepunch --db <temp db>` with HOME pointing inside the temp dir.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("timepunch");
        cmd.env("HOME", self.dir.path())
            .env("APPDATA", self.dir.path())
            .env_remove("RUST_LOG")
            .args(["--db", &self.db]);
        cmd
    }

    pub fn init(&self) {
        self.cmd().args(["--test", "init"]).assert().success();
    }
}

pub fn write_file(path: &Path, content: &str) {
    fs::write(path, content).expect("write fixture");
}
