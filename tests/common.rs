#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Days, Local, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HEADER: &str = "name,trtr_last_opened,trtr_next_due,trtr_reminder_sent,mntt_last_opened,mntt_next_due,mntt_reminder_sent";

/// Isolated config directory + store path for one test.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn store(&self) -> PathBuf {
        self.dir.path().join("gears.csv")
    }

    pub fn store_str(&self) -> String {
        self.store().to_string_lossy().to_string()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// `gearminder` with the config dir pointed at the temp dir and no mail settings.
    pub fn gm(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("gearminder");
        isolate(&mut cmd, self.dir.path());
        cmd.args(["--store", &self.store_str()]);
        cmd
    }

    /// `gearminder-check` reading its config from the temp dir.
    pub fn checker(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("gearminder-check");
        isolate(&mut cmd, self.dir.path());
        cmd
    }

    /// Write a config file pointing at this env's store.
    pub fn write_config(&self, extra: &str) {
        let yaml = format!("store: '{}'\nseed_sample_data: false\n{extra}", self.store_str());
        fs::write(self.dir.path().join("gearminder.conf"), yaml).expect("write config");
    }

    pub fn write_store(&self, rows: &[&str]) {
        let mut content = String::from(HEADER);
        content.push('\n');
        for r in rows {
            content.push_str(r);
            content.push('\n');
        }
        fs::write(self.store(), content).expect("write store");
    }

    pub fn read_store(&self) -> String {
        fs::read_to_string(self.store()).expect("read store")
    }
}

fn isolate(cmd: &mut Command, dir: &Path) {
    cmd.env("GEARMINDER_CONFIG_DIR", dir)
        .env("NO_COLOR", "1")
        .env_remove("GEARMINDER_EMAIL_FROM")
        .env_remove("GEARMINDER_EMAIL_TO")
        .env_remove("GEARMINDER_SMTP_USERNAME")
        .env_remove("GEARMINDER_SMTP_PASSWORD")
        .env_remove("RUST_LOG");
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn days_ago(n: u64) -> NaiveDate {
    today().checked_sub_days(Days::new(n)).expect("valid date")
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
