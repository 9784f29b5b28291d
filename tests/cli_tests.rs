use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{HEADER, TestEnv, days_ago, today};

#[test]
fn test_init_seeds_sample_store() {
    let env = TestEnv::new();

    env.gm()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("Store created with 24 item(s)."));

    let content = env.read_store();
    assert!(content.starts_with(HEADER));
    assert!(content.contains("RELAY ROOM & PANEL,2025-06-06,2025-06-20,No,2025-06-06,2025-06-20,No"));
}

#[test]
fn test_init_empty_and_rerun_keeps_data() {
    let env = TestEnv::new();

    env.gm().args(["--test", "init", "--empty"]).assert().success();
    assert_eq!(env.read_store().trim(), HEADER);

    env.gm().args(["add", "NEW GEAR"]).assert().success();

    env.gm()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("left as is"));
    assert!(env.read_store().contains("NEW GEAR"));
}

#[test]
fn test_init_writes_config_file() {
    let env = TestEnv::new();

    env.gm().args(["init", "--empty"]).assert().success();

    let conf = fs::read_to_string(env.path("gearminder.conf")).expect("config written");
    assert!(conf.contains("store:"));
    assert!(conf.contains("smtp_port: 465"));
    assert!(!conf.contains("PASSWORD"));
}

#[test]
fn test_add_new_gear_and_duplicate() {
    let env = TestEnv::new();
    env.gm().args(["--test", "init", "--empty"]).assert().success();

    env.gm()
        .args(["add", "NEW GEAR"])
        .assert()
        .success()
        .stdout(contains("Added new gear: NEW GEAR"));

    env.gm()
        .args(["add", "NEW GEAR"])
        .assert()
        .success()
        .stdout(contains("already exists"));

    let content = env.read_store();
    assert_eq!(content.matches("NEW GEAR").count(), 1);
    assert!(content.contains("NEW GEAR,,,,,,"));
}

#[test]
fn test_open_with_explicit_date() {
    let env = TestEnv::new();
    env.gm().args(["--test", "init", "--empty"]).assert().success();

    env.gm()
        .args(["open", "LC - 9", "mntt", "--date", "2025-06-22"])
        .assert()
        .success()
        .stdout(contains("Next open: 2025-07-06"));

    env.gm()
        .args(["open", "LC - 9", "TRTR", "--date", "2025-06-30"])
        .assert()
        .success();

    assert!(
        env.read_store()
            .contains("LC - 9,2025-06-30,2025-07-14,No,2025-06-22,2025-07-06,No")
    );
}

#[test]
fn test_open_defaults_to_today() {
    let env = TestEnv::new();
    env.gm().args(["--test", "init", "--empty"]).assert().success();

    env.gm().args(["open", "ELD", "trtr"]).assert().success();

    let expected = format!("ELD,{},", today().format("%Y-%m-%d"));
    assert!(env.read_store().contains(&expected));
}

#[test]
fn test_open_rejects_bad_input() {
    let env = TestEnv::new();
    env.gm().args(["--test", "init", "--empty"]).assert().success();

    env.gm()
        .args(["open", "ELD", "trtr", "--date", "2025-13-40"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    env.gm().args(["open", "ELD", "xyz"]).assert().failure();
}

#[test]
fn test_list_shows_table_and_due_filter() {
    let env = TestEnv::new();
    env.gm().args(["--test", "init", "--empty"]).assert().success();
    env.gm()
        .args(["open", "FIRE ALARM", "trtr", "--date", "2025-06-25"])
        .assert()
        .success();
    env.gm().args(["add", "CRANK HANDLE"]).assert().success();

    env.gm()
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("FIRE ALARM"))
        .stdout(contains("2025-07-09"))
        .stdout(contains("CRANK HANDLE"))
        .stdout(contains("2 item(s)"));

    env.gm()
        .args(["list", "--due", "--date", "2025-07-09"])
        .assert()
        .success()
        .stdout(contains("FIRE ALARM"))
        .stdout(contains("CRANK HANDLE").not());
}

#[test]
fn test_remind_dry_run_prints_and_keeps_flags() {
    let env = TestEnv::new();
    env.gm().args(["--test", "init", "--empty"]).assert().success();
    env.gm()
        .args(["open", "LC-5", "mntt", "--date", "2025-06-17"])
        .assert()
        .success();

    env.gm()
        .args(["remind", "--date", "2025-07-01", "--dry-run"])
        .assert()
        .success()
        .stdout(contains("Gear Reminder - Action Needed Today"))
        .stdout(contains(
            "Gear: LC-5 - MNTT needs to be opened today! (Next Open: 2025-07-01)",
        ));

    assert!(env.read_store().contains("LC-5,,,,2025-06-17,2025-07-01,No"));
}

#[test]
fn test_remind_without_mail_config_reports_failure() {
    let env = TestEnv::new();
    env.gm().args(["--test", "init", "--empty"]).assert().success();
    env.gm()
        .args(["open", "LC-5", "mntt", "--date", "2025-06-17"])
        .assert()
        .success();

    env.gm()
        .args(["remind", "--date", "2025-07-01"])
        .assert()
        .success()
        .stdout(contains("Reminders due:"))
        .stderr(contains("Failed to send email"));

    assert!(env.read_store().contains("LC-5,,,,2025-06-17,2025-07-01,No"));
}

#[test]
fn test_remind_nothing_due() {
    let env = TestEnv::new();
    env.gm().args(["--test", "init", "--empty"]).assert().success();
    env.gm().args(["add", "NEW GEAR"]).assert().success();

    env.gm()
        .args(["remind"])
        .assert()
        .success()
        .stdout(contains("No reminders due today."));
}

#[test]
fn test_export_formats() {
    let env = TestEnv::new();
    env.gm().args(["--test", "init"]).assert().success();

    for (format, needle) in [("csv", "DATALOGGER"), ("json", "\"name\": \"DATALOGGER\"")] {
        let out = env.path(&format!("gears_out.{format}"));
        env.gm()
            .args([
                "export",
                "--format",
                format,
                "--file",
                &out.to_string_lossy(),
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&out).expect("read export");
        assert!(content.contains(needle), "{format}: {content}");
    }

    let xlsx = env.path("gears_out.xlsx");
    env.gm()
        .args(["export", "--format", "xlsx", "--file", &xlsx.to_string_lossy()])
        .assert()
        .success();
    let bytes = fs::read(&xlsx).expect("read xlsx");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_requires_absolute_path() {
    let env = TestEnv::new();
    env.gm().args(["--test", "init", "--empty"]).assert().success();

    env.gm()
        .args(["export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_existing_file_needs_force() {
    let env = TestEnv::new();
    env.gm().args(["--test", "init"]).assert().success();
    let out = env.path("existing.csv");
    fs::write(&out, "old").unwrap();

    env.gm()
        .args(["export", "--file", &out.to_string_lossy()])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "old");

    env.gm()
        .args(["export", "--file", &out.to_string_lossy(), "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with(HEADER));
}

#[test]
fn test_backup_plain_and_compressed() {
    let env = TestEnv::new();
    env.gm().args(["--test", "init"]).assert().success();

    let plain = env.path("backup/gears_copy.csv");
    env.gm()
        .args(["backup", "--file", &plain.to_string_lossy()])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert_eq!(fs::read_to_string(&plain).unwrap(), env.read_store());

    let zipped = env.path("backup/gears_zip.csv");
    env.gm()
        .args(["backup", "--file", &zipped.to_string_lossy(), "--compress"])
        .assert()
        .success();
    assert!(env.path("backup/gears_zip.zip").exists());
}

#[test]
fn test_checker_exits_zero_when_nothing_due() {
    let env = TestEnv::new();
    env.write_config("");
    env.write_store(&["NEW GEAR,,,,,,"]);

    env.checker().assert().success();
    assert!(env.read_store().contains("NEW GEAR,,,,,,"));
}

#[test]
fn test_checker_send_failure_exits_zero_and_keeps_flags() {
    let env = TestEnv::new();
    env.write_config("");
    let opened = days_ago(14).format("%Y-%m-%d").to_string();
    let due = today().format("%Y-%m-%d").to_string();
    env.write_store(&[&format!("LC-5,,,,{opened},{due},No")]);

    env.checker()
        .assert()
        .success()
        .stderr(contains("will retry on next run"));

    assert!(env.read_store().contains(&format!("LC-5,,,,{opened},{due},No")));
}

#[test]
fn test_checker_creates_missing_store() {
    let env = TestEnv::new();
    env.write_config("");

    env.checker().assert().success();
    assert_eq!(env.read_store().trim(), HEADER);
}

#[test]
fn test_config_without_store_key_uses_default_store() {
    let env = TestEnv::new();
    fs::write(
        env.path("gearminder.conf"),
        "email_from: reminders@example.com\nemail_to: maintainer@example.com\n",
    )
    .unwrap();

    env.checker().assert().success();

    // the default store lives in the config directory
    assert!(env.store().exists());

    env.gm()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("email_to: maintainer@example.com"));
}

#[test]
fn test_import_csv_in_old_layout() {
    let env = TestEnv::new();
    env.gm().args(["--test", "init"]).assert().success();

    let source = env.path("old_gears.csv");
    fs::write(
        &source,
        "Gear,TRTR Date,TRTR Reminder Sent,MNTT Date\nELD,2025-06-15,Yes,\n,2025-06-20,,\n",
    )
    .unwrap();
    let source = source.to_string_lossy().to_string();

    env.gm()
        .args(["import", "--file", &source])
        .assert()
        .failure()
        .stderr(contains("--force"));
    assert!(env.read_store().contains("RELAY ROOM & PANEL"));

    env.gm()
        .args(["import", "--file", &source, "--force"])
        .assert()
        .success()
        .stdout(contains("Imported 2 item(s)"));

    let content = env.read_store();
    assert!(content.contains("ELD,2025-06-15,2025-06-29,Yes,,,"));
    assert!(content.contains("UNNAMED ROW 2,2025-06-20,2025-07-04,No,,,"));
    assert!(!content.contains("RELAY ROOM & PANEL"));

    let kept = fs::read_to_string(env.path("gears.csv.pre-import")).unwrap();
    assert!(kept.contains("RELAY ROOM & PANEL"));
}
