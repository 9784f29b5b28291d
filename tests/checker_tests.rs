use gearminder::core::checker::Checker;
use gearminder::core::remind::{REMINDER_SUBJECT, ReminderLogic, SweepOutcome, build_body};
use gearminder::core::schedule::due_sweep;
use gearminder::models::{GearTable, ReminderState, Track};
use gearminder::notify::{Ack, Notifier, NotifyError, SmtpNotifier};
use gearminder::store::{CsvStore, MemoryStore, RecordStore};
use std::cell::RefCell;
use std::time::Duration;

mod common;
use common::{TestEnv, ymd};

/// Records every message instead of sending it.
#[derive(Default)]
struct RecordingNotifier {
    sent: RefCell<Vec<(String, String)>>,
}

impl Notifier for RecordingNotifier {
    fn send(&self, subject: &str, body: &str) -> Result<Ack, NotifyError> {
        self.sent
            .borrow_mut()
            .push((subject.to_string(), body.to_string()));
        Ok(Ack {
            channel: "recording".to_string(),
            recipients: 1,
        })
    }

    fn channel_name(&self) -> &str {
        "recording"
    }
}

/// Always fails like an unreachable SMTP server.
struct FailingNotifier;

impl Notifier for FailingNotifier {
    fn send(&self, _subject: &str, _body: &str) -> Result<Ack, NotifyError> {
        Err(NotifyError::Smtp("connection refused".to_string()))
    }

    fn channel_name(&self) -> &str {
        "failing"
    }
}

fn table_due_on(today: chrono::NaiveDate) -> GearTable {
    let opened = today - chrono::Days::new(14);
    let mut table = GearTable::new();
    table.upsert_by_name("LC-5", Track::Mntt, opened).unwrap();
    table
        .upsert_by_name("POINTS - KTYM SIDE", Track::Trtr, opened)
        .unwrap();
    table
        .upsert_by_name("POINTS - KTYM SIDE", Track::Mntt, ymd(2025, 1, 1))
        .unwrap();
    table.add_equipment("NEW GEAR").unwrap();
    table
}

#[test]
fn test_checker_sends_one_email_and_marks() {
    let today = ymd(2025, 7, 1);
    let mut store = MemoryStore::with_table(table_due_on(today));
    let notifier = RecordingNotifier::default();

    let outcome = Checker::run(&mut store, today, || Ok(&notifier)).unwrap();

    assert!(matches!(outcome, SweepOutcome::Notified { marked: 2, .. }));
    assert_eq!(store.save_count(), 1);

    let sent = notifier.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "Gear Reminder - Action Needed Today");
    assert_eq!(
        sent[0].1,
        "Gear: POINTS - KTYM SIDE - TRTR needs to be opened today! (Next Open: 2025-07-01)\n\
         Gear: LC-5 - MNTT needs to be opened today! (Next Open: 2025-07-01)"
    );

    let saved = store.table();
    assert_eq!(
        saved.find("LC-5").unwrap().mntt.reminder(),
        ReminderState::Notified
    );
    assert_eq!(
        saved.find("POINTS - KTYM SIDE").unwrap().mntt.reminder(),
        ReminderState::Pending
    );
}

#[test]
fn test_checker_second_run_same_day_sends_nothing() {
    let today = ymd(2025, 7, 1);
    let mut store = MemoryStore::with_table(table_due_on(today));
    let notifier = RecordingNotifier::default();

    Checker::run(&mut store, today, || Ok(&notifier)).unwrap();
    let outcome = Checker::run(&mut store, today, || Ok(&notifier)).unwrap();

    assert!(matches!(outcome, SweepOutcome::NothingDue));
    assert_eq!(notifier.sent.borrow().len(), 1);
    assert_eq!(store.save_count(), 1);
}

#[test]
fn test_failed_send_leaves_flags_and_store_untouched() {
    let today = ymd(2025, 7, 1);
    let before = table_due_on(today);
    let mut store = MemoryStore::with_table(before.clone());

    let outcome = Checker::run(&mut store, today, || Ok(FailingNotifier)).unwrap();

    match &outcome {
        SweepOutcome::Failed { due, error } => {
            assert_eq!(due.len(), 2);
            assert!(error.to_string().contains("connection refused"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(store.save_count(), 0);
    assert_eq!(store.table(), &before);

    // next sweep on the same day still selects the record
    let notifier = RecordingNotifier::default();
    let retry = Checker::run(&mut store, today, || Ok(&notifier)).unwrap();
    assert_eq!(retry.due().len(), 2);
    assert!(retry.table_changed());
}

#[test]
fn test_notifier_is_not_built_when_nothing_is_due() {
    let mut store = MemoryStore::with_table(table_due_on(ymd(2025, 7, 1)));

    let outcome = Checker::run(&mut store, ymd(2025, 7, 2), || -> Result<FailingNotifier, _> {
        panic!("notifier must not be built")
    })
    .unwrap();

    assert!(matches!(outcome, SweepOutcome::NothingDue));
    assert_eq!(store.save_count(), 0);
}

#[test]
fn test_notifier_build_error_counts_as_failure() {
    let today = ymd(2025, 7, 1);
    let mut store = MemoryStore::with_table(table_due_on(today));

    let outcome = Checker::run(&mut store, today, || -> Result<FailingNotifier, _> {
        Err(NotifyError::Config("recipient address (email_to) is not set".into()))
    })
    .unwrap();

    assert!(outcome.is_failure());
    assert_eq!(due_sweep(store.table(), today).len(), 2);
}

#[test]
fn test_checker_against_csv_store() {
    let env = TestEnv::new();
    let today = ymd(2025, 7, 1);
    let mut store = CsvStore::new(env.store());
    store.save(&table_due_on(today)).unwrap();

    let notifier = RecordingNotifier::default();
    Checker::run(&mut store, today, || Ok(&notifier)).unwrap();

    let content = env.read_store();
    assert!(content.contains("LC-5,,,,2025-06-17,2025-07-01,Yes"));
    assert!(content.contains("NEW GEAR,,,,,,"));
}

#[test]
fn test_sweep_and_notify_with_plain_notifier() {
    let today = ymd(2025, 7, 1);
    let mut table = table_due_on(today);
    let notifier = RecordingNotifier::default();

    let outcome = ReminderLogic::sweep_and_notify(&mut table, &notifier, today);

    assert_eq!(outcome.due().len(), 2);
    assert_eq!(notifier.sent.borrow()[0].0, REMINDER_SUBJECT);
    assert_eq!(notifier.sent.borrow()[0].1, build_body(outcome.due()));
    assert!(due_sweep(&table, today).is_empty());
}

#[test]
fn test_smtp_notifier_rejects_bad_addresses() {
    let build = |from: &str, to: &str| {
        SmtpNotifier::new(
            "smtp.example.com",
            465,
            true,
            Duration::from_secs(5),
            from,
            to,
            None,
        )
    };

    assert!(build("reminders@example.com", "maintainer@example.com").is_ok());

    let err = build("not-an-email", "maintainer@example.com").unwrap_err();
    assert!(matches!(err, NotifyError::Config(_)), "got: {err}");

    let err = build("reminders@example.com", "").unwrap_err();
    assert!(err.to_string().contains("invalid recipient"), "got: {err}");
}

#[test]
fn test_smtp_notifier_plain_and_starttls_build() {
    for (port, tls) in [(587, true), (25, false)] {
        let notifier = SmtpNotifier::new(
            "localhost",
            port,
            tls,
            Duration::from_secs(1),
            "Reminders <reminders@example.com>",
            "maintainer@example.com",
            Some(("reminders@example.com".into(), "secret".into())),
        )
        .unwrap();
        assert_eq!(notifier.channel_name(), "email");
    }
}
