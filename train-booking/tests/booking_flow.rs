//! End-to-end booking against the sample schedule and file-backed stores.

use std::io::Cursor;
use std::path::PathBuf;

use rust_decimal_macros::dec;
use tempfile::tempdir;

use train_booking::booking::{BookingConfig, BookingError, BookingSession};
use train_booking::domain::{Gender, TrainId, format_timestamp};
use train_booking::prompt::Prompter;
use train_booking::receipt::TextReceiptWriter;
use train_booking::schedule::{Schedule, ScheduleStore};
use train_booking::tickets::JsonLinesTicketStore;

fn sample_schedule_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/schedule.json")
}

fn answers(lines: &[&str]) -> Cursor<Vec<u8>> {
    let mut text = lines.join("\n");
    text.push('\n');
    Cursor::new(text.into_bytes())
}

#[test]
fn sample_schedule_lists() {
    let schedule = Schedule::load(sample_schedule_path()).unwrap();

    assert_eq!(
        schedule.list_origins().unwrap(),
        vec!["Grand Rapids", "Holland", "Kalamazoo", "Lansing"]
    );
    assert_eq!(
        schedule.list_destinations().unwrap(),
        vec!["Chicago", "Detroit", "Toronto"]
    );
    assert_eq!(
        schedule.list_dates("Chicago").unwrap(),
        vec!["2024-01-01", "2024-01-02"]
    );
    assert_eq!(
        schedule.list_times("2024-01-01", "Chicago").unwrap(),
        vec!["10:00", "14:30"]
    );
}

#[test]
fn books_and_persists_a_ticket() {
    let dir = tempdir().unwrap();
    let config = BookingConfig {
        schedule_path: sample_schedule_path(),
        tickets_path: dir.path().join("tickets.jsonl"),
        receipt_path: dir.path().join("boarding_pass.txt"),
        ..BookingConfig::default()
    };

    let schedule = Schedule::load(&config.schedule_path).unwrap();
    let tickets = JsonLinesTicketStore::new(&config.tickets_path);
    let receipts = TextReceiptWriter::new(&config.receipt_path);
    let mut out = Vec::new();
    let prompter = Prompter::new(
        answers(&[
            "Grace Hopper",
            "grace@example.com",
            "(616) 932-1023",
            "Female",
            "85",
            "4", // Lansing
            "3", // Toronto
            "1", // 2024-01-02
            "1", // 22:00
        ]),
        &mut out,
    );

    let pass = BookingSession::new(schedule, tickets, receipts, config.clone(), prompter)
        .run()
        .unwrap();

    // 1800 / 60 = 30 hours, crossing into the next day
    assert_eq!(pass.train_id(), TrainId(6));
    assert_eq!(pass.gender(), Gender::Female);
    assert_eq!(format_timestamp(&pass.eta()), "2024-01-04 04:00");
    assert_eq!(pass.ticket_price(), dec!(84.00));

    let saved = JsonLinesTicketStore::new(&config.tickets_path)
        .load_all()
        .unwrap();
    assert_eq!(saved, vec![pass]);

    let receipt = std::fs::read_to_string(&config.receipt_path).unwrap();
    assert!(receipt.contains("Name: Grace Hopper  Age: 85  Gender: Female"));
    assert!(receipt.contains("From: Lansing  To: Toronto"));
    assert!(receipt.contains("Departure: 2024-01-02 22:00  Arrival: 2024-01-04 04:00"));
    assert!(receipt.contains("Email: grace@example.com  Phone: (616) 932-1023"));
    assert!(receipt.contains("Ticket Price: $84.00"));
}

#[test]
fn second_booking_appends() {
    let dir = tempdir().unwrap();
    let tickets_path = dir.path().join("tickets.jsonl");
    let receipt_path = dir.path().join("boarding_pass.txt");

    for name in ["First Rider", "Second Rider"] {
        let schedule = Schedule::load(sample_schedule_path()).unwrap();
        let prompter = Prompter::new(
            answers(&[name, "r@example.com", "6169321023", "male", "40", "2", "2", "2", "1"]),
            Vec::new(),
        );
        BookingSession::new(
            schedule,
            JsonLinesTicketStore::new(&tickets_path),
            TextReceiptWriter::new(&receipt_path),
            BookingConfig::default(),
            prompter,
        )
        .run()
        .unwrap();
    }

    let saved = JsonLinesTicketStore::new(&tickets_path).load_all().unwrap();
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0].name(), "First Rider");
    assert_eq!(saved[1].name(), "Second Rider");
    // Holland to Detroit, 170.5 / 60 = 2.84 h
    assert_eq!(format_timestamp(&saved[0].eta()), "2024-01-02 10:05");
    assert_eq!(saved[0].ticket_price(), dec!(45.50));

    let receipts = std::fs::read_to_string(&receipt_path).unwrap();
    assert_eq!(receipts.matches("Ticket Price: $45.50").count(), 2);
}

#[test]
fn unwritable_ticket_store_fails_the_booking() {
    let dir = tempdir().unwrap();
    let receipt_path = dir.path().join("boarding_pass.txt");
    let schedule = Schedule::load(sample_schedule_path()).unwrap();
    let prompter = Prompter::new(
        answers(&["Ada", "a@example.com", "6169321023", "female", "30", "1", "1", "1", "1"]),
        Vec::new(),
    );

    let result = BookingSession::new(
        schedule,
        // A directory cannot be appended to.
        JsonLinesTicketStore::new(dir.path()),
        TextReceiptWriter::new(&receipt_path),
        BookingConfig::default(),
        prompter,
    )
    .run();

    assert!(matches!(result, Err(BookingError::Tickets(_))));
    assert!(!receipt_path.exists());
}
