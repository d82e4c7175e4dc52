use std::io;
use std::process::ExitCode;

use train_booking::booking::{BookingConfig, BookingError, BookingSession};
use train_booking::domain::BoardingPass;
use train_booking::logging::init_logging;
use train_booking::prompt::Prompter;
use train_booking::receipt::TextReceiptWriter;
use train_booking::schedule::Schedule;
use train_booking::tickets::JsonLinesTicketStore;

fn main() -> ExitCode {
    init_logging();

    match book() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Booking failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn book() -> Result<BoardingPass, BookingError> {
    let config = BookingConfig::from_env()?;

    let schedule = Schedule::load(&config.schedule_path)?;
    let tickets = JsonLinesTicketStore::new(&config.tickets_path);
    let receipts = TextReceiptWriter::new(&config.receipt_path);
    let prompter = Prompter::new(io::stdin().lock(), io::stdout());

    BookingSession::new(schedule, tickets, receipts, config, prompter).run()
}
