//! Booking error types.
//!
//! Input mistakes are handled inside the prompts and never reach here.
//! Everything in [`BookingError`] ends the session.

use crate::domain::DomainError;
use crate::eta::EtaError;
use crate::prompt::PromptError;
use crate::receipt::ReceiptError;
use crate::schedule::ScheduleError;
use crate::tickets::TicketStoreError;

use super::config::ConfigError;
use super::session::BookingStep;

/// Errors that end a booking session.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// Reading answers or writing prompts failed, or the input ended
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// The schedule catalog could not answer a query
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// A menu came back from the catalog with nothing in it
    #[error("nothing to choose from at step {step}")]
    NothingToSelect { step: BookingStep },

    /// The arrival time could not be computed
    #[error(transparent)]
    Eta(#[from] EtaError),

    /// The pass could not be issued
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The ticket store did not accept the pass
    #[error("booking was not saved: {0}")]
    Tickets(#[from] TicketStoreError),

    /// The pass was saved but its receipt could not be written
    #[error("booking was saved but the receipt was not written: {0}")]
    Receipt(#[from] ReceiptError),

    /// Configuration was invalid
    #[error(transparent)]
    Config(#[from] ConfigError),
}
