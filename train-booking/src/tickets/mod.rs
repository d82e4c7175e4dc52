//! Ticket persistence.
//!
//! Booking hands each finished pass to a [`TicketStore`] exactly once.
//! The store decides how to keep it; a failed save must leave nothing
//! recorded for that pass.

mod error;
mod jsonl;
mod memory;

pub use error::TicketStoreError;
pub use jsonl::JsonLinesTicketStore;
pub use memory::MemoryTicketStore;

use crate::domain::BoardingPass;

/// Write-only sink for issued boarding passes.
pub trait TicketStore {
    /// Persist one pass, all or nothing.
    fn save(&mut self, pass: &BoardingPass) -> Result<(), TicketStoreError>;
}

impl<S: TicketStore + ?Sized> TicketStore for &mut S {
    fn save(&mut self, pass: &BoardingPass) -> Result<(), TicketStoreError> {
        (**self).save(pass)
    }
}
