//! In-memory ticket store.

use crate::domain::BoardingPass;

use super::TicketStore;
use super::error::TicketStoreError;

/// Keeps saved passes in a `Vec`.
///
/// Can be set up to reject every save, to exercise failure handling.
#[derive(Debug, Clone, Default)]
pub struct MemoryTicketStore {
    passes: Vec<BoardingPass>,
    reject_with: Option<String>,
}

impl MemoryTicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every save fails with `message`.
    pub fn rejecting(message: impl Into<String>) -> Self {
        Self {
            passes: Vec::new(),
            reject_with: Some(message.into()),
        }
    }

    /// Passes saved so far, oldest first.
    pub fn passes(&self) -> &[BoardingPass] {
        &self.passes
    }
}

impl TicketStore for MemoryTicketStore {
    fn save(&mut self, pass: &BoardingPass) -> Result<(), TicketStoreError> {
        if let Some(message) = &self.reject_with {
            return Err(TicketStoreError::Rejected {
                message: message.clone(),
            });
        }
        self.passes.push(pass.clone());
        Ok(())
    }
}
