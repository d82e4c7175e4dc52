//! Ticket store error types.

/// Errors that can occur when saving a boarding pass.
#[derive(Debug, thiserror::Error)]
pub enum TicketStoreError {
    /// Writing to the backing file failed
    #[error("ticket store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The pass could not be serialized
    #[error("failed to serialize boarding pass: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The store refused the pass
    #[error("ticket store rejected the booking: {message}")]
    Rejected { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TicketStoreError::Rejected {
            message: "disk full".into(),
        };
        assert_eq!(
            err.to_string(),
            "ticket store rejected the booking: disk full"
        );

        let err = TicketStoreError::from(std::io::Error::other("boom"));
        assert_eq!(err.to_string(), "ticket store I/O error: boom");
    }
}
