//! Boarding pass receipts.
//!
//! A receipt is a short plain-text rendering of a booking, appended to a
//! single file so earlier receipts are never lost.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::domain::{BoardingPass, Train, format_timestamp};

/// Errors that can occur when writing a receipt.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptError {
    /// Writing to the receipt file failed
    #[error("failed to write receipt to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Renders a finished booking somewhere a passenger can read it.
pub trait ReceiptWriter {
    /// Write one receipt for `pass` on `train`.
    fn write(&mut self, pass: &BoardingPass, train: &Train) -> Result<(), ReceiptError>;
}

impl<W: ReceiptWriter + ?Sized> ReceiptWriter for &mut W {
    fn write(&mut self, pass: &BoardingPass, train: &Train) -> Result<(), ReceiptError> {
        (**self).write(pass, train)
    }
}

/// Render the text of a receipt.
///
/// Five lines, in order: passenger, route, times, contact, price. A blank
/// line follows so consecutive receipts in one file stay apart.
pub fn render_receipt(pass: &BoardingPass, train: &Train) -> String {
    format!(
        "Name: {}  Age: {}  Gender: {}\n\
         From: {}  To: {}\n\
         Departure: {}  Arrival: {}\n\
         Email: {}  Phone: {}\n\
         Ticket Price: ${}\n\
         \n",
        pass.name(),
        pass.age(),
        pass.gender(),
        train.origin,
        train.destination,
        format_timestamp(&train.departure),
        format_timestamp(&pass.eta()),
        pass.email(),
        pass.phone(),
        pass.ticket_price(),
    )
}

/// Appends receipts to a text file, creating it if needed.
#[derive(Debug, Clone)]
pub struct TextReceiptWriter {
    path: PathBuf,
}

impl TextReceiptWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn append(&self, text: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(text.as_bytes())?;
        file.flush()
    }
}

impl ReceiptWriter for TextReceiptWriter {
    fn write(&mut self, pass: &BoardingPass, train: &Train) -> Result<(), ReceiptError> {
        self.append(&render_receipt(pass, train))
            .map_err(|source| ReceiptError::Io {
                path: self.path.clone(),
                source,
            })?;
        info!(path = %self.path.display(), "Wrote receipt");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Gender, Passenger, PhoneNumber, TrainId, parse_timestamp};
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    fn booking() -> (BoardingPass, Train) {
        let passenger = Passenger {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            phone: PhoneNumber::parse("616-932-1023").unwrap(),
            gender: Gender::Female,
            age: 85,
        };
        let train = Train {
            id: TrainId(2),
            origin: "Grand Rapids".to_string(),
            destination: "Detroit".to_string(),
            departure: parse_timestamp("2024-01-01 23:00").unwrap(),
            distance: dec!(120),
            price: dec!(30.00),
        };
        let eta = parse_timestamp("2024-01-02 01:00").unwrap();
        let pass = BoardingPass::issue(passenger, &train, eta, dec!(12.00)).unwrap();
        (pass, train)
    }

    #[test]
    fn render_layout() {
        let (pass, train) = booking();
        assert_eq!(
            render_receipt(&pass, &train),
            "Name: Grace Hopper  Age: 85  Gender: Female\n\
             From: Grand Rapids  To: Detroit\n\
             Departure: 2024-01-01 23:00  Arrival: 2024-01-02 01:00\n\
             Email: grace@example.com  Phone: (616) 932-1023\n\
             Ticket Price: $12.00\n\
             \n"
        );
    }

    #[test]
    fn write_appends_never_truncates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("boarding_pass.txt");
        std::fs::write(&path, "earlier receipt\n").unwrap();

        let (pass, train) = booking();
        let mut writer = TextReceiptWriter::new(&path);
        writer.write(&pass, &train).unwrap();
        writer.write(&pass, &train).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("earlier receipt\n"));
        assert_eq!(contents.matches("Name: Grace Hopper").count(), 2);
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("receipts.txt");
        let (pass, train) = booking();

        TextReceiptWriter::new(&path).write(&pass, &train).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempdir().unwrap();
        let (pass, train) = booking();
        let err = TextReceiptWriter::new(dir.path())
            .write(&pass, &train)
            .unwrap_err();
        assert!(err.to_string().starts_with("failed to write receipt to"));
    }
}
