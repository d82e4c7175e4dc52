//! File-backed ticket store.

use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use tracing::info;

use crate::domain::BoardingPass;

use super::TicketStore;
use super::error::TicketStoreError;

/// Stores each pass as one JSON object per line, appended to a file.
///
/// A record is serialized in full before the file is touched and then
/// written with a single call, so a failed save never leaves half a line
/// behind for the next reader to trip over.
#[derive(Debug, Clone)]
pub struct JsonLinesTicketStore {
    path: PathBuf,
}

impl JsonLinesTicketStore {
    /// Create a store appending to `path`. The file is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read back every saved pass, oldest first.
    ///
    /// A store that has never been written to is empty.
    pub fn load_all(&self) -> Result<Vec<BoardingPass>, TicketStoreError> {
        let file = match std::fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut passes = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            passes.push(serde_json::from_str(&line)?);
        }
        Ok(passes)
    }
}

impl TicketStore for JsonLinesTicketStore {
    fn save(&mut self, pass: &BoardingPass) -> Result<(), TicketStoreError> {
        let mut record = serde_json::to_string(pass)?;
        record.push('\n');

        // Create parent directories if needed
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
        file.write_all(record.as_bytes())?;
        file.sync_data()?;

        info!(
            path = %self.path.display(),
            train = %pass.train_id(),
            "Saved boarding pass"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Gender, Passenger, PhoneNumber, Train, TrainId, parse_timestamp};
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    fn pass(name: &str) -> BoardingPass {
        let passenger = Passenger {
            name: name.to_string(),
            email: "rider@example.com".to_string(),
            phone: PhoneNumber::parse("6169321023").unwrap(),
            gender: Gender::Male,
            age: 40,
        };
        let train = Train {
            id: TrainId(1),
            origin: "Holland".to_string(),
            destination: "Chicago".to_string(),
            departure: parse_timestamp("2024-01-01 10:00").unwrap(),
            distance: dec!(150),
            price: dec!(100),
        };
        let eta = parse_timestamp("2024-01-01 12:30").unwrap();
        BoardingPass::issue(passenger, &train, eta, dec!(100)).unwrap()
    }

    #[test]
    fn save_appends_one_line_per_pass() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tickets.jsonl");
        let mut store = JsonLinesTicketStore::new(&path);

        store.save(&pass("First")).unwrap();
        store.save(&pass("Second")).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].name(), "First");
        assert_eq!(loaded[1].name(), "Second");
        assert_eq!(loaded[0], pass("First"));
    }

    #[test]
    fn missing_file_loads_empty() {
        let store = JsonLinesTicketStore::new("/nonexistent/path/tickets.jsonl");
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dir").join("tickets.jsonl");
        let mut store = JsonLinesTicketStore::new(&path);

        store.save(&pass("Ada")).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempdir().unwrap();
        // A directory cannot be opened for appending.
        let mut store = JsonLinesTicketStore::new(dir.path());
        assert!(matches!(
            store.save(&pass("Ada")),
            Err(TicketStoreError::Io(_))
        ));
    }
}
