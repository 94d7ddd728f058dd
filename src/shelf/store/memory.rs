use super::{LoadOutcome, RecordStore};
use crate::error::Result;
use crate::model::Record;

/// In-memory store for tests. Nothing outlives the struct.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<Record>,
    corrupt: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds records, as if loaded from disk.
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Simulates a present-but-unparseable backing file.
    pub fn corrupt() -> Self {
        Self {
            corrupt: true,
            ..Self::default()
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of times `save` has been called. Lets tests assert that an
    /// operation did not persist.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl RecordStore for InMemoryStore {
    fn load(&self) -> Result<LoadOutcome> {
        if self.corrupt {
            return Ok(LoadOutcome::Corrupt);
        }
        if self.records.is_empty() {
            return Ok(LoadOutcome::Empty);
        }
        Ok(LoadOutcome::Records(self.records.clone()))
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }
}
