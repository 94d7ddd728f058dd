//! # Storage Layer
//!
//! The [`RecordStore`] trait is the boundary between the catalog and its
//! backing file. Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Keep catalog logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage. The whole collection
//!   lives in one pretty-printed JSON array, rewritten in full on every save.
//! - [`memory::InMemoryStore`]: In-memory storage for testing.
//!
//! ## Storage Format
//!
//! For `FileStore`, the backing file is a UTF-8 JSON array of objects, one
//! per record, five fields each (`id, title, author, year, status`), in
//! insertion order. Non-ASCII text is stored unescaped. There is no partial
//! update path: a save rewrites every record, every time.

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;

/// What the backing store held when it was read at startup.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Parsed records, in on-disk order.
    Records(Vec<Record>),
    /// Store absent or zero length. An empty catalog, not an error.
    Empty,
    /// Store present but not parseable. The catalog starts empty; the
    /// caller decides how to surface the diagnostic.
    Corrupt,
}

/// Abstract interface between the catalog and its durable copy.
pub trait RecordStore {
    /// Read the full collection. Called once, at catalog construction; the
    /// in-memory collection is the single read path afterwards.
    fn load(&self) -> Result<LoadOutcome>;

    /// Overwrite the backing store with the full collection, in the given
    /// order.
    fn save(&mut self, records: &[Record]) -> Result<()>;
}
