//! The in-memory catalog and its operations.
//!
//! `Catalog` is the only mutator of the record collection. Every mutating
//! operation persists the full collection through the store before it
//! returns; if persistence fails, the in-memory change is rolled back, so
//! an operation either fully applies or not at all.

use crate::error::{Result, ShelfError};
use crate::model::{Record, Status};
use crate::store::{LoadOutcome, RecordStore};
use std::fmt;
use std::str::FromStr;

/// The record fields a search can match against. One explicit branch per
/// field; anything else is rejected when the field name is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    Year,
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchField::Title => write!(f, "title"),
            SearchField::Author => write!(f, "author"),
            SearchField::Year => write!(f, "year"),
        }
    }
}

impl FromStr for SearchField {
    type Err = ShelfError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "author" => Ok(SearchField::Author),
            "year" => Ok(SearchField::Year),
            other => Err(ShelfError::InvalidField(other.to_string())),
        }
    }
}

/// How the backing store looked when the catalog was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadReport {
    /// This many records were read from the backing store.
    Loaded(usize),
    /// Backing store absent or empty.
    Empty,
    /// Backing store present but unparseable; starting with an empty
    /// catalog. Worth telling the operator about.
    Corrupt,
}

/// The ordered, in-memory record collection, backed by a [`RecordStore`].
pub struct Catalog<S: RecordStore> {
    store: S,
    records: Vec<Record>,
}

impl<S: RecordStore> Catalog<S> {
    /// Load the collection from the store. The store is read exactly once;
    /// afterwards the in-memory collection is the single read path.
    pub fn open(store: S) -> Result<(Self, LoadReport)> {
        let (records, report) = match store.load()? {
            LoadOutcome::Records(records) => {
                let count = records.len();
                (records, LoadReport::Loaded(count))
            }
            LoadOutcome::Empty => (Vec::new(), LoadReport::Empty),
            LoadOutcome::Corrupt => (Vec::new(), LoadReport::Corrupt),
        };
        Ok((Self { store, records }, report))
    }

    /// Next free identifier: one past the highest id currently present, or
    /// 1 on an empty catalog. Deleted ids are not reused while a higher id
    /// remains in the collection.
    pub fn next_id(&self) -> u64 {
        self.records.iter().map(|r| r.id).max().unwrap_or(0) + 1
    }

    /// Append a new record with a fresh id and default status, and persist.
    /// Duplicate titles are allowed here; warning about them is the
    /// caller's concern.
    pub fn add(&mut self, title: String, author: String, year: i32) -> Result<Record> {
        let record = Record::new(self.next_id(), title, author, year);
        self.records.push(record.clone());
        if let Err(e) = self.store.save(&self.records) {
            self.records.pop();
            return Err(e);
        }
        Ok(record)
    }

    /// Remove the record with the given id and persist. Returns the removed
    /// record, or `RecordNotFound` with nothing mutated or persisted.
    pub fn delete(&mut self, id: u64) -> Result<Record> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(ShelfError::RecordNotFound(id))?;
        let removed = self.records.remove(pos);
        if let Err(e) = self.store.save(&self.records) {
            self.records.insert(pos, removed);
            return Err(e);
        }
        Ok(removed)
    }

    /// Case-insensitive substring match of `query` against the textual form
    /// of one field, in collection order.
    pub fn search(&self, query: &str, field: SearchField) -> Vec<&Record> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                let haystack = match field {
                    SearchField::Title => r.title.to_lowercase(),
                    SearchField::Author => r.author.to_lowercase(),
                    SearchField::Year => r.year.to_string(),
                };
                haystack.contains(&needle)
            })
            .collect()
    }

    /// The full collection, in insertion order. Deletions do not reorder
    /// the remaining entries.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn find(&self, id: u64) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// True if some record already carries this exact title.
    pub fn has_title(&self, title: &str) -> bool {
        self.records.iter().any(|r| r.title == title)
    }

    /// Flip the status of the record with the given id and persist. On
    /// `RecordNotFound`, nothing is mutated or persisted. Illegal status
    /// strings never reach this point: [`Status`] parsing rejects them.
    pub fn set_status(&mut self, id: u64, status: Status) -> Result<&Record> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(ShelfError::RecordNotFound(id))?;
        let previous = self.records[pos].status;
        self.records[pos].status = status;
        if let Err(e) = self.store.save(&self.records) {
            self.records[pos].status = previous;
            return Err(e);
        }
        Ok(&self.records[pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    /// Store whose saves fail on demand, for rollback tests.
    struct FlakyStore {
        inner: InMemoryStore,
        fail_saves: bool,
    }

    impl FlakyStore {
        fn new() -> Self {
            Self {
                inner: InMemoryStore::new(),
                fail_saves: false,
            }
        }
    }

    impl RecordStore for FlakyStore {
        fn load(&self) -> Result<LoadOutcome> {
            self.inner.load()
        }

        fn save(&mut self, records: &[Record]) -> Result<()> {
            if self.fail_saves {
                return Err(ShelfError::Store("save failed".to_string()));
            }
            self.inner.save(records)
        }
    }

    fn empty_catalog() -> Catalog<InMemoryStore> {
        let (catalog, report) = Catalog::open(InMemoryStore::new()).unwrap();
        assert_eq!(report, LoadReport::Empty);
        catalog
    }

    fn dune_and_foundation() -> Catalog<InMemoryStore> {
        let mut catalog = empty_catalog();
        catalog
            .add("Dune".into(), "Frank Herbert".into(), 1965)
            .unwrap();
        catalog
            .add("Foundation".into(), "Isaac Asimov".into(), 1951)
            .unwrap();
        catalog
    }

    #[test]
    fn open_reports_record_count_from_store() {
        let store = InMemoryStore::with_records(vec![
            Record::new(1, "Dune".into(), "Frank Herbert".into(), 1965),
            Record::new(2, "Foundation".into(), "Isaac Asimov".into(), 1951),
        ]);
        let (catalog, report) = Catalog::open(store).unwrap();
        assert_eq!(report, LoadReport::Loaded(2));
        assert_eq!(catalog.records().len(), 2);
    }

    #[test]
    fn open_on_corrupt_store_starts_empty_and_says_so() {
        let (catalog, report) = Catalog::open(InMemoryStore::corrupt()).unwrap();
        assert_eq!(report, LoadReport::Corrupt);
        assert!(catalog.records().is_empty());
    }

    #[test]
    fn next_id_on_empty_catalog_is_one() {
        assert_eq!(empty_catalog().next_id(), 1);
    }

    #[test]
    fn ids_are_strictly_increasing_across_interleaved_deletes() {
        let mut catalog = empty_catalog();
        let a = catalog.add("A".into(), "x".into(), 2000).unwrap();
        let b = catalog.add("B".into(), "x".into(), 2001).unwrap();
        catalog.delete(a.id).unwrap();
        let c = catalog.add("C".into(), "x".into(), 2002).unwrap();

        assert_eq!((a.id, b.id, c.id), (1, 2, 3));

        let ids: Vec<u64> = catalog.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn deleted_highest_id_is_reused_only_when_catalog_empties() {
        let mut catalog = empty_catalog();
        let only = catalog.add("A".into(), "x".into(), 2000).unwrap();
        assert_eq!(only.id, 1);
        catalog.delete(1).unwrap();

        // Back to an empty catalog, so ids start over at 1.
        let next = catalog.add("B".into(), "x".into(), 2001).unwrap();
        assert_eq!(next.id, 1);
    }

    #[test]
    fn add_persists_the_full_collection() {
        let mut catalog = empty_catalog();
        let record = catalog
            .add("Dune".into(), "Herbert".into(), 1965)
            .unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.status, Status::Available);

        assert_eq!(catalog.store.records(), catalog.records());
        assert_eq!(catalog.store.saves(), 1);
    }

    #[test]
    fn add_allows_duplicate_titles() {
        let mut catalog = empty_catalog();
        catalog.add("Dune".into(), "Herbert".into(), 1965).unwrap();
        let second = catalog.add("Dune".into(), "Herbert".into(), 1965).unwrap();
        assert_eq!(second.id, 2);
        assert!(catalog.has_title("Dune"));
    }

    #[test]
    fn delete_removes_exactly_the_matching_record() {
        let mut catalog = dune_and_foundation();
        let removed = catalog.delete(1).unwrap();
        assert_eq!(removed.title, "Dune");

        let titles: Vec<&str> = catalog.records().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Foundation"]);
        assert!(catalog.find(1).is_none());
        assert!(catalog.search("dune", SearchField::Title).is_empty());
    }

    #[test]
    fn delete_of_absent_id_is_not_found_and_does_not_persist() {
        let mut catalog = dune_and_foundation();
        let saves_before = catalog.store.saves();

        match catalog.delete(1) {
            Ok(_) => {}
            Err(e) => panic!("first delete should succeed: {}", e),
        }
        match catalog.delete(1) {
            Err(ShelfError::RecordNotFound(1)) => {}
            other => panic!("Expected RecordNotFound, got {:?}", other.map(|r| r.id)),
        }

        assert_eq!(catalog.records().len(), 1);
        assert_eq!(catalog.store.saves(), saves_before + 1);
    }

    #[test]
    fn search_is_case_insensitive_substring_match() {
        let catalog = dune_and_foundation();

        let hits = catalog.search("dune", SearchField::Title);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Dune");

        assert!(catalog.search("xyz", SearchField::Title).is_empty());
    }

    #[test]
    fn search_dispatches_on_the_named_field_only() {
        let catalog = dune_and_foundation();

        assert_eq!(catalog.search("asimov", SearchField::Author).len(), 1);
        assert!(catalog.search("asimov", SearchField::Title).is_empty());

        let by_year = catalog.search("195", SearchField::Year);
        assert_eq!(by_year.len(), 1);
        assert_eq!(by_year[0].title, "Foundation");
    }

    #[test]
    fn search_returns_matches_in_collection_order() {
        let mut catalog = dune_and_foundation();
        catalog
            .add("Dune Messiah".into(), "Frank Herbert".into(), 1969)
            .unwrap();

        let hits = catalog.search("herbert", SearchField::Author);
        let titles: Vec<&str> = hits.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Dune", "Dune Messiah"]);
    }

    #[test]
    fn search_field_parsing_accepts_the_three_fields_only() {
        assert_eq!("title".parse::<SearchField>().unwrap(), SearchField::Title);
        assert_eq!(" Author ".parse::<SearchField>().unwrap(), SearchField::Author);
        assert_eq!("YEAR".parse::<SearchField>().unwrap(), SearchField::Year);

        match "isbn".parse::<SearchField>() {
            Err(ShelfError::InvalidField(f)) => assert_eq!(f, "isbn"),
            other => panic!("Expected InvalidField, got {:?}", other),
        }
    }

    #[test]
    fn list_preserves_insertion_order() {
        let catalog = dune_and_foundation();
        let titles: Vec<&str> = catalog.records().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Dune", "Foundation"]);
    }

    #[test]
    fn set_status_round_trips() {
        let mut catalog = dune_and_foundation();

        let updated = catalog.set_status(1, Status::CheckedOut).unwrap();
        assert_eq!(updated.status, Status::CheckedOut);
        assert_eq!(catalog.store.records()[0].status, Status::CheckedOut);

        let restored = catalog.set_status(1, Status::Available).unwrap();
        assert_eq!(restored.status, Status::Available);
        assert_eq!(catalog.store.records()[0].status, Status::Available);
    }

    #[test]
    fn set_status_on_absent_id_is_not_found_and_does_not_persist() {
        let mut catalog = dune_and_foundation();
        let saves_before = catalog.store.saves();

        match catalog.set_status(99, Status::CheckedOut) {
            Err(ShelfError::RecordNotFound(99)) => {}
            other => panic!("Expected RecordNotFound, got {:?}", other.map(|r| r.id)),
        }
        assert_eq!(catalog.store.saves(), saves_before);
    }

    #[test]
    fn failed_save_rolls_back_add() {
        let (mut catalog, _) = Catalog::open(FlakyStore::new()).unwrap();
        catalog.add("Dune".into(), "Herbert".into(), 1965).unwrap();

        catalog.store.fail_saves = true;
        assert!(catalog.add("Foundation".into(), "Asimov".into(), 1951).is_err());

        assert_eq!(catalog.records().len(), 1);
        assert_eq!(catalog.next_id(), 2);
    }

    #[test]
    fn failed_save_rolls_back_delete() {
        let (mut catalog, _) = Catalog::open(FlakyStore::new()).unwrap();
        catalog.add("Dune".into(), "Herbert".into(), 1965).unwrap();
        catalog.add("Foundation".into(), "Asimov".into(), 1951).unwrap();

        catalog.store.fail_saves = true;
        assert!(catalog.delete(1).is_err());

        let titles: Vec<&str> = catalog.records().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Dune", "Foundation"]);
    }

    #[test]
    fn failed_save_rolls_back_status_change() {
        let (mut catalog, _) = Catalog::open(FlakyStore::new()).unwrap();
        catalog.add("Dune".into(), "Herbert".into(), 1965).unwrap();

        catalog.store.fail_saves = true;
        assert!(catalog.set_status(1, Status::CheckedOut).is_err());
        assert_eq!(catalog.records()[0].status, Status::Available);
    }

    #[test]
    fn reopening_from_the_same_store_reproduces_the_collection() {
        let mut catalog = dune_and_foundation();
        catalog.set_status(2, Status::CheckedOut).unwrap();
        let snapshot = catalog.records().to_vec();

        let store = InMemoryStore::with_records(catalog.store.records().to_vec());
        let (reloaded, report) = Catalog::open(store).unwrap();
        assert_eq!(report, LoadReport::Loaded(2));
        assert_eq!(reloaded.records(), snapshot.as_slice());
    }
}
