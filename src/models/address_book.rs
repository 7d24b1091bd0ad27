//! The address book: contact records keyed by name.

use super::record::Record;
use indexmap::map::{IndexMap, Iter};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use tracing::debug;

/// A collection of [`Record`]s keyed by contact name.
///
/// Each name maps to exactly one record; adding a record under an existing
/// name replaces the old one in place. Iteration follows the order in which
/// names were first added.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(into = "Vec<Record>", from = "Vec<Record>")]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record already filed there.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_some() {
            debug!(contact = %key, "Record replaced");
        } else {
            debug!(contact = %key, "Record added");
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for editing.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record filed under `name`. Missing names are ignored.
    pub fn delete(&mut self, name: &str) {
        if self.records.shift_remove(name).is_some() {
            debug!(contact = %name, "Record deleted");
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, String, Record> {
        self.records.iter()
    }

    /// Contact names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Lazily render the book in pages of up to `page_size` entries.
    ///
    /// Each page is a string of `"{name}: {record}\n"` lines. The last page
    /// may be shorter, and an empty book yields no pages. A `page_size` of
    /// zero is treated as one.
    ///
    /// The returned iterator borrows the book, so it cannot be held across a
    /// mutation.
    pub fn pages(&self, page_size: usize) -> Pages<'_> {
        debug!(page_size = page_size, entries = self.len(), "Paging address book");
        Pages {
            entries: self.records.iter(),
            page_size: page_size.max(1),
        }
    }
}

// Snapshots are a plain list of records; keys are rebuilt from record names.
impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        let mut book = Self::new();
        for record in records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records.into_values().collect()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = (&'a String, &'a Record);
    type IntoIter = Iter<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over rendered pages of an [`AddressBook`].
///
/// Created by [`AddressBook::pages`]. Each call to `next` walks at most
/// `page_size` further entries.
#[derive(Debug)]
pub struct Pages<'a> {
    entries: Iter<'a, String, Record>,
    page_size: usize,
}

impl Iterator for Pages<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut page = String::new();
        for (name, record) in self.entries.by_ref().take(self.page_size) {
            // Writing to a String cannot fail.
            let _ = writeln!(page, "{}: {}", name, record);
        }

        if page.is_empty() {
            None
        } else {
            Some(page)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entries.len();
        let pages = remaining.div_ceil(self.page_size);
        (pages, Some(pages))
    }
}

impl ExactSizeIterator for Pages<'_> {}

impl std::iter::FusedIterator for Pages<'_> {}
