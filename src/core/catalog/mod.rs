//! Message catalog built from extraction records.
//!
//! ## Module Structure
//!
//! - `po`: PO/POT reading and writing (PoFile, PoEntry, CatalogHeader)
//! - `merge`: Bringing an existing `.po` up to date with the template

mod merge;
mod po;

use std::collections::HashMap;

use crate::core::ExtractionRecord;

pub use merge::{MergeStats, merge};
pub use po::{CatalogHeader, PoEntry, PoFile};

/// One msgid with every place it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub msgid: String,
    /// `path:line`, without duplicates, in first-seen order.
    pub references: Vec<String>,
    pub comments: Vec<String>,
}

impl CatalogEntry {
    fn to_po_entry(&self) -> PoEntry {
        PoEntry {
            extracted_comments: self.comments.clone(),
            references: self.references.clone(),
            ..PoEntry::new(self.msgid.clone())
        }
    }
}

/// Unique msgids in first-sighting order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ExtractionRecord>,
    {
        let mut catalog = Self::default();
        for record in records {
            catalog.add(record);
        }
        catalog
    }

    /// Returns false when the record was left out (empty literal).
    pub fn add(&mut self, record: &ExtractionRecord) -> bool {
        if record.literal.is_empty() {
            return false;
        }

        let idx = match self.index.get(&record.literal) {
            Some(&idx) => idx,
            None => {
                self.entries.push(CatalogEntry {
                    msgid: record.literal.clone(),
                    references: Vec::new(),
                    comments: Vec::new(),
                });
                self.index
                    .insert(record.literal.clone(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };

        let entry = &mut self.entries[idx];
        let reference = record.reference();
        if !entry.references.contains(&reference) {
            entry.references.push(reference);
        }
        for comment in &record.comments {
            if !entry.comments.contains(comment) {
                entry.comments.push(comment.clone());
            }
        }
        true
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, msgid: &str) -> Option<&CatalogEntry> {
        self.index.get(msgid).map(|&idx| &self.entries[idx])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The template: every msgid with an empty msgstr.
    pub fn to_template(&self, header: &CatalogHeader) -> PoFile {
        PoFile {
            header: Some(header.to_entry()),
            entries: self.entries.iter().map(CatalogEntry::to_po_entry).collect(),
            ..Default::default()
        }
    }

    /// Rendered `.pot` text. Carries no timestamp, so unchanged sources
    /// give byte-identical output.
    pub fn render_pot(&self, header: &CatalogHeader) -> String {
        self.to_template(header).render()
    }
}
