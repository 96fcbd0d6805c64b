// src/data.rs
//
// Value types shared by the scrape pipeline, the report builder and the
// output sinks.

use std::collections::BTreeMap;

/// One PEP as listed on the index: what its status is allowed to be, and
/// where its own page lives. Two index rows with the same pair are the same
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProposalRecord {
    pub expected: &'static [&'static str],
    pub link: String,
}

impl ProposalRecord {
    pub fn new(expected: &'static [&'static str], link: impl Into<String>) -> Self {
        Self { expected, link: link.into() }
    }

    pub fn accepts(&self, status: &str) -> bool {
        self.expected.contains(&status)
    }
}

/// A PEP whose own page disagrees with the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub link: String,
    pub observed: String,
    pub expected: &'static [&'static str],
}

/// Tallies from one reconciliation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciliationOutcome {
    /// Observed status -> number of PEP pages carrying it, ordered by status.
    pub counts: BTreeMap<String, usize>,
    /// In the order they were encountered.
    pub mismatches: Vec<Mismatch>,
    /// Unique records handed to the reconciler.
    pub total: usize,
    /// Records whose page could not be fetched.
    pub skipped: usize,
}

impl ReconciliationOutcome {
    pub fn new(total: usize) -> Self {
        Self { total, ..Self::default() }
    }

    /// Count `observed` and log a mismatch if the record does not allow it.
    pub fn observe(&mut self, record: &ProposalRecord, observed: String) {
        if !record.accepts(&observed) {
            self.mismatches.push(Mismatch {
                link: record.link.clone(),
                observed: observed.clone(),
                expected: record.expected,
            });
        }
        *self.counts.entry(observed).or_insert(0) += 1;
    }

    pub fn skip(&mut self) {
        self.skipped += 1;
    }

    /// Pages whose status was read.
    pub fn classified(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Rows of text. The first row is the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    rows: Vec<Vec<String>>,
}

impl ResultTable {
    pub fn with_header(header: Vec<String>) -> Self {
        Self { rows: vec![header] }
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Every row, header included.
    pub fn rows(&self) -> &[Vec<String>] { &self.rows }

    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Rows after the header.
    pub fn body(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}
