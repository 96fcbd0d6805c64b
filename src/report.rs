// src/report.rs
//
// Reconciliation outcome → status table + drift report.

use crate::data::{Mismatch, ReconciliationOutcome, ResultTable};

pub const HEADERS: [&str; 2] = ["Status", "Count"];
pub const TOTAL_LABEL: &str = "Total";

/// What `pep` mode hands back: the table for the output sink, and the
/// mismatches rendered for the log (`None` when every PEP agreed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PepReport {
    pub table: ResultTable,
    pub drift: Option<String>,
}

/// Header, one row per observed status (ascending), then the total.
/// The total is the number of records examined, so it can exceed the sum of
/// the counts when some pages could not be fetched.
pub fn build(outcome: &ReconciliationOutcome) -> PepReport {
    let mut table = ResultTable::with_header(row![HEADERS[0], HEADERS[1]]);
    for (status, count) in &outcome.counts {
        table.push(row![status, count]);
    }
    table.push(row![TOTAL_LABEL, outcome.total]);

    PepReport { table, drift: drift_report(&outcome.mismatches) }
}

pub fn drift_report(mismatches: &[Mismatch]) -> Option<String> {
    if mismatches.is_empty() {
        return None;
    }
    let blocks: Vec<String> = mismatches.iter().map(drift_block).collect();
    Some(blocks.join("\n"))
}

fn drift_block(m: &Mismatch) -> String {
    format!(
        "\n{}\nStatus on page: {}\nExpected statuses: {}",
        m.link,
        m.observed,
        m.expected.join(", ")
    )
}
