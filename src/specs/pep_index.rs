// src/specs/pep_index.rs
//
// PEP index (`peps.python.org/`): one record per table row.
//
// Page shape:
//   <table class="pep-zero-table ..."><tbody>
//     <tr class="row-odd">
//       <td><abbr title="Standards Track, Final">SF</abbr></td>
//       <td><a class="pep reference internal" href="pep-0001/">1</a></td>
//       ...
//
// Rows alternate row-even/row-odd for striping only. A row without an <abbr>
// has the empty status code.

use std::collections::BTreeSet;

use url::Url;

use crate::{
    config::expected_statuses,
    core::html::{find_tag, not_found, Attr, Element},
    data::ProposalRecord,
    error::Result,
};

const TABLE_CLASS: &str = "pep-zero-table";
const ROW_CLASSES: &[&str] = &["row-even", "row-odd"];

/// Every distinct (expected statuses, link) pair listed on the index.
/// The same PEP listed in several tables collapses into one record.
pub fn parse_index(html: &str, base_url: &Url) -> Result<BTreeSet<ProposalRecord>> {
    let doc = Element::document(html);
    let mut records = BTreeSet::new();
    let mut rows_seen = 0usize;

    for table in doc.find_all("table", &[Attr::class(TABLE_CLASS)]) {
        let tbody = find_tag(&table, "tbody", &[])?;
        for tr in tbody.find_all("tr", &[Attr::AnyOf("class", ROW_CLASSES)]) {
            records.insert(parse_row(&tr, base_url)?);
            rows_seen += 1;
        }
    }

    logd!("PEP index: {} rows, {} distinct records", rows_seen, records.len());
    Ok(records)
}

fn parse_row(tr: &Element<'_>, base_url: &Url) -> Result<ProposalRecord> {
    let first_td = find_tag(tr, "td", &[])?;
    let expected = expected_statuses(&abbreviation(&first_td))?;

    let second_td = first_td
        .find_next_sibling("td", &[])
        .ok_or_else(|| not_found("td", &[]))?;
    let pep_link = [Attr::class("pep")];
    let a = find_tag(&second_td, "a", &pep_link)?;
    let href = a.attr("href").ok_or_else(|| not_found("a href", &pep_link))?;

    Ok(ProposalRecord::new(expected, base_url.join(href)?.as_str()))
}

/// Status code from the first cell: the `<abbr>` text minus its leading
/// type letter ("SF" -> "F", "I" -> ""). No `<abbr>` means "".
pub fn abbreviation(first_td: &Element<'_>) -> String {
    first_td
        .find("abbr", &[])
        .map(|abbr| abbr.text().trim().chars().skip(1).collect())
        .unwrap_or_default()
}
