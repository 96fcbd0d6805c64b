// src/scrape/pep.rs
//
// PEP status reconciliation: index → every PEP page → tallies.
//
// Failure policy:
// - a page that cannot be fetched is skipped (logged by the fetcher);
// - a page that is fetched but lacks the expected markup aborts the run.

use std::collections::BTreeSet;

use url::Url;

use crate::{
    core::net::Fetch,
    data::{ProposalRecord, ReconciliationOutcome},
    error::Result,
    progress::Progress,
    report::{self, PepReport},
    specs::{pep_index, pep_page},
};

/// Fetch the index and collect its distinct records.
/// `Ok(None)` when the index itself could not be fetched.
pub fn collect(fetcher: &dyn Fetch, index_url: &str) -> Result<Option<BTreeSet<ProposalRecord>>> {
    let Some(page) = fetcher.fetch(index_url) else {
        return Ok(None);
    };
    let base = Url::parse(&page.url).or_else(|_| Url::parse(index_url))?;
    pep_index::parse_index(&page.text(), &base).map(Some)
}

/// Visit every record's page once and tally observed statuses.
pub fn reconcile(
    fetcher: &dyn Fetch,
    records: &BTreeSet<ProposalRecord>,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ReconciliationOutcome> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(records.len());
        p.log("Checking PEP pages…");
    }

    let result = tally(fetcher, records, &mut progress);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}

fn tally(
    fetcher: &dyn Fetch,
    records: &BTreeSet<ProposalRecord>,
    progress: &mut Option<&mut dyn Progress>,
) -> Result<ReconciliationOutcome> {
    let mut outcome = ReconciliationOutcome::new(records.len());

    for record in records {
        match fetcher.fetch(&record.link) {
            Some(page) => {
                let observed = pep_page::observed_status(&page.text())?;
                outcome.observe(record, observed);
            }
            None => outcome.skip(),
        }
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&record.link);
        }
    }

    if outcome.skipped > 0 {
        logf!("PEP pages: {} of {} could not be fetched", outcome.skipped, outcome.total);
    }
    Ok(outcome)
}

/// Whole `pep` mode: collect, reconcile, build the report.
/// `Ok(None)` when there was nothing to work on (index unavailable).
pub fn run(
    fetcher: &dyn Fetch,
    index_url: &str,
    progress: Option<&mut dyn Progress>,
) -> Result<Option<PepReport>> {
    let Some(records) = collect(fetcher, index_url)? else {
        return Ok(None);
    };
    logf!("PEP index: {} distinct records", records.len());

    let outcome = reconcile(fetcher, &records, progress)?;
    Ok(Some(report::build(&outcome)))
}
