// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::{Mode, RunOptions},
    core::net::{Fetch, Session},
    data::ResultTable,
    error::Result,
    output,
    progress::Progress,
    scrape::{docs, pep},
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// `None` for `download`, or when the first page could not be fetched.
    pub table: Option<ResultTable>,
    /// Result file, when the output sink writes one.
    pub written: Option<PathBuf>,
}

/// Top-level runner: session + cache, dispatch on mode, hand the table to
/// the selected output sink.
pub fn run(opts: &RunOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let session = Session::new(&opts.base_dir)?;
    if opts.clear_cache {
        session.clear_cache()?;
    }

    let table = run_mode(opts, &session, progress)?;
    let written = match &table {
        Some(t) => output::emit(t, opts)?,
        None => None,
    };
    Ok(RunSummary { table, written })
}

/// Dispatch on mode against any fetcher. No output is produced here.
pub fn run_mode(
    opts: &RunOptions,
    fetcher: &dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<Option<ResultTable>> {
    match opts.mode {
        Mode::WhatsNew => docs::whats_new(fetcher, &opts.sites.docs, progress),
        Mode::LatestVersions => docs::latest_versions(fetcher, &opts.sites.docs),
        Mode::Download => {
            docs::download(fetcher, &opts.sites.docs, &opts.base_dir)?;
            Ok(None)
        }
        Mode::Pep => {
            let Some(report) = pep::run(fetcher, &opts.sites.peps, progress)? else {
                return Ok(None);
            };
            if let Some(drift) = &report.drift {
                logf!("Mismatched statuses:");
                logf!("{}", drift);
            }
            Ok(Some(report.table))
        }
    }
}
