// src/cli.rs
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use crate::{
    config::{
        consts::{MAIN_DOC_URL, MAIN_PEP_URL},
        options::{Mode, OutputKind, RunOptions, Sites},
    },
    progress::Progress,
    runner,
};

/// Python docs and PEP index scraper.
#[derive(Debug, Parser)]
#[command(name = "pep_scrape", version, about)]
pub struct Cli {
    /// Parser mode
    #[arg(value_enum)]
    pub mode: Mode,

    /// Clear the HTTP cache before running
    #[arg(short, long)]
    pub clear_cache: bool,

    /// Output sink (default: plain lines on stdout)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputKind>,

    #[arg(long, env = "PEP_SCRAPE_DOCS_URL", default_value = MAIN_DOC_URL, hide = true)]
    pub docs_url: String,

    #[arg(long, env = "PEP_SCRAPE_PEP_URL", default_value = MAIN_PEP_URL, hide = true)]
    pub pep_url: String,

    /// Root for logs/, results/, downloads/ and the cache
    #[arg(long, default_value = ".", hide = true)]
    pub base_dir: PathBuf,
}

impl Cli {
    pub fn into_options(self) -> RunOptions {
        RunOptions {
            mode: self.mode,
            clear_cache: self.clear_cache,
            output: self.output,
            sites: Sites { docs: self.docs_url, peps: self.pep_url },
            base_dir: self.base_dir,
        }
    }
}

/// One-line counter on stderr, redrawn in place.
#[derive(Default)]
pub struct TermProgress {
    label: String,
    done: usize,
    total: usize,
}

impl Progress for TermProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        self.label = s!(msg);
    }
    fn item_done(&mut self, _url: &str) {
        self.done += 1;
        // stderr counter is best-effort
        let mut err = std::io::stderr().lock();
        let _ = write!(err, "\r{} {}/{}", self.label, self.done, self.total);
        let _ = err.flush();
    }
    fn finish(&mut self) {
        if self.done > 0 {
            eprintln!();
        }
    }
}

pub fn run() -> color_eyre::Result<()> {
    let opts = Cli::parse().into_options();

    crate::log::init(&opts.base_dir);
    logf!("Parser started");
    logf!("Command line arguments: {:?}", opts);

    let mut progress = TermProgress::default();
    runner::run(&opts, Some(&mut progress))?;

    logf!("Parser finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mode_and_flags() {
        let cli = Cli::try_parse_from(["pep_scrape", "pep", "-c", "-o", "file"]).unwrap();
        let opts = cli.into_options();
        assert_eq!(opts.mode, Mode::Pep);
        assert!(opts.clear_cache);
        assert_eq!(opts.output, Some(OutputKind::File));
    }

    #[test]
    fn kebab_case_modes() {
        for (arg, mode) in [
            ("whats-new", Mode::WhatsNew),
            ("latest-versions", Mode::LatestVersions),
            ("download", Mode::Download),
        ] {
            let cli = Cli::try_parse_from(["pep_scrape", arg]).unwrap();
            assert_eq!(cli.mode, mode);
            assert_eq!(cli.mode.as_str(), arg);
            assert_eq!(cli.output, None);
        }
    }

    #[test]
    fn mode_is_required_and_checked() {
        assert!(Cli::try_parse_from(["pep_scrape"]).is_err());
        assert!(Cli::try_parse_from(["pep_scrape", "players"]).is_err());
        assert!(Cli::try_parse_from(["pep_scrape", "pep", "--output", "tsv"]).is_err());
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
