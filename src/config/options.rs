// src/config/options.rs
use std::path::PathBuf;

use super::consts::{MAIN_DOC_URL, MAIN_PEP_URL};

/// What to scrape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Mode {
    WhatsNew,
    LatestVersions,
    Download,
    Pep,
}

impl Mode {
    /// Name as typed on the command line; also used in result file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::WhatsNew => "whats-new",
            Mode::LatestVersions => "latest-versions",
            Mode::Download => "download",
            Mode::Pep => "pep",
        }
    }
}

/// Where a finished table goes. `None` in `RunOptions` means plain stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputKind {
    /// Boxed, column-aligned table on stdout
    Pretty,
    /// Dated CSV under results/
    File,
    /// Paginated table in a window
    Gui,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sites {
    pub docs: String,
    pub peps: String,
}

impl Default for Sites {
    fn default() -> Self {
        Self { docs: s!(MAIN_DOC_URL), peps: s!(MAIN_PEP_URL) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub mode: Mode,
    pub clear_cache: bool,
    pub output: Option<OutputKind>,
    pub sites: Sites,
    /// Root for logs/, results/, downloads/ and the .store cache.
    pub base_dir: PathBuf,
}

impl RunOptions {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            clear_cache: false,
            output: None,
            sites: Sites::default(),
            base_dir: PathBuf::from("."),
        }
    }
}
