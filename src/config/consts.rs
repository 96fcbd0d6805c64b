// src/config/consts.rs

// Sites
pub const MAIN_DOC_URL: &str = "https://docs.python.org/3/";
pub const MAIN_PEP_URL: &str = "https://peps.python.org/";

// Net config
pub const USER_AGENT: &str = concat!("pep_scrape/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Local cache
pub const STORE_DIR: &str = ".store";
pub const HTTP_CACHE_SUBDIR: &str = "http_cache";

// Output
pub const RESULTS_DIR: &str = "results";
pub const DOWNLOADS_DIR: &str = "downloads";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";
pub const GUI_PAGE_SIZE: usize = 50;

// Logging
pub const LOG_DIR: &str = "logs";
pub const LOG_FILE: &str = "parser.log";
pub const LOG_DT_FORMAT: &str = "%d.%m.%Y %H:%M:%S";
pub const LOG_MAX_BYTES: u64 = 1_000_000;
pub const LOG_BACKUPS: usize = 5;

/// Abbreviation code shown on the PEP index -> statuses a PEP page may carry.
/// The vocabulary is exhaustive; see `config::expected_statuses`.
pub const EXPECTED_STATUS: &[(&str, &[&str])] = &[
    ("A", &["Active", "Accepted"]),
    ("D", &["Deferred"]),
    ("F", &["Final"]),
    ("P", &["Provisional"]),
    ("R", &["Rejected"]),
    ("S", &["Superseded"]),
    ("W", &["Withdrawn"]),
    ("", &["Draft", "Active"]),
];
