//! # Page specs
//!
//! One module per remote page. Each knows *where the data lives in the HTML*
//! and turns a fetched document into records or rows. Nothing here touches
//! the network or the disk; `scrape` decides what to fetch and when.
//!
//! ## Pages
//! - `pep_index` – PEP index tables → `ProposalRecord`s (expected statuses + link).
//! - `pep_page` – a single PEP page → its published status.
//! - `whats_new` – whats-new index → article links; article → row.
//! - `latest_versions` – docs sidebar → version/status rows.
//! - `downloads` – download page → A4 PDF archive link.
//!
//! ## Conventions
//! - Lookups go through `core::html::find_tag`; a missing element is a
//!   `ScrapeError::TagNotFound` and propagates. Markup drift is not silently
//!   skipped.
//! - Specs are testable offline against inline HTML fixtures.
pub mod downloads;
pub mod latest_versions;
pub mod pep_index;
pub mod pep_page;
pub mod whats_new;
