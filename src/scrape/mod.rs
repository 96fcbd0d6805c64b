// src/scrape/mod.rs
//
// Fetch orchestration per mode. Parsing lives in `specs`.
pub mod docs;
pub mod pep;
