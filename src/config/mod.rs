// src/config/mod.rs
pub mod consts;
pub mod options;

use crate::error::ScrapeError;

/// Statuses a PEP may legitimately carry given its index abbreviation code.
/// Unknown codes are a hard error: the remote vocabulary changed under us.
pub fn expected_statuses(code: &str) -> Result<&'static [&'static str], ScrapeError> {
    consts::EXPECTED_STATUS
        .iter()
        .find(|(k, _)| *k == code)
        .map(|(_, statuses)| *statuses)
        .ok_or_else(|| ScrapeError::UnknownAbbreviation(s!(code)))
}
