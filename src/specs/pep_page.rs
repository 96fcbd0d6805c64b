// src/specs/pep_page.rs
//
// A single PEP page: the status from its header field list.
//
//   <dl class="rfc2822 field-list simple">
//     <dt class="field-odd">Author<span class="colon">:</span></dt>
//     <dd class="field-odd">...</dd>
//     <dt class="field-even">Status<span class="colon">:</span></dt>
//     <dd class="field-even"><abbr title="...">Final</abbr></dd>

use crate::{
    core::html::{find_tag, not_found, Attr, Element},
    core::sanitize::normalize_ws,
    error::{FilterDesc, Result, ScrapeError},
};

const STATUS_LABEL: &str = "Status";

/// Status text as published on the PEP's own page.
/// Missing field list, label or value is a lookup error, not a skip.
pub fn observed_status(html: &str) -> Result<String> {
    let doc = Element::document(html);
    let field_list = find_tag(&doc, "dl", &[Attr::class("field-list")])?;

    let label = field_list
        .find_all("dt", &[])
        .into_iter()
        .find(|dt| is_status_label(&dt.text()))
        .ok_or_else(|| ScrapeError::TagNotFound {
            tag: s!("dt"),
            filters: FilterDesc(vec![format!("text={STATUS_LABEL:?}")]),
        })?;

    let value = label
        .find_next_sibling("dd", &[])
        .ok_or_else(|| not_found("dd", &[]))?;

    Ok(normalize_ws(&value.text()))
}

fn is_status_label(text: &str) -> bool {
    normalize_ws(text).trim_end_matches(':').trim_end() == STATUS_LABEL
}
