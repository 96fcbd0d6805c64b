// src/specs/downloads.rs
//
// docs.python.org/3/download.html: the PDF (A4) zip archive link.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::{
    core::html::{find_tag, not_found, Attr, Element},
    error::Result,
};

static PDF_A4_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r".+pdf-a4\.zip$").expect("valid regex"));

/// Absolute URL of the A4 PDF archive.
pub fn pdf_a4_link(html: &str, page_url: &Url) -> Result<Url> {
    let doc = Element::document(html);
    let main = find_tag(&doc, "div", &[Attr::Is("role", "main")])?;
    let table = find_tag(&main, "table", &[Attr::class("docutils")])?;
    let filter = [Attr::Matches("href", &PDF_A4_RE)];
    let a = find_tag(&table, "a", &filter)?;
    let href = a.attr("href").ok_or_else(|| not_found("a", &filter))?;
    Ok(page_url.join(href)?)
}

/// Last path segment, used as the local file name.
pub fn archive_name(url: &Url) -> String {
    url.path_segments()
        .and_then(|mut segs| segs.next_back().map(String::from))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| s!("archive.zip"))
}
