// src/specs/latest_versions.rs
//
// Version switcher list in the docs sidebar: "Python 3.13 (stable)", ...

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    core::html::{find_tag, Attr, Element},
    data::ResultTable,
    error::{Result, ScrapeError},
};

pub const HEADERS: [&str; 3] = ["Documentation link", "Version", "Status"];

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Python (?P<version>\d\.\d+) \((?P<status>.*)\)").expect("valid regex")
});

pub fn parse(html: &str) -> Result<ResultTable> {
    let doc = Element::document(html);
    let sidebar = find_tag(&doc, "div", &[Attr::class("sphinxsidebarwrapper")])?;

    let versions = sidebar
        .find_all("ul", &[])
        .into_iter()
        .find(|ul| ul.text().contains("All versions"))
        .ok_or_else(|| ScrapeError::NothingFound(s!("version list in sidebar")))?;

    let mut table = ResultTable::with_header(row![HEADERS[0], HEADERS[1], HEADERS[2]]);
    for a in versions.find_all("a", &[]) {
        let link = a.attr("href").unwrap_or_default();
        let text = a.text();
        let (version, status) = match VERSION_RE.captures(&text) {
            Some(caps) => (s!(&caps["version"]), s!(&caps["status"])),
            None => (text.clone(), s!()),
        };
        table.push(row![link, version, status]);
    }
    Ok(table)
}
