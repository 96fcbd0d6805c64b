// src/specs/whats_new.rs
//
// "What's New in Python" index and the per-version articles it links to.

use url::Url;

use crate::{
    core::html::{find_tag, not_found, Attr, Element},
    error::Result,
};

pub const HEADERS: [&str; 3] = ["Article link", "Title", "Editor, author"];

/// Absolute links to every top-level article on the whats-new index.
pub fn article_links(html: &str, index_url: &Url) -> Result<Vec<Url>> {
    let doc = Element::document(html);
    let section = find_tag(&doc, "section", &[Attr::Is("id", "what-s-new-in-python")])?;
    let toc = find_tag(&section, "div", &[Attr::class("toctree-wrapper")])?;

    let mut links = Vec::new();
    for li in toc.find_all("li", &[Attr::class("toctree-l1")]) {
        let a = find_tag(&li, "a", &[])?;
        let href = a.attr("href").ok_or_else(|| not_found("a href", &[]))?;
        links.push(index_url.join(href)?);
    }
    Ok(links)
}

/// One table row for an article: link, page title, and the editor/author
/// field list flattened onto one line.
pub fn article_row(url: &Url, html: &str) -> Result<Vec<String>> {
    let doc = Element::document(html);
    let h1 = find_tag(&doc, "h1", &[])?;
    let dl = find_tag(&doc, "dl", &[])?;
    Ok(row![url, h1.text(), dl.text().replace('\n', "")])
}
