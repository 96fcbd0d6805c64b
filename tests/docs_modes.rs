// tests/docs_modes.rs
use std::collections::HashMap;
use std::fs;

use pep_scrape::config::options::{Mode, RunOptions, Sites};
use pep_scrape::core::net::{Fetch, Page};
use pep_scrape::runner::run_mode;
use pep_scrape::s;

const DOCS: &str = "https://docs.test/3/";

#[derive(Default)]
struct Site(HashMap<String, Vec<u8>>);

impl Site {
    fn page(mut self, url: &str, body: &[u8]) -> Self {
        self.0.insert(s!(url), body.to_vec());
        self
    }
}

impl Fetch for Site {
    fn fetch(&self, url: &str) -> Option<Page> {
        self.0.get(url).map(|body| Page { url: s!(url), status: 200, body: body.clone() })
    }
}

fn opts(mode: Mode, base: &std::path::Path) -> RunOptions {
    let mut o = RunOptions::new(mode);
    o.sites = Sites { docs: s!(DOCS), ..Sites::default() };
    o.base_dir = base.to_path_buf();
    o
}

#[test]
fn latest_versions_lists_every_matching_link() {
    let html = br#"<div class="sphinxsidebarwrapper"><ul><li><a href="https://docs.test/3.14/">Python 3.14 (in development)</a></li><li><a href="https://docs.test/3.13/">Python 3.13 (stable)</a></li><li><a href="https://docs.test/">All versions</a></li></ul></div>"#;
    let site = Site::default().page(DOCS, html);
    let dir = tempfile::tempdir().unwrap();

    let table = run_mode(&opts(Mode::LatestVersions, dir.path()), &site, None).unwrap().unwrap();
    assert_eq!(table.header().unwrap(), &["Documentation link", "Version", "Status"]);
    assert_eq!(table.body().len(), 3);
    assert!(table.body().iter().any(|r| r[1] == "3.13" && r[2] == "stable"));
}

#[test]
fn download_saves_archive_under_downloads() {
    let page = br#"<div role="main"><table class="docutils"><tr><td><a href="archives/python-3.13-docs-pdf-a4.zip">Download</a></td></tr></table></div>"#;
    let site = Site::default()
        .page("https://docs.test/3/download.html", page)
        .page("https://docs.test/3/archives/python-3.13-docs-pdf-a4.zip", b"PK\x03\x04zip");
    let dir = tempfile::tempdir().unwrap();

    let table = run_mode(&opts(Mode::Download, dir.path()), &site, None).unwrap();
    assert!(table.is_none());

    let saved = dir.path().join("downloads").join("python-3.13-docs-pdf-a4.zip");
    assert_eq!(fs::read(saved).unwrap(), b"PK\x03\x04zip");
}

#[test]
fn unreachable_docs_site_yields_nothing() {
    let dir = tempfile::tempdir().unwrap();
    for mode in [Mode::WhatsNew, Mode::LatestVersions, Mode::Download] {
        assert!(run_mode(&opts(mode, dir.path()), &Site::default(), None).unwrap().is_none());
    }
    assert!(!dir.path().join("downloads").exists());
}

#[test]
fn whats_new_skips_articles_that_fail_to_load() {
    let index = br#"<section id="what-s-new-in-python"><div class="toctree-wrapper"><ul>
<li class="toctree-l1"><a href="3.13.html">3.13</a></li>
<li class="toctree-l1"><a href="3.12.html">3.12</a></li></ul></div></section>"#;
    let article = b"<h1>What's New In Python 3.13</h1><dl><dt>Editor</dt><dd>T. Wouters</dd></dl>";
    let site = Site::default()
        .page("https://docs.test/3/whatsnew/", index)
        .page("https://docs.test/3/whatsnew/3.13.html", article);
    let dir = tempfile::tempdir().unwrap();

    let table = run_mode(&opts(Mode::WhatsNew, dir.path()), &site, None).unwrap().unwrap();
    assert_eq!(table.header().unwrap(), &["Article link", "Title", "Editor, author"]);
    assert_eq!(table.body().len(), 1);
    assert_eq!(table.body()[0][0], "https://docs.test/3/whatsnew/3.13.html");
    assert_eq!(table.body()[0][2], "EditorT. Wouters");
}
