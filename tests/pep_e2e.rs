// tests/pep_e2e.rs
use std::collections::HashMap;

use pep_scrape::config::options::{Mode, RunOptions, Sites};
use pep_scrape::core::net::{Fetch, Page};
use pep_scrape::error::ScrapeError;
use pep_scrape::progress::NullProgress;
use pep_scrape::runner::run_mode;
use pep_scrape::scrape::pep;
use pep_scrape::{row, s};

const INDEX: &str = "https://peps.test/";

#[derive(Default)]
struct Site(HashMap<String, String>);

impl Site {
    fn page(mut self, url: &str, html: &str) -> Self {
        self.0.insert(s!(url), s!(html));
        self
    }
}

impl Fetch for Site {
    fn fetch(&self, url: &str) -> Option<Page> {
        self.0.get(url).map(|html| Page { url: s!(url), status: 200, body: html.as_bytes().to_vec() })
    }
}

fn index(rows: &[(Option<&str>, &str)]) -> String {
    let body: String = rows
        .iter()
        .enumerate()
        .map(|(i, (abbr, href))| {
            let class = if i % 2 == 0 { "row-odd" } else { "row-even" };
            let marker = abbr.map(|a| format!("<abbr>{a}</abbr>")).unwrap_or_default();
            format!(r#"<tr class="{class}"><td>{marker}</td><td><a class="pep reference internal" href="{href}">x</a></td></tr>"#)
        })
        .collect();
    format!(r#"<html><body><table class="pep-zero-table"><tbody>{body}</tbody></table></body></html>"#)
}

fn pep_page(status: &str) -> String {
    format!(
        r#"<dl class="rfc2822 field-list simple"><dt>Author<span class="colon">:</span></dt><dd>A</dd><dt>Status<span class="colon">:</span></dt><dd><abbr title="t">{status}</abbr></dd></dl>"#
    )
}

#[test]
fn agreeing_status_gives_single_count_and_no_drift() {
    let site = Site::default()
        .page(INDEX, &index(&[(Some("SP"), "pep-0001/")]))
        .page("https://peps.test/pep-0001/", &pep_page("Provisional"));

    let report = pep::run(&site, INDEX, None).unwrap().unwrap();
    assert_eq!(
        report.table.rows(),
        &[row!["Status", "Count"], row!["Provisional", 1], row!["Total", 1]]
    );
    assert_eq!(report.drift, None);
}

#[test]
fn disagreeing_status_is_counted_and_reported() {
    let site = Site::default()
        .page(INDEX, &index(&[(Some("SP"), "pep-0001/")]))
        .page("https://peps.test/pep-0001/", &pep_page("Accepted"));

    let report = pep::run(&site, INDEX, None).unwrap().unwrap();
    assert_eq!(
        report.table.rows(),
        &[row!["Status", "Count"], row!["Accepted", 1], row!["Total", 1]]
    );
    let drift = report.drift.unwrap();
    assert!(drift.contains("https://peps.test/pep-0001/"));
    assert!(drift.contains("Status on page: Accepted"));
    assert!(drift.contains("Expected statuses: Provisional"));
}

#[test]
fn duplicate_rows_collapse_and_empty_code_is_distinct() {
    let site = Site::default()
        .page(INDEX, &index(&[(Some("SF"), "pep-0008/"), (Some("SF"), "pep-0008/"), (None, "pep-0008/")]))
        .page("https://peps.test/pep-0008/", &pep_page("Active"));

    let report = pep::run(&site, INDEX, None).unwrap().unwrap();
    let rows = report.table.rows();
    assert_eq!(rows.last().unwrap(), &row!["Total", 2]);
    assert!(rows.contains(&row!["Active", 2]));
    // "Active" is expected for the empty code only
    assert_eq!(report.drift.unwrap().matches("Status on page").count(), 1);
}

#[test]
fn table_has_one_row_per_distinct_status_plus_header_and_total() {
    let site = Site::default()
        .page(INDEX, &index(&[(Some("SF"), "pep-0001/"), (Some("SA"), "pep-0002/"), (Some("SF"), "pep-0003/")]))
        .page("https://peps.test/pep-0001/", &pep_page("Final"))
        .page("https://peps.test/pep-0002/", &pep_page("Accepted"))
        .page("https://peps.test/pep-0003/", &pep_page("Final"));

    let report = pep::run(&site, INDEX, None).unwrap().unwrap();
    assert_eq!(report.table.len(), 2 + 2);
    assert!(report.table.rows().contains(&row!["Final", 2]));
}

#[test]
fn unreachable_pep_page_still_counts_toward_total() {
    let site = Site::default()
        .page(INDEX, &index(&[(Some("SF"), "pep-0001/"), (Some("SF"), "pep-0404/")]))
        .page("https://peps.test/pep-0001/", &pep_page("Final"));

    let report = pep::run(&site, INDEX, None).unwrap().unwrap();
    assert_eq!(
        report.table.rows(),
        &[row!["Status", "Count"], row!["Final", 1], row!["Total", 2]]
    );
}

#[test]
fn unknown_code_aborts_the_run() {
    let site = Site::default().page(INDEX, &index(&[(Some("SZ"), "pep-0001/")]));
    let err = pep::run(&site, INDEX, None).unwrap_err();
    assert!(matches!(err, ScrapeError::UnknownAbbreviation(ref c) if c == "Z"));
}

#[test]
fn page_without_status_field_aborts_the_run() {
    let site = Site::default()
        .page(INDEX, &index(&[(Some("SF"), "pep-0001/")]))
        .page("https://peps.test/pep-0001/", "<html><body>moved</body></html>");
    let err = pep::run(&site, INDEX, None).unwrap_err();
    assert!(matches!(err, ScrapeError::TagNotFound { .. }));
}

#[test]
fn unreachable_index_yields_nothing() {
    assert!(pep::run(&Site::default(), INDEX, None).unwrap().is_none());
}

#[test]
fn runner_dispatches_pep_mode_to_configured_site() {
    let site = Site::default()
        .page(INDEX, &index(&[(Some("SW"), "pep-0001/")]))
        .page("https://peps.test/pep-0001/", &pep_page("Withdrawn"));

    let mut opts = RunOptions::new(Mode::Pep);
    opts.sites = Sites { peps: s!(INDEX), ..Sites::default() };

    let table = run_mode(&opts, &site, Some(&mut NullProgress)).unwrap().unwrap();
    assert_eq!(table.body(), &[row!["Withdrawn", 1], row!["Total", 1]]);
}
