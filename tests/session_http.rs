// tests/session_http.rs
use httpmock::prelude::*;

use pep_scrape::core::net::{Fetch, Session};

#[test]
fn second_fetch_is_served_from_cache() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/pep-0008/");
        then.status(200).body("<dl class=\"field-list\"></dl>");
    });
    let dir = tempfile::tempdir().unwrap();
    let session = Session::new(dir.path()).unwrap();
    let url = server.url("/pep-0008/");

    let first = session.fetch(&url).unwrap();
    let second = session.fetch(&url).unwrap();

    mock.assert_hits(1);
    assert_eq!(first, second);
    assert_eq!(second.text(), "<dl class=\"field-list\"></dl>");
    assert!(session.cache_dir().starts_with(dir.path()));
}

#[test]
fn clearing_cache_forces_refetch() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).body("index");
    });
    let dir = tempfile::tempdir().unwrap();
    let session = Session::new(dir.path()).unwrap();
    let url = server.url("/");

    session.fetch(&url).unwrap();
    session.clear_cache().unwrap();
    assert!(!session.cache_dir().exists());
    session.fetch(&url).unwrap();

    mock.assert_hits(2);
}

#[test]
fn clearing_missing_cache_is_fine() {
    let dir = tempfile::tempdir().unwrap();
    let session = Session::new(dir.path()).unwrap();
    session.clear_cache().unwrap();
}

#[test]
fn error_status_is_a_failed_fetch_and_not_cached() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/pep-9999/");
        then.status(404).body("not here");
    });
    let dir = tempfile::tempdir().unwrap();
    let session = Session::new(dir.path()).unwrap();
    let url = server.url("/pep-9999/");

    assert!(session.fetch(&url).is_none());
    assert!(session.fetch(&url).is_none());
    mock.assert_hits(2);
}

#[test]
fn unreachable_host_is_a_failed_fetch() {
    let dir = tempfile::tempdir().unwrap();
    let session = Session::new(dir.path()).unwrap();
    assert!(session.fetch("http://127.0.0.1:9/").is_none());
}
