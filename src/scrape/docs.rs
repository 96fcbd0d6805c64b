// src/scrape/docs.rs
//
// docs.python.org modes: whats-new, latest-versions, download.
// Same failure policy as the PEP pipeline: unreachable pages are skipped,
// unexpected markup is an error.

use std::{fs, path::{Path, PathBuf}};

use url::Url;

use crate::{
    config::consts::DOWNLOADS_DIR,
    core::net::Fetch,
    data::ResultTable,
    error::Result,
    progress::Progress,
    specs::{downloads, latest_versions, whats_new},
};

pub fn whats_new(
    fetcher: &dyn Fetch,
    docs_url: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Option<ResultTable>> {
    let index_url = Url::parse(docs_url)?.join("whatsnew/")?;
    let Some(index) = fetcher.fetch(index_url.as_str()) else {
        return Ok(None);
    };
    let links = whats_new::article_links(&index.text(), &index_url)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(links.len());
        p.log("Reading whats-new articles…");
    }

    let mut table = ResultTable::with_header(whats_new::HEADERS.iter().map(|h| s!(*h)).collect());
    let mut result = Ok(());
    for link in &links {
        if let Some(page) = fetcher.fetch(link.as_str()) {
            match whats_new::article_row(link, &page.text()) {
                Ok(row) => table.push(row),
                Err(e) => {
                    result = Err(e);
                    break;
                }
            }
        }
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(link.as_str());
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result.map(|()| Some(table))
}

pub fn latest_versions(fetcher: &dyn Fetch, docs_url: &str) -> Result<Option<ResultTable>> {
    let Some(page) = fetcher.fetch(docs_url) else {
        return Ok(None);
    };
    latest_versions::parse(&page.text()).map(Some)
}

/// Save the A4 PDF docs archive under `<base>/downloads/`.
/// Returns the written path, or `None` if a page could not be fetched.
pub fn download(fetcher: &dyn Fetch, docs_url: &str, base_dir: &Path) -> Result<Option<PathBuf>> {
    let page_url = Url::parse(docs_url)?.join("download.html")?;
    let Some(page) = fetcher.fetch(page_url.as_str()) else {
        return Ok(None);
    };
    let archive_url = downloads::pdf_a4_link(&page.text(), &page_url)?;

    let Some(archive) = fetcher.fetch(archive_url.as_str()) else {
        return Ok(None);
    };

    let dir = base_dir.join(DOWNLOADS_DIR);
    fs::create_dir_all(&dir)?;
    let path = dir.join(downloads::archive_name(&archive_url));
    fs::write(&path, &archive.body)?;

    logf!("Archive downloaded and saved: {}", path.display());
    Ok(Some(path))
}
