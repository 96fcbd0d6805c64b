// src/core/net.rs
//
// Blocking HTTP GET with an on-disk response cache.
// A failed fetch is logged and reported as `None`; callers skip that unit of
// work and carry on.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::config::consts::{HTTP_CACHE_SUBDIR, HTTP_TIMEOUT_SECS, STORE_DIR, USER_AGENT};

/// A fetched document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub url: String,
    pub status: u16,
    pub body: Vec<u8>,
}

impl Page {
    /// Body decoded as UTF-8. Invalid sequences become U+FFFD.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Anything that can turn a URL into a page.
/// Implementations log their own failures and return `None`; they never panic
/// or error out on network trouble.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Option<Page>;
}

#[derive(Debug, Serialize, Deserialize)]
struct CacheMeta {
    url: String,
    status: u16,
    fetched_at: String,
}

/// HTTP session backed by a response cache under `<base>/.store/http_cache`.
/// Successful responses are stored forever; `clear_cache` drops them all.
pub struct Session {
    http: reqwest::blocking::Client,
    cache_dir: PathBuf,
}

impl Session {
    pub fn new(base_dir: &Path) -> Result<Self, reqwest::Error> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            cache_dir: base_dir.join(STORE_DIR).join(HTTP_CACHE_SUBDIR),
        })
    }

    pub fn cache_dir(&self) -> &Path { &self.cache_dir }

    pub fn clear_cache(&self) -> std::io::Result<()> {
        match fs::remove_dir_all(&self.cache_dir) {
            Ok(()) => {
                logf!("Cache: cleared {}", self.cache_dir.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    fn cache_paths(&self, url: &str) -> (PathBuf, PathBuf) {
        let key = blake3::hash(url.as_bytes()).to_hex();
        (
            self.cache_dir.join(format!("{key}.json")),
            self.cache_dir.join(format!("{key}.body")),
        )
    }

    fn load_cached(&self, url: &str) -> Option<Page> {
        let (meta_path, body_path) = self.cache_paths(url);
        let meta: CacheMeta = serde_json::from_str(&fs::read_to_string(meta_path).ok()?).ok()?;
        // blake3 collision guard
        if meta.url != url { return None; }
        let body = fs::read(body_path).ok()?;
        logd!("Cache: hit {} (fetched {})", url, meta.fetched_at);
        Some(Page { url: meta.url, status: meta.status, body })
    }

    fn store(&self, page: &Page) -> std::io::Result<()> {
        fs::create_dir_all(&self.cache_dir)?;
        let (meta_path, body_path) = self.cache_paths(&page.url);
        let meta = CacheMeta {
            url: page.url.clone(),
            status: page.status,
            fetched_at: chrono::Local::now().to_rfc3339(),
        };
        fs::write(&body_path, &page.body)?;
        fs::write(&meta_path, serde_json::to_vec(&meta).map_err(std::io::Error::other)?)?;
        Ok(())
    }

    fn get(&self, url: &str) -> Result<Page, String> {
        let resp = self.http.get(url).send().map_err(|e| e.to_string())?;
        let status = resp.status();
        if !status.is_success() {
            return Err(format!("HTTP error: {} {}", status, url));
        }
        let body = resp.bytes().map_err(|e| e.to_string())?.to_vec();
        Ok(Page { url: s!(url), status: status.as_u16(), body })
    }
}

impl Fetch for Session {
    fn fetch(&self, url: &str) -> Option<Page> {
        if let Some(page) = self.load_cached(url) {
            return Some(page);
        }

        match self.get(url) {
            Ok(page) => {
                if let Err(e) = self.store(&page) {
                    // best-effort; the page itself is fine
                    logd!("Cache: could not store {}: {}", url, e);
                }
                Some(page)
            }
            Err(e) => {
                loge!("Failed to load {}: {}", url, e);
                None
            }
        }
    }
}
