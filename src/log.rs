// src/log.rs
//
// File + stderr logger behind the logf!/logd!/loge! macros.
// Lines look like: "19.10.2026 14:03:11 - [INFO] - Parser started"
// The file rotates at LOG_MAX_BYTES, keeping LOG_BACKUPS old copies.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use chrono::Local;

use crate::config::consts::{LOG_BACKUPS, LOG_DIR, LOG_DT_FORMAT, LOG_FILE, LOG_MAX_BYTES};

static LOG_LOCK: Mutex<()> = Mutex::new(());
static LOG_PATH: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Point the file sink at `<base>/logs/parser.log`.
/// Without a call, only stderr receives log lines.
/// First call wins; later calls are ignored.
pub fn init(base_dir: &Path) {
    LOG_PATH.get_or_init(|| {
        let dir = base_dir.join(LOG_DIR);
        match fs::create_dir_all(&dir) {
            Ok(()) => Some(dir.join(LOG_FILE)),
            Err(e) => {
                eprintln!("Warning: could not create log dir {}: {}", dir.display(), e);
                None
            }
        }
    });
}

pub fn format_line(level: &str, msg: &str) -> String {
    let stamp = Local::now().format(LOG_DT_FORMAT);
    format!("{stamp} - [{level}] - {msg}")
}

fn rotate(path: &Path) {
    let too_big = fs::metadata(path).map(|m| m.len() >= LOG_MAX_BYTES).unwrap_or(false);
    if !too_big { return; }

    let backup = |n: usize| PathBuf::from(format!("{}.{}", path.display(), n));
    let _ = fs::remove_file(backup(LOG_BACKUPS));
    for n in (1..LOG_BACKUPS).rev() {
        let _ = fs::rename(backup(n), backup(n + 1));
    }
    let _ = fs::rename(path, backup(1));
}

/// Internal logging function
pub fn write_log(level: &str, msg: &str) {
    let line = format_line(level, msg);

    if let Ok(_guard) = LOG_LOCK.lock() {
        eprintln!("{line}");

        if let Some(Some(path)) = LOG_PATH.get() {
            rotate(path);
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
                let _ = writeln!(file, "{line}");
            }
        }
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log("INFO", &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log("DEBUG", &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log("ERROR", &format!($($arg)*))
    };
}
