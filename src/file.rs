// src/file.rs

use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;

use crate::{
    config::{consts::{DATETIME_FORMAT, RESULTS_DIR}, options::Mode},
    csv::write_table,
    data::ResultTable,
};

/// `<base>/results/<mode>_<YYYY-mm-dd_HH-MM-SS>.csv`
pub fn results_path(base_dir: &Path, mode: Mode, at: NaiveDateTime) -> PathBuf {
    let stamp = at.format(DATETIME_FORMAT);
    base_dir.join(RESULTS_DIR).join(format!("{}_{}.csv", mode.as_str(), stamp))
}

/// Write the table as CSV, creating parent directories as needed.
pub fn write_results(path: &Path, table: &ResultTable) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let out = BufWriter::new(File::create(path)?);
    write_table(out, table)
}

pub fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::other(format!(
            "Path exists but is not a directory: {}", dir.display()
        )));
    }
    fs::create_dir_all(dir)
}
