// src/gui/mod.rs
//
// Paginated viewer for a finished result table (`--output gui`).
pub mod app;
pub mod components;

use crate::data::ResultTable;
use app::ResultViewer;

/// Open a window showing `table`; returns when the window is closed.
pub fn show(mode: &str, table: ResultTable) -> Result<(), eframe::Error> {
    let title = join!("pep_scrape: ", mode);
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(ResultViewer::new(table)))),
    )
}
