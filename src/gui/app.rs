// src/gui/app.rs
use eframe::egui;

use crate::{config::consts::GUI_PAGE_SIZE, data::ResultTable};

pub struct ResultViewer {
    pub table: ResultTable,
    /// Zero-based page index into the table body.
    pub page: usize,
    pub page_size: usize,
}

impl ResultViewer {
    pub fn new(table: ResultTable) -> Self {
        Self { table, page: 0, page_size: GUI_PAGE_SIZE }
    }

    /// Always at least one page, even for a header-only table.
    pub fn page_count(&self) -> usize {
        self.table.body().len().div_ceil(self.page_size).max(1)
    }

    /// Body rows on the current page.
    pub fn page_rows(&self) -> &[Vec<String>] {
        let body = self.table.body();
        let start = (self.page * self.page_size).min(body.len());
        let end = (start + self.page_size).min(body.len());
        &body[start..end]
    }

    pub fn next_page(&mut self) {
        if self.page + 1 < self.page_count() { self.page += 1; }
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }
}

impl eframe::App for ResultViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("pager").show(ctx, |ui| {
            super::components::pager::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::data_table::draw(ui, self);
        });
    }
}
