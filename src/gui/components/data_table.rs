// src/gui/components/data_table.rs
//
// Current page of the result table. Purely a view.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::ResultViewer;

pub fn draw(ui: &mut egui::Ui, app: &ResultViewer) {
    let cols = app.table.column_count();
    if cols == 0 {
        ui.label("No results");
        return;
    }

    let header = app.table.header().unwrap_or(&[]);
    let rows = app.page_rows();
    let cell = |r: &[String], ci: usize| r.get(ci).cloned().unwrap_or_default();

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt(("result_table", app.page));
    for ci in 0..cols {
        let col = if ci + 1 == cols { Column::remainder() } else { Column::auto().at_least(60.0) };
        table = table.column(col.resizable(true).clip(true));
    }

    table
        .header(24.0, |mut hdr| {
            for ci in 0..cols {
                hdr.col(|ui| {
                    ui.label(RichText::new(cell(header, ci)).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let data = &rows[row.index()];
                for ci in 0..cols {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        ui.label(cell(data.as_slice(), ci));
                    });
                }
            });
        });
}
