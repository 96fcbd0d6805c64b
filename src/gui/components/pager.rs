// src/gui/components/pager.rs
use eframe::egui;

use crate::gui::app::ResultViewer;

pub fn draw(ui: &mut egui::Ui, app: &mut ResultViewer) {
    let pages = app.page_count();
    ui.horizontal(|ui| {
        if ui.add_enabled(app.page > 0, egui::Button::new("< Prev")).clicked() {
            app.prev_page();
        }
        ui.label(format!("Page {} / {}", app.page + 1, pages));
        if ui.add_enabled(app.page + 1 < pages, egui::Button::new("Next >")).clicked() {
            app.next_page();
        }
        ui.separator();
        ui.label(format!("{} rows", app.table.body().len()));
    });
}
