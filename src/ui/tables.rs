use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::aggregate::TableRow;

/// Render an aggregate table with its schema as header. An empty table still
/// shows the header, followed by a placeholder line.
pub fn aggregate_table<R: TableRow>(ui: &mut Ui, id: &str, rows: &[R], max_height: f32) {
    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .columns(Column::auto().at_least(90.0), R::COLUMNS.len())
            .max_scroll_height(max_height)
            .header(20.0, |mut header| {
                for column in R::COLUMNS {
                    header.col(|ui: &mut Ui| {
                        ui.strong(*column);
                    });
                }
            })
            .body(|mut body| {
                for row in rows {
                    body.row(18.0, |mut table_row| {
                        for cell in row.cells() {
                            table_row.col(|ui: &mut Ui| {
                                ui.label(cell);
                            });
                        }
                    });
                }
            });
    });

    if rows.is_empty() {
        ui.weak("No rows match the current filters.");
    }
}
