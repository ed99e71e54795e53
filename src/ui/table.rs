use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::{SalesDataset, SalesRecord};

const HEADERS: [&str; 9] = [
    "Invoice ID",
    "City",
    "Customer_type",
    "Gender",
    "Product line",
    "Total",
    "Date",
    "Time",
    "Rating",
];

// ---------------------------------------------------------------------------
// Filtered transactions table
// ---------------------------------------------------------------------------

/// Render the records at `indices` as a striped, scrollable table.
pub fn transactions_table(ui: &mut Ui, dataset: &SalesDataset, indices: &[usize]) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .max_scroll_height(320.0)
        .columns(Column::auto().at_least(70.0), HEADERS.len())
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, indices.len(), |mut row| {
                let rec = &dataset.records[indices[row.index()]];
                for cell in row_cells(rec) {
                    row.col(|ui: &mut Ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}

/// Display strings for one record, in `HEADERS` order.
fn row_cells(rec: &SalesRecord) -> [String; 9] {
    [
        rec.invoice_id.clone().unwrap_or_default(),
        rec.city.clone(),
        rec.customer_type.clone(),
        rec.gender.clone(),
        rec.product_line.clone(),
        format!("{:.2}", rec.total),
        rec.date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
        rec.time.format("%H:%M:%S").to_string(),
        format!("{:.1}", rec.rating),
    ]
}
