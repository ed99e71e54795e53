/// egui rendering: sidebar filters, KPI row, charts and the transactions table.
pub mod charts;
pub mod kpi;
pub mod panels;
pub mod table;
