use std::path::Path;

use calamine::{Data, DataType, Reader, open_workbook_auto};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use super::error::DataUnavailable;
use super::model::{SalesDataset, SalesRecord};
use crate::config::SourceConfig;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the sales table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xlsm` / `.xls` / `.xlsb` / `.ods` – the configured sheet and
///   cell window (header row after `skip_rows`, columns `first_column..=last_column`)
/// * `.csv` – header row first, same column names
pub fn load_file(path: &Path, source: &SourceConfig) -> Result<SalesDataset, DataUnavailable> {
    if !path.is_file() {
        return Err(DataUnavailable::NotFound(path.to_path_buf()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => load_workbook(path, source)?,
        "csv" => load_csv(path, source)?,
        other => return Err(DataUnavailable::UnsupportedFormat(other.to_string())),
    };

    log::info!(
        "Loaded {} sales records from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Cells
// ---------------------------------------------------------------------------

/// A source cell, independent of the file format it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    DateTime(NaiveDateTime),
    Time(NaiveTime),
}

impl Cell {
    fn from_workbook(data: &Data) -> Cell {
        match data {
            Data::Empty => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Float(f) => Cell::Number(*f),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Bool(b) => Cell::Text(b.to_string()),
            Data::DateTime(_) | Data::DateTimeIso(_) => data
                .as_datetime()
                .map(Cell::DateTime)
                .unwrap_or_else(|| Cell::Text(data.to_string())),
            Data::DurationIso(_) => data
                .as_time()
                .map(Cell::Time)
                .unwrap_or_else(|| Cell::Text(data.to_string())),
            Data::Error(e) => Cell::Text(e.to_string()),
        }
    }

    fn from_csv(field: &str) -> Cell {
        if field.trim().is_empty() {
            Cell::Empty
        } else {
            Cell::Text(field.to_string())
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    fn text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) => {
                let s = s.trim();
                (!s.is_empty()).then(|| s.to_string())
            }
            Cell::Number(n) => Some(n.to_string()),
            Cell::DateTime(dt) => Some(dt.to_string()),
            Cell::Time(t) => Some(t.to_string()),
        }
    }

    fn number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Time of day. Text must be exactly `HH:MM:SS`.
    fn time_of_day(&self) -> Option<NaiveTime> {
        match self {
            Cell::Text(s) => NaiveTime::parse_from_str(s.trim(), "%H:%M:%S").ok(),
            Cell::DateTime(dt) => Some(dt.time()),
            Cell::Time(t) => Some(*t),
            _ => None,
        }
    }

    fn date(&self) -> Option<NaiveDate> {
        match self {
            Cell::DateTime(dt) => Some(dt.date()),
            Cell::Text(s) => {
                let s = s.trim();
                NaiveDate::parse_from_str(s, "%m/%d/%Y")
                    .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
                    .ok()
            }
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Table → records
// ---------------------------------------------------------------------------

/// Column positions in the header row.
struct Columns {
    city: usize,
    customer_type: usize,
    gender: usize,
    product_line: usize,
    total: usize,
    rating: usize,
    time: usize,
    invoice_id: Option<usize>,
    branch: Option<usize>,
    unit_price: Option<usize>,
    quantity: Option<usize>,
    date: Option<usize>,
    payment: Option<usize>,
}

impl Columns {
    fn locate(header: &[String]) -> Result<Self, DataUnavailable> {
        let find = |name: &str| header.iter().position(|h| h.trim() == name);
        let require = |name: &'static str| find(name).ok_or(DataUnavailable::MissingColumn(name));

        Ok(Columns {
            city: require("City")?,
            customer_type: require("Customer_type")?,
            gender: require("Gender")?,
            product_line: require("Product line")?,
            total: require("Total")?,
            rating: require("Rating")?,
            time: require("Time")?,
            invoice_id: find("Invoice ID"),
            branch: find("Branch"),
            unit_price: find("Unit price"),
            quantity: find("Quantity"),
            date: find("Date"),
            payment: find("Payment"),
        })
    }
}

/// Build the dataset from a header row and the data rows below it.
///
/// Rows with no content are skipped. `row` numbers in errors count data rows
/// from 1.
pub fn records_from_table<I>(header: &[String], rows: I) -> Result<SalesDataset, DataUnavailable>
where
    I: IntoIterator<Item = Vec<Cell>>,
{
    let cols = Columns::locate(header)?;
    let mut records = Vec::new();

    for (i, row) in rows.into_iter().enumerate() {
        if row.iter().all(Cell::is_empty) {
            continue;
        }
        records.push(parse_record(&row, &cols, i + 1)?);
    }

    Ok(SalesDataset::from_records(records))
}

fn parse_record(row: &[Cell], cols: &Columns, row_no: usize) -> Result<SalesRecord, DataUnavailable> {
    let cell = |idx: usize| row.get(idx).unwrap_or(&Cell::Empty);
    let optional = |idx: Option<usize>| idx.map(cell).unwrap_or(&Cell::Empty);

    let text = |idx: usize, column: &'static str| {
        cell(idx).text().ok_or_else(|| DataUnavailable::InvalidCell {
            row: row_no,
            column,
            reason: "empty".to_string(),
        })
    };
    let number = |idx: usize, column: &'static str| {
        let c = cell(idx);
        c.number().ok_or_else(|| DataUnavailable::InvalidCell {
            row: row_no,
            column,
            reason: format!("'{}' is not a number", c.text().unwrap_or_default()),
        })
    };

    let time_cell = cell(cols.time);
    let time = time_cell
        .time_of_day()
        .ok_or_else(|| DataUnavailable::InvalidTime {
            row: row_no,
            value: time_cell.text().unwrap_or_default(),
        })?;

    Ok(SalesRecord {
        invoice_id: optional(cols.invoice_id).text(),
        branch: optional(cols.branch).text(),
        city: text(cols.city, "City")?,
        customer_type: text(cols.customer_type, "Customer_type")?,
        gender: text(cols.gender, "Gender")?,
        product_line: text(cols.product_line, "Product line")?,
        unit_price: optional(cols.unit_price).number(),
        quantity: optional(cols.quantity).number(),
        total: number(cols.total, "Total")?,
        date: optional(cols.date).date(),
        time,
        hour: time.hour() as u8,
        payment: optional(cols.payment).text(),
        rating: number(cols.rating, "Rating")?,
    })
}

// ---------------------------------------------------------------------------
// Workbook loader
// ---------------------------------------------------------------------------

/// Zero-based index of a spreadsheet column given by letters (`A` → 0).
pub fn column_index(letters: &str) -> Option<u32> {
    let letters = letters.trim();
    if letters.is_empty() {
        return None;
    }
    let mut acc: u32 = 0;
    for ch in letters.to_ascii_uppercase().chars() {
        if !ch.is_ascii_uppercase() {
            return None;
        }
        acc = acc.checked_mul(26)?.checked_add(ch as u32 - 'A' as u32 + 1)?;
    }
    Some(acc - 1)
}

fn load_workbook(path: &Path, source: &SourceConfig) -> Result<SalesDataset, DataUnavailable> {
    let (first, last) = match (
        column_index(&source.first_column),
        column_index(&source.last_column),
    ) {
        (Some(first), Some(last)) if first <= last => (first, last),
        _ => {
            return Err(DataUnavailable::InvalidColumnRange {
                first: source.first_column.clone(),
                last: source.last_column.clone(),
            })
        }
    };

    let mut workbook = open_workbook_auto(path)?;
    if !workbook.sheet_names().iter().any(|s| *s == source.sheet) {
        return Err(DataUnavailable::MissingSheet(source.sheet.clone()));
    }
    let range = workbook.worksheet_range(&source.sheet)?;

    // Absolute coordinates; cells outside the used range read as empty.
    let header_row = source.skip_rows;
    let cell_at = |row: u32, col: u32| {
        range
            .get_value((row, col))
            .map(Cell::from_workbook)
            .unwrap_or(Cell::Empty)
    };

    let header: Vec<String> = (first..=last)
        .map(|col| cell_at(header_row, col).text().unwrap_or_default())
        .collect();
    log::debug!("Sheet '{}' header: {header:?}", source.sheet);

    let rows = (1..=source.max_rows).map(|offset| {
        (first..=last)
            .map(|col| cell_at(header_row + offset, col))
            .collect::<Vec<_>>()
    });

    records_from_table(&header, rows)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path, source: &SourceConfig) -> Result<SalesDataset, DataUnavailable> {
    let file = std::fs::File::open(path).map_err(|e| DataUnavailable::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = csv::Reader::from_reader(file);
    let header: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for result in reader.records().take(source.max_rows as usize) {
        let record = result?;
        rows.push(record.iter().map(Cell::from_csv).collect());
    }

    records_from_table(&header, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: [&str; 17] = [
        "Invoice ID", "Branch", "City", "Customer_type", "Gender", "Product line",
        "Unit price", "Quantity", "Tax 5%", "Total", "Date", "Time", "Payment",
        "cogs", "gross margin percentage", "gross income", "Rating",
    ];

    const ROWS: [[&str; 17]; 3] = [
        ["750-67-8428", "A", "Yangon", "Member", "Female", "Health and beauty", "74.69", "7", "26.1415", "548.9715", "1/5/2019", "13:08:00", "Ewallet", "522.83", "4.761904762", "26.1415", "9.1"],
        ["226-31-3081", "C", "Naypyitaw", "Normal", "Female", "Electronic accessories", "15.28", "5", "3.82", "80.22", "3/8/2019", "10:29:00", "Cash", "76.4", "4.761904762", "3.82", "9.6"],
        ["631-41-3108", "A", "Yangon", "Normal", "Male", "Home and lifestyle", "46.33", "7", "16.2155", "340.5255", "3/3/2019", "13:23:00", "Credit card", "324.31", "4.761904762", "16.2155", "7.4"],
    ];

    fn header() -> Vec<String> {
        HEADER.iter().map(|h| h.to_string()).collect()
    }

    fn text_rows() -> Vec<Vec<Cell>> {
        ROWS.iter()
            .map(|r| r.iter().map(|v| Cell::Text(v.to_string())).collect())
            .collect()
    }

    #[test]
    fn parses_full_rows() {
        let ds = records_from_table(&header(), text_rows()).unwrap();
        assert_eq!(ds.len(), 3);

        let first = &ds.records[0];
        assert_eq!(first.invoice_id.as_deref(), Some("750-67-8428"));
        assert_eq!(first.city, "Yangon");
        assert_eq!(first.customer_type, "Member");
        assert_eq!(first.product_line, "Health and beauty");
        assert_eq!(first.total, 548.9715);
        assert_eq!(first.rating, 9.1);
        assert_eq!(first.hour, 13);
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2019, 1, 5));
        assert_eq!(first.quantity, Some(7.0));
        assert_eq!(first.payment.as_deref(), Some("Ewallet"));
    }

    #[test]
    fn optional_columns_may_be_absent() {
        let header: Vec<String> = ["Time", "Rating", "Total", "Product line", "Gender", "Customer_type", "City"]
            .iter()
            .map(|h| h.to_string())
            .collect();
        let row = vec![
            Cell::Text("08:15:00".into()),
            Cell::Number(6.5),
            Cell::Number(120.0),
            Cell::Text("Sports and travel".into()),
            Cell::Text("Male".into()),
            Cell::Text("Normal".into()),
            Cell::Text("Mandalay".into()),
        ];
        let ds = records_from_table(&header, vec![row]).unwrap();
        let rec = &ds.records[0];
        assert_eq!(rec.hour, 8);
        assert_eq!(rec.invoice_id, None);
        assert_eq!(rec.date, None);
    }

    #[test]
    fn missing_required_column_fails() {
        let header: Vec<String> = header().into_iter().filter(|h| h != "Rating").collect();
        let err = records_from_table(&header, Vec::new()).unwrap_err();
        assert!(matches!(err, DataUnavailable::MissingColumn("Rating")));
    }

    #[test]
    fn time_must_be_hh_mm_ss() {
        for bad in ["13:08", "25:00:00", "noon", "13:08:00.5"] {
            let mut rows = text_rows();
            rows[1][11] = Cell::Text(bad.to_string());
            let err = records_from_table(&header(), rows).unwrap_err();
            match err {
                DataUnavailable::InvalidTime { row, value } => {
                    assert_eq!(row, 2);
                    assert_eq!(value, bad);
                }
                other => panic!("unexpected error for '{bad}': {other}"),
            }
        }
    }

    #[test]
    fn workbook_time_cells_use_their_time_of_day() {
        let dt = NaiveDate::from_ymd_opt(1899, 12, 31)
            .unwrap()
            .and_hms_opt(19, 45, 0)
            .unwrap();
        assert_eq!(Cell::DateTime(dt).time_of_day(), NaiveTime::from_hms_opt(19, 45, 0));
        assert_eq!(Cell::Number(0.5).time_of_day(), None);
    }

    #[test]
    fn non_numeric_total_fails() {
        let mut rows = text_rows();
        rows[0][9] = Cell::Text("n/a".to_string());
        let err = records_from_table(&header(), rows).unwrap_err();
        assert!(matches!(err, DataUnavailable::InvalidCell { row: 1, column: "Total", .. }));
    }

    #[test]
    fn blank_rows_are_skipped() {
        let mut rows = text_rows();
        rows.insert(1, vec![Cell::Empty; HEADER.len()]);
        rows.push(vec![Cell::Text("  ".into()); HEADER.len()]);
        let ds = records_from_table(&header(), rows).unwrap();
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn column_letters() {
        assert_eq!(column_index("A"), Some(0));
        assert_eq!(column_index("B"), Some(1));
        assert_eq!(column_index("r"), Some(17));
        assert_eq!(column_index("AA"), Some(26));
        assert_eq!(column_index(""), None);
        assert_eq!(column_index("B2"), None);
    }

    fn write_csv(rows: &[[&str; 17]]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "{}", HEADER.join(",")).unwrap();
        for row in rows {
            writeln!(file, "{}", row.join(",")).unwrap();
        }
        file
    }

    #[test]
    fn csv_matches_table_parser() {
        let file = write_csv(&ROWS);
        let from_csv = load_file(file.path(), &SourceConfig::default()).unwrap();
        let from_table = records_from_table(&header(), text_rows()).unwrap();
        assert_eq!(from_csv.records, from_table.records);
    }

    #[test]
    fn csv_respects_max_rows() {
        let file = write_csv(&ROWS);
        let source = SourceConfig {
            max_rows: 2,
            ..SourceConfig::default()
        };
        assert_eq!(load_file(file.path(), &source).unwrap().len(), 2);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("supermarkt_sales.xlsx");
        let err = load_file(&path, &SourceConfig::default()).unwrap_err();
        assert!(matches!(err, DataUnavailable::NotFound(p) if p == path));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        let err = load_file(file.path(), &SourceConfig::default()).unwrap_err();
        assert!(matches!(err, DataUnavailable::UnsupportedFormat(ext) if ext == "txt"));
    }

    /// Lay out `ROWS` the way the sales workbook does: title rows, header on
    /// row 4, table in columns B..R.
    fn write_workbook(path: &Path) {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book.new_sheet("Sales").unwrap();
        sheet.get_cell_mut((2, 1)).set_value("Supermarket sales");
        for (c, h) in HEADER.iter().enumerate() {
            sheet.get_cell_mut((c as u32 + 2, 4)).set_value(*h);
        }
        for (r, row) in ROWS.iter().enumerate() {
            for (c, v) in row.iter().enumerate() {
                let cell = sheet.get_cell_mut((c as u32 + 2, r as u32 + 5));
                match v.parse::<f64>() {
                    Ok(n) => cell.set_value_number(n),
                    Err(_) => cell.set_value(*v),
                };
            }
        }
        umya_spreadsheet::writer::xlsx::write(&book, path).unwrap();
    }

    #[test]
    fn workbook_window_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("supermarkt_sales.xlsx");
        write_workbook(&path);

        let ds = load_file(&path, &SourceConfig::default()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.records[2].city, "Yangon");
        assert_eq!(ds.records[2].hour, 13);
        assert_eq!(ds.records[1].total, 80.22);

        let err = load_file(
            &path,
            &SourceConfig {
                sheet: "Q1".to_string(),
                ..SourceConfig::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, DataUnavailable::MissingSheet(s) if s == "Q1"));
    }
}
