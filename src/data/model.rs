use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{NaiveDate, NaiveTime, Timelike};

// ---------------------------------------------------------------------------
// Dimension – a column the sidebar can filter on
// ---------------------------------------------------------------------------

/// The three categorical columns exposed as sidebar filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    City,
    CustomerType,
    Gender,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::City, Dimension::CustomerType, Dimension::Gender];

    /// Header of the source column.
    pub fn column(self) -> &'static str {
        match self {
            Dimension::City => "City",
            Dimension::CustomerType => "Customer_type",
            Dimension::Gender => "Gender",
        }
    }

    /// Label of the sidebar widget.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::City => "Select the City:",
            Dimension::CustomerType => "Select the Customer Type:",
            Dimension::Gender => "Select the Gender:",
        }
    }

    /// The record's value for this dimension.
    pub fn value_of(self, record: &SalesRecord) -> &str {
        match self {
            Dimension::City => &record.city,
            Dimension::CustomerType => &record.customer_type,
            Dimension::Gender => &record.gender,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// ---------------------------------------------------------------------------
// SalesRecord – one row of the sheet
// ---------------------------------------------------------------------------

/// A single sales transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub invoice_id: Option<String>,
    pub branch: Option<String>,
    pub city: String,
    pub customer_type: String,
    pub gender: String,
    pub product_line: String,
    pub unit_price: Option<f64>,
    pub quantity: Option<f64>,
    /// Transaction value including tax.
    pub total: f64,
    pub date: Option<NaiveDate>,
    pub time: NaiveTime,
    /// Hour of day (0–23), derived from `time` at load.
    pub hour: u8,
    pub payment: Option<String>,
    /// Customer rating, 0–10.
    pub rating: f64,
}

impl SalesRecord {
    /// Build a record from its required fields; optional columns start empty.
    pub fn new(
        city: impl Into<String>,
        customer_type: impl Into<String>,
        gender: impl Into<String>,
        product_line: impl Into<String>,
        total: f64,
        rating: f64,
        time: NaiveTime,
    ) -> Self {
        Self {
            invoice_id: None,
            branch: None,
            city: city.into(),
            customer_type: customer_type.into(),
            gender: gender.into(),
            product_line: product_line.into(),
            unit_price: None,
            quantity: None,
            total,
            date: None,
            time,
            hour: time.hour() as u8,
            payment: None,
            rating,
        }
    }
}

// ---------------------------------------------------------------------------
// SalesDataset – the complete loaded sheet
// ---------------------------------------------------------------------------

/// The full parsed dataset with the distinct values of each filter dimension.
#[derive(Debug, Clone, Default)]
pub struct SalesDataset {
    /// All records, in sheet order.
    pub records: Vec<SalesRecord>,
    /// For each dimension the sorted set of distinct values.
    pub unique_values: BTreeMap<Dimension, BTreeSet<String>>,
}

impl SalesDataset {
    /// Build dimension indices from the loaded records.
    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        let mut unique_values: BTreeMap<Dimension, BTreeSet<String>> = Dimension::ALL
            .iter()
            .map(|&dim| (dim, BTreeSet::new()))
            .collect();

        for rec in &records {
            for dim in Dimension::ALL {
                unique_values
                    .entry(dim)
                    .or_default()
                    .insert(dim.value_of(rec).to_string());
            }
        }

        SalesDataset {
            records,
            unique_values,
        }
    }

    /// Distinct values present for `dim`.
    pub fn values(&self, dim: Dimension) -> impl Iterator<Item = &str> {
        self.unique_values
            .get(&dim)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(city: &str, customer_type: &str, gender: &str, line: &str, total: f64, hms: (u32, u32, u32)) -> SalesRecord {
        let time = NaiveTime::from_hms_opt(hms.0, hms.1, hms.2).unwrap();
        SalesRecord::new(city, customer_type, gender, line, total, 7.0, time)
    }

    #[test]
    fn hour_is_derived_from_time() {
        let rec = record("Yangon", "Member", "Female", "Health and beauty", 548.97, (13, 8, 0));
        assert_eq!(rec.hour, 13);
    }

    #[test]
    fn unique_values_cover_every_dimension() {
        let ds = SalesDataset::from_records(vec![
            record("Yangon", "Member", "Female", "Sports", 10.0, (9, 0, 0)),
            record("Mandalay", "Normal", "Male", "Sports", 20.0, (10, 0, 0)),
            record("Yangon", "Normal", "Female", "Sports", 30.0, (11, 0, 0)),
        ]);

        assert_eq!(ds.values(Dimension::City).collect::<Vec<_>>(), ["Mandalay", "Yangon"]);
        assert_eq!(ds.values(Dimension::CustomerType).collect::<Vec<_>>(), ["Member", "Normal"]);
        assert_eq!(ds.values(Dimension::Gender).collect::<Vec<_>>(), ["Female", "Male"]);
    }

    #[test]
    fn empty_dataset_has_empty_value_sets() {
        let ds = SalesDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        for dim in Dimension::ALL {
            assert_eq!(ds.values(dim).count(), 0);
        }
    }
}
