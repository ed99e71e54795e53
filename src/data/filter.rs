use std::collections::BTreeSet;

use super::model::{Dimension, SalesDataset, SalesRecord};

// ---------------------------------------------------------------------------
// Filter selection: which values are allowed per dimension
// ---------------------------------------------------------------------------

/// Allowed values for each filter dimension.
///
/// An empty set means nothing is allowed for that dimension, so no record
/// passes. "Show everything" must be requested explicitly with [`FilterSelection::all`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub cities: BTreeSet<String>,
    pub customer_types: BTreeSet<String>,
    pub genders: BTreeSet<String>,
}

impl FilterSelection {
    /// Every distinct value present in `dataset` selected.
    pub fn all(dataset: &SalesDataset) -> Self {
        let mut selection = Self::default();
        for dim in Dimension::ALL {
            selection.select_all(dim, dataset);
        }
        selection
    }

    pub fn values(&self, dim: Dimension) -> &BTreeSet<String> {
        match dim {
            Dimension::City => &self.cities,
            Dimension::CustomerType => &self.customer_types,
            Dimension::Gender => &self.genders,
        }
    }

    pub fn values_mut(&mut self, dim: Dimension) -> &mut BTreeSet<String> {
        match dim {
            Dimension::City => &mut self.cities,
            Dimension::CustomerType => &mut self.customer_types,
            Dimension::Gender => &mut self.genders,
        }
    }

    /// Flip a single value in or out of `dim`'s selection.
    pub fn toggle(&mut self, dim: Dimension, value: &str) {
        let selected = self.values_mut(dim);
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
    }

    pub fn select_all(&mut self, dim: Dimension, dataset: &SalesDataset) {
        *self.values_mut(dim) = dataset.values(dim).map(str::to_string).collect();
    }

    pub fn select_none(&mut self, dim: Dimension) {
        self.values_mut(dim).clear();
    }

    /// Whether `record` passes all three dimensions.
    pub fn matches(&self, record: &SalesRecord) -> bool {
        Dimension::ALL
            .iter()
            .all(|&dim| self.values(dim).contains(dim.value_of(record)))
    }
}

// ---------------------------------------------------------------------------
// Filtered view
// ---------------------------------------------------------------------------

/// The records of a dataset that pass a selection, in dataset order.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    dataset: &'a SalesDataset,
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    pub fn records(&self) -> impl Iterator<Item = &'a SalesRecord> + '_ {
        let dataset = self.dataset;
        self.indices.iter().map(move |&i| &dataset.records[i])
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Return the view of records passing every dimension of `selection`.
pub fn filter<'a>(dataset: &'a SalesDataset, selection: &FilterSelection) -> FilteredView<'a> {
    let indices = dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| selection.matches(rec))
        .map(|(i, _)| i)
        .collect();

    FilteredView { dataset, indices }
}
