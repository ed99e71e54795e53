use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::SourceConfig;
use crate::data::aggregate::{AggregateResult, aggregate};
use crate::data::error::DataUnavailable;
use crate::data::filter::{FilterSelection, filter};
use crate::data::loader::load_file;
use crate::data::model::{Dimension, SalesDataset};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until a load succeeds).
    pub dataset: Option<Arc<SalesDataset>>,

    /// Where the current dataset came from.
    pub source_path: Option<PathBuf>,

    /// Sheet layout used when opening files.
    pub source: SourceConfig,

    /// Sidebar selections.
    pub selection: FilterSelection,

    /// Indices of records passing the current selection (cached for the table).
    pub visible_indices: Vec<usize>,

    /// Figures for the current selection.
    pub summary: AggregateResult,

    /// One palette colour per product line instead of the accent colour.
    pub distinct_colors: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest a newly loaded dataset: select every value and recompute.
    pub fn set_dataset(&mut self, dataset: Arc<SalesDataset>, path: &Path) {
        self.selection = FilterSelection::all(&dataset);
        self.dataset = Some(dataset);
        self.source_path = Some(path.to_path_buf());
        self.status_message = None;
        self.refilter();
    }

    /// Record a failed load. Any previously loaded dataset stays in place.
    pub fn set_load_error(&mut self, err: &DataUnavailable) {
        log::error!("Failed to load sales data: {err}");
        self.status_message = Some(format!("Error: {err}"));
    }

    /// Load `path` outside the process cache (File → Open…).
    pub fn open_file(&mut self, path: &Path) {
        match load_file(path, &self.source) {
            Ok(dataset) => self.set_dataset(Arc::new(dataset), path),
            Err(e) => self.set_load_error(&e),
        }
    }

    /// Recompute `visible_indices` and `summary` after a selection change.
    pub fn refilter(&mut self) {
        let Some(ds) = &self.dataset else {
            self.visible_indices.clear();
            self.summary = AggregateResult::default();
            return;
        };
        let view = filter(ds, &self.selection);
        self.summary = aggregate(&view);
        self.visible_indices = view.into_indices();
        log::debug!(
            "Selection matches {} of {} records",
            self.visible_indices.len(),
            ds.len()
        );
    }

    /// Toggle a single value in a dimension's selection.
    pub fn toggle_filter_value(&mut self, dim: Dimension, value: &str) {
        self.selection.toggle(dim, value);
        self.refilter();
    }

    /// Select all values in a dimension.
    pub fn select_all(&mut self, dim: Dimension) {
        if let Some(ds) = &self.dataset {
            self.selection.select_all(dim, ds);
            self.refilter();
        }
    }

    /// Deselect all values in a dimension.
    pub fn select_none(&mut self, dim: Dimension) {
        self.selection.select_none(dim);
        self.refilter();
    }
}
