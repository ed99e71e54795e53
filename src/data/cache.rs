use std::path::Path;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::error::DataUnavailable;
use super::loader::load_file;
use super::model::SalesDataset;
use crate::config::SourceConfig;

/// Write-once holder for the configured dataset.
///
/// The first successful load wins and is never invalidated. A failed load
/// leaves the cell empty.
#[derive(Debug, Default)]
pub struct DatasetCache {
    cell: OnceCell<Arc<SalesDataset>>,
}

impl DatasetCache {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    pub fn get_or_load(&self, path: &Path, source: &SourceConfig) -> Result<Arc<SalesDataset>, DataUnavailable> {
        self.get_or_try_init(|| load_file(path, source))
    }

    pub fn get_or_try_init<F>(&self, load: F) -> Result<Arc<SalesDataset>, DataUnavailable>
    where
        F: FnOnce() -> Result<SalesDataset, DataUnavailable>,
    {
        self.cell
            .get_or_try_init(|| {
                log::debug!("Dataset cache miss, loading");
                load().map(Arc::new)
            })
            .cloned()
    }

    pub fn get(&self) -> Option<Arc<SalesDataset>> {
        self.cell.get().cloned()
    }
}

static GLOBAL: DatasetCache = DatasetCache::new();

/// The process-wide cache.
pub fn global() -> &'static DatasetCache {
    &GLOBAL
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn loads_once() {
        let cache = DatasetCache::new();
        let calls = Cell::new(0);
        let load = || {
            calls.set(calls.get() + 1);
            Ok(SalesDataset::default())
        };

        let first = cache.get_or_try_init(load).unwrap();
        let second = cache.get_or_try_init(load).unwrap();
        assert_eq!(calls.get(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn failed_load_is_not_cached() {
        let cache = DatasetCache::new();
        let err = cache.get_or_try_init(|| Err(DataUnavailable::MissingColumn("Total")));
        assert!(err.is_err());
        assert!(cache.get().is_none());

        assert!(cache.get_or_try_init(|| Ok(SalesDataset::default())).is_ok());
        assert!(cache.get().is_some());
    }

    #[test]
    fn missing_source_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.xlsx");
        let err = DatasetCache::new()
            .get_or_load(&path, &SourceConfig::default())
            .unwrap_err();
        assert!(matches!(err, DataUnavailable::NotFound(_)));
    }
}
