//! Path-keyed dataset cache.
//!
//! Loading is idempotent: a second load of the same path returns the cached
//! table as long as the file content checksum is unchanged.

use log::info;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use super::checksum::calculate_checksum;
use super::dataset::Dataset;
use super::loader::{DatasetFormat, DatasetLoader};
use crate::error::{ErrorContext, ExplorerError, ExplorerResult};

struct CachedDataset {
    checksum: String,
    dataset: Arc<Dataset>,
}

/// In-memory cache of loaded datasets.
#[derive(Default)]
pub struct DatasetCache {
    entries: RwLock<HashMap<PathBuf, CachedDataset>>,
}

/// Process-wide cache instance.
static DATASET_CACHE: OnceLock<DatasetCache> = OnceLock::new();

/// Get the process-wide dataset cache.
pub fn dataset_cache() -> &'static DatasetCache {
    DATASET_CACHE.get_or_init(DatasetCache::new)
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `path`, reusing a cached table when the content is unchanged.
    pub fn load(&self, path: &Path) -> ExplorerResult<Arc<Dataset>> {
        let context = || {
            ErrorContext::new("load_dataset")
                .with_entity("dataset")
                .with_entity_id(path.display())
        };

        let format = DatasetFormat::from_path(path)
            .map_err(|e| ExplorerError::load_with_context(e.to_string(), context()))?;
        let key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let bytes = std::fs::read(path).map_err(|e| {
            ExplorerError::load_with_context(
                format!("Failed to read dataset file: {}", e),
                context(),
            )
        })?;
        let checksum = calculate_checksum(&bytes);

        if let Some(entry) = self.entries.read().get(&key) {
            if entry.checksum == checksum {
                return Ok(Arc::clone(&entry.dataset));
            }
        }

        let dataset = DatasetLoader::parse(&bytes, format)
            .map_err(|e| ExplorerError::load_with_context(format!("{:#}", e), context()))?
            .with_source(path);
        info!(
            "Loaded {} accidents from {} ({} rows dropped)",
            dataset.len(),
            path.display(),
            dataset.dropped_rows()
        );

        let dataset = Arc::new(dataset);
        self.entries.write().insert(
            key,
            CachedDataset {
                checksum,
                dataset: Arc::clone(&dataset),
            },
        );
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}
