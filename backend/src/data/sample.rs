//! Working sample: the subset of the dataset that is actually rendered.

use log::info;
use std::sync::Arc;

use super::dataset::Dataset;
use crate::models::Record;

/// Smallest sample the dashboard will draw.
pub const MIN_SAMPLE_SIZE: usize = 1_000;
/// Seed used when none is configured.
pub const DEFAULT_SAMPLE_SEED: u64 = 42;

/// A seeded uniform sample of dataset rows.
///
/// Each draw carries a generation number. Category domains derived from the
/// sample are keyed on it.
#[derive(Debug, Clone)]
pub struct WorkingSample {
    dataset: Arc<Dataset>,
    rows: Vec<usize>,
    generation: u64,
}

impl WorkingSample {
    /// Clamp a requested size to `[MIN_SAMPLE_SIZE, dataset_len]`.
    ///
    /// A dataset smaller than the minimum is used whole.
    pub fn clamp_size(requested: usize, dataset_len: usize) -> usize {
        requested.max(MIN_SAMPLE_SIZE).min(dataset_len)
    }

    /// Draw a sample of (clamped) `requested` rows.
    pub fn draw(dataset: Arc<Dataset>, requested: usize, seed: u64, generation: u64) -> Self {
        let total = dataset.len();
        let size = Self::clamp_size(requested, total);

        let rows = if size < total {
            // partial Fisher-Yates: the first `size` slots end up uniformly chosen
            let mut rng = fastrand::Rng::with_seed(seed);
            let mut indices: Vec<usize> = (0..total).collect();
            for i in 0..size {
                let j = rng.usize(i..total);
                indices.swap(i, j);
            }
            indices.truncate(size);
            indices
        } else {
            (0..total).collect()
        };

        info!(
            "Drew working sample generation {}: {} of {} rows",
            generation, size, total
        );

        Self {
            dataset,
            rows,
            generation,
        }
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True when every dataset row is in the sample.
    pub fn is_complete(&self) -> bool {
        self.rows.len() == self.dataset.len()
    }

    /// Records in sample order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.rows
            .iter()
            .filter_map(move |&i| self.dataset.record(i))
    }
}
