//! Dataset loading, caching and sampling.
//!
//! ```text
//! file ──► DatasetLoader ──► Dataset ──► DatasetCache (by path + checksum)
//!                                │
//!                                ▼
//!                          WorkingSample (seeded, size-bounded)
//! ```

pub mod cache;
pub mod checksum;
pub mod dataset;
pub mod loader;
pub mod sample;

pub use cache::{dataset_cache, DatasetCache};
pub use checksum::calculate_checksum;
pub use dataset::{Dataset, DatasetSummary};
pub use loader::{DatasetFormat, DatasetLoader};
pub use sample::{WorkingSample, DEFAULT_SAMPLE_SEED, MIN_SAMPLE_SIZE};
