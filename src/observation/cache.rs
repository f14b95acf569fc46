//! Memoized dataset loading with source freshness checks
//!
//! Freshness contract: a cached dataset is returned only while the source
//! bytes are unchanged. Every lookup re-reads the source and compares a
//! CRC32 fingerprint; any change reloads and replaces the entry. Parsing is
//! what gets skipped on a hit, never the freshness check.

use super::{loader, Dataset};
use crate::error::Result;
use log::{debug, info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Content fingerprint of a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceFingerprint {
    /// Source length in bytes
    pub len: u64,
    /// CRC32 of the source bytes
    pub crc32: u32,
}

impl SourceFingerprint {
    pub fn of_bytes(bytes: &[u8]) -> Self {
        Self {
            len: bytes.len() as u64,
            crc32: crc32fast::hash(bytes),
        }
    }
}

/// Cache identity: the source path as given, plus the metric filtered on
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    path: PathBuf,
    metric: String,
}

#[derive(Debug, Clone)]
struct CachedDataset {
    fingerprint: SourceFingerprint,
    dataset: Arc<Dataset>,
}

/// Dataset cache injected into callers
///
/// Cached datasets are shared read-only; mutating the cache needs `&mut`.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<CacheKey, CachedDataset>,

    /// Statistics
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub reloads: u64,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the dataset for `path`, loading it if absent or stale
    ///
    /// A failed reload drops the stale entry rather than serving it.
    pub fn load<P: AsRef<Path>>(&mut self, path: P, metric: &str) -> Result<Arc<Dataset>> {
        let key = CacheKey {
            path: path.as_ref().to_path_buf(),
            metric: metric.to_string(),
        };

        let bytes = std::fs::read(&key.path)?;
        let fingerprint = SourceFingerprint::of_bytes(&bytes);

        match self.entries.get(&key) {
            Some(entry) if entry.fingerprint == fingerprint => {
                self.cache_hits += 1;
                debug!("Dataset cache hit for {}", key.path.display());
                return Ok(Arc::clone(&entry.dataset));
            }
            Some(_) => {
                self.reloads += 1;
                info!("Source {} changed, reloading", key.path.display());
            }
            None => {
                self.cache_misses += 1;
                debug!("Dataset cache miss for {}", key.path.display());
            }
        }

        let dataset = match loader::load_dataset_from_reader(bytes.as_slice(), metric) {
            Ok(dataset) => Arc::new(dataset),
            Err(err) => {
                self.entries.remove(&key);
                return Err(err);
            }
        };

        info!(
            "Cached {} '{}' observations from {}",
            dataset.len(),
            metric,
            key.path.display()
        );
        self.entries.insert(
            key,
            CachedDataset {
                fingerprint,
                dataset: Arc::clone(&dataset),
            },
        );

        Ok(dataset)
    }

    /// Whether a dataset for `path` is held (it may be stale)
    pub fn contains<P: AsRef<Path>>(&self, path: P, metric: &str) -> bool {
        self.entries.contains_key(&CacheKey {
            path: path.as_ref().to_path_buf(),
            metric: metric.to_string(),
        })
    }

    /// Fingerprint recorded for `path` at its last load
    pub fn fingerprint<P: AsRef<Path>>(&self, path: P, metric: &str) -> Option<SourceFingerprint> {
        self.entries
            .get(&CacheKey {
                path: path.as_ref().to_path_buf(),
                metric: metric.to_string(),
            })
            .map(|entry| entry.fingerprint)
    }

    /// Drop every entry loaded from `path`; returns how many were dropped
    pub fn invalidate<P: AsRef<Path>>(&mut self, path: P) -> usize {
        let path = path.as_ref();
        let before = self.entries.len();
        self.entries.retain(|key, _| key.path != path);
        before - self.entries.len()
    }

    /// Clear all cached data
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cache_hits = 0;
        self.cache_misses = 0;
        self.reloads = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hits over all lookups
    pub fn hit_rate(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses + self.reloads;
        if total == 0 {
            0.0
        } else {
            self.cache_hits as f64 / total as f64
        }
    }
}
