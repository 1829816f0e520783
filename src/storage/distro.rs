//! Per-shard load diagnostics.
//!
//! Not used for correctness; exposes how evenly the router spreads edges
//! so skew can be spotted in logs or tests.

use std::collections::BTreeMap;

/// Skew above which `log_skew` emits a warning.
pub const SKEW_WARN_THRESHOLD: f64 = 2.0;

/// Per-shard statistics for monitoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardStats {
    pub shard_id: usize,
    /// Endpoints of the edges the shard stores (not the global count).
    pub vertex_count: usize,
    pub edge_count: usize,
}

/// Edge count per shard index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeCountDistro {
    counts: BTreeMap<usize, usize>,
}

impl EdgeCountDistro {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, shard_id: usize, edge_count: usize) {
        self.counts.insert(shard_id, edge_count);
    }

    pub fn get(&self, shard_id: usize) -> Option<usize> {
        self.counts.get(&shard_id).copied()
    }

    /// (shard_id, edge_count) in shard order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().map(|(k, v)| (*k, *v))
    }

    pub fn shard_count(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn mean(&self) -> f64 {
        if self.counts.is_empty() {
            return 0.0;
        }
        self.total() as f64 / self.counts.len() as f64
    }

    pub fn max(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    pub fn min(&self) -> usize {
        self.counts.values().copied().min().unwrap_or(0)
    }

    /// Busiest shard relative to the mean; 1.0 means perfectly even
    /// (and is reported for an empty store).
    pub fn skew(&self) -> f64 {
        let mean = self.mean();
        if mean == 0.0 {
            return 1.0;
        }
        self.max() as f64 / mean
    }

    /// Warn if the busiest shard holds more than `SKEW_WARN_THRESHOLD`
    /// times the mean.
    pub fn log_skew(&self) {
        let skew = self.skew();
        if skew > SKEW_WARN_THRESHOLD {
            tracing::warn!(
                "edge distribution skewed: max={} mean={:.1} skew={:.2} over {} shards",
                self.max(),
                self.mean(),
                skew,
                self.shard_count(),
            );
        } else {
            tracing::debug!("edge distribution skew={:.2}", skew);
        }
    }
}

impl FromIterator<(usize, usize)> for EdgeCountDistro {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}
