//! Execution context for per-shard sub-queries.
//!
//! Fan-out is serial unless the caller hands in a rayon pool. The pool is
//! owned by the caller (shared through `Arc`), so its lifetime and
//! shutdown stay under caller control. Results are always returned in
//! shard-index order, so serial and pooled fan-out merge identically.

use std::sync::Arc;

use rayon::prelude::*;

use crate::error::{GraphError, Result};

#[derive(Debug, Clone, Default)]
pub enum FanOut {
    /// Visit shards one after another on the calling thread.
    #[default]
    Serial,
    /// Visit shards in parallel on a caller-provided pool.
    Pool(Arc<rayon::ThreadPool>),
}

impl FanOut {
    /// Build a dedicated pool with `threads` workers (`<= 1` means serial).
    pub fn with_threads(threads: usize) -> Result<Self> {
        if threads <= 1 {
            return Ok(FanOut::Serial);
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("hugegraph-fanout-{i}"))
            .build()
            .map_err(|e| GraphError::FanOut(format!("rayon pool: {e}")))?;
        Ok(FanOut::Pool(Arc::new(pool)))
    }

    pub fn is_parallel(&self) -> bool {
        matches!(self, FanOut::Pool(_))
    }

    /// Run `f` for every shard index in `0..shard_count`.
    pub fn map<T, F>(&self, shard_count: usize, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Sync + Send,
    {
        match self {
            FanOut::Pool(pool) if shard_count > 1 => {
                pool.install(|| (0..shard_count).into_par_iter().map(&f).collect())
            }
            _ => (0..shard_count).map(f).collect(),
        }
    }
}
