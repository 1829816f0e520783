//! Store configuration and adaptive tuning.
//!
//! `HugeGraphConfig` is a small JSON document (`hugegraph.json`) holding
//! the fixed shard count and the optional fan-out pool size. When no file
//! is given, `HugeGraphConfig::auto_tune()` derives both from the host's
//! RAM and CPU count.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sysinfo::{MemoryRefreshKind, RefreshKind, System};

use crate::error::{GraphError, Result};

// ── Constants ───────────────────────────────────────────────────────

const GB: u64 = 1024 * 1024 * 1024;

/// File name of the persisted config inside a directory.
pub const CONFIG_FILE: &str = "hugegraph.json";

/// Fallback shard count when tuning is bypassed.
pub const DEFAULT_SHARD_COUNT: usize = 4;

/// Upper bound on auto-tuned shard count.
const MAX_AUTO_SHARDS: usize = 16;

/// Upper bound on auto-tuned fan-out threads.
const MAX_FANOUT_THREADS: usize = 4;

// ── HugeGraphConfig ─────────────────────────────────────────────────

/// Construction parameters for a `HugeGraph`.
///
/// The shard count is fixed for the lifetime of the store built from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HugeGraphConfig {
    /// Number of shards.
    pub shard_count: usize,
    /// Worker threads for parallel fan-out. `None` or `<= 1` means serial.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fanout_threads: Option<usize>,
}

impl Default for HugeGraphConfig {
    fn default() -> Self {
        Self {
            shard_count: DEFAULT_SHARD_COUNT,
            fanout_threads: None,
        }
    }
}

impl HugeGraphConfig {
    /// Config derived from the current host's resources.
    pub fn auto_tune() -> Self {
        let profile = TuningProfile::from_resources(&SystemResources::detect());
        tracing::debug!(
            "auto-tuned config: shard_count={} fanout_threads={}",
            profile.shard_count,
            profile.fanout_threads
        );
        Self {
            shard_count: profile.shard_count,
            fanout_threads: Some(profile.fanout_threads),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.shard_count == 0 {
            return Err(GraphError::InvalidShardCount(0));
        }
        if self.fanout_threads == Some(0) {
            return Err(GraphError::Config(
                "fanout_threads must be > 0 when set".to_string(),
            ));
        }
        Ok(())
    }

    /// Read config from `dir`. Returns None if the file doesn't exist.
    pub fn read_from(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(Some(config))
    }

    /// Write config to `dir`.
    pub fn write_to(&self, dir: &Path) -> Result<()> {
        self.validate()?;
        let path = dir.join(CONFIG_FILE);
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)?;
        Ok(())
    }
}

// ── SystemResources ─────────────────────────────────────────────────

/// Snapshot of detected hardware resources.
#[derive(Debug, Clone)]
pub struct SystemResources {
    /// Total physical RAM in bytes.
    pub total_memory_bytes: u64,
    /// Logical CPU count.
    pub cpu_count: usize,
}

impl SystemResources {
    /// Probe the current system for RAM and CPU information.
    pub fn detect() -> Self {
        let mut sys = System::new_with_specifics(
            RefreshKind::new().with_memory(MemoryRefreshKind::everything()),
        );
        sys.refresh_memory();

        let cpu_count = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);

        Self {
            total_memory_bytes: sys.total_memory(),
            cpu_count,
        }
    }
}

// ── TuningProfile ───────────────────────────────────────────────────

/// Parameters computed from system resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuningProfile {
    pub shard_count: usize,
    pub fanout_threads: usize,
}

impl TuningProfile {
    /// Heuristics:
    /// - `shard_count`: `min(16, next_power_of_two(cpu_count))` if RAM >= 2 GB, else 1.
    /// - `fanout_threads`: `clamp(cpu / 2, 1, 4)`, forced to 1 with a single shard.
    pub fn from_resources(res: &SystemResources) -> Self {
        let shard_count = if res.total_memory_bytes >= 2 * GB {
            res.cpu_count.max(1).next_power_of_two().min(MAX_AUTO_SHARDS)
        } else {
            1
        };

        let fanout_threads = if shard_count == 1 {
            1
        } else {
            (res.cpu_count / 2).clamp(1, MAX_FANOUT_THREADS)
        };

        Self {
            shard_count,
            fanout_threads,
        }
    }
}
