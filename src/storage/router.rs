//! Deterministic shard assignment for edges.
//!
//! An edge (head, tail) is keyed by `head ++ SEP ++ tail`, where SEP is
//! the reserved [`LABEL_SEPARATOR`] byte. The key is hashed with blake3
//! and reduced to `[0, shard_count)` via modulo, so the same edge always
//! lands in the same shard for a fixed shard count.
//!
//! Routing keys on the ordered *pair*: the edges of one vertex are spread
//! over many shards, and (a, b) and (b, a) are routed independently.

/// ASCII "SUB". Reserved: labels must not contain it (it is not escaped).
pub const LABEL_SEPARATOR: u8 = 26;

/// Deterministic edge router: (head, tail) -> shard index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShardRouter {
    shard_count: usize,
}

impl ShardRouter {
    /// Create a router over `shard_count` shards.
    ///
    /// # Panics
    ///
    /// Panics if `shard_count` is 0.
    pub fn new(shard_count: usize) -> Self {
        assert!(shard_count > 0, "shard_count must be > 0");
        Self { shard_count }
    }

    pub fn shard_count(&self) -> usize {
        self.shard_count
    }

    /// Map raw key bytes to a shard index.
    ///
    /// Pure function of the bytes and the shard count.
    pub fn route(&self, key: &[u8]) -> usize {
        let hash = blake3::hash(key);
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&hash.as_bytes()[0..8]);
        (u64::from_le_bytes(prefix) % self.shard_count as u64) as usize
    }

    /// Build the routing key for an edge.
    pub fn routing_key(head: &str, tail: &str) -> Vec<u8> {
        let mut key = Vec::with_capacity(head.len() + 1 + tail.len());
        key.extend_from_slice(head.as_bytes());
        key.push(LABEL_SEPARATOR);
        key.extend_from_slice(tail.as_bytes());
        key
    }

    /// Shard owning the edge (head, tail).
    pub fn shard_for(&self, head: &str, tail: &str) -> usize {
        self.route(&Self::routing_key(head, tail))
    }
}

/// True if the label may be used as a vertex identity. Any string is,
/// including the empty one, unless it holds the separator byte.
pub fn is_valid_label(label: &str) -> bool {
    !label.as_bytes().contains(&LABEL_SEPARATOR)
}
