//! Authoritative vertex membership for a sharded graph.
//!
//! Shards only learn about vertices that have edges placed in them; the
//! registry is the single source of truth for "is this vertex in the
//! graph" and for the global vertex count.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::graph::Vertex;

/// Map of label -> vertex. First write wins.
///
/// Interior locking only protects the map itself. `HugeGraph` serializes
/// registry mutations with edge dispatch under its own write gate.
#[derive(Debug, Default)]
pub struct VertexRegistry {
    vertices: RwLock<HashMap<Vertex, Vertex>>,
}

impl VertexRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Insert the vertex unless its label is already present.
    ///
    /// Returns false (and keeps the existing entry) on a duplicate.
    pub fn add(&self, vertex: &Vertex) -> bool {
        let mut map = self.vertices.write().unwrap_or_else(PoisonError::into_inner);
        if map.contains_key(vertex) {
            return false;
        }
        map.insert(vertex.clone(), vertex.clone());
        true
    }

    pub fn contains(&self, label: &str) -> bool {
        self.vertices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(label)
    }

    /// The registered instance for `label`.
    pub fn locate(&self, label: &str) -> Option<Vertex> {
        self.vertices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(label)
            .cloned()
    }

    /// Delete the entry. Does not touch shards.
    pub fn remove(&self, label: &str) -> Option<Vertex> {
        self.vertices
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(label)
    }

    /// Iterate over the vertices present when the call was made.
    ///
    /// Later mutations are not reflected; call again for a fresh view.
    pub fn all_vertices(&self) -> impl Iterator<Item = Vertex> {
        let snapshot: Vec<Vertex> = self
            .vertices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        snapshot.into_iter()
    }

    pub fn len(&self) -> usize {
        self.vertices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
