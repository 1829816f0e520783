//! Graph vocabulary and capability traits

pub mod partition;
pub mod traversal;

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::Result;

pub use partition::GraphPartition;

// ── Vertex ─────────────────────────────────────────────────────────

/// A vertex, identified by its label.
///
/// Two vertices with the same label are the same vertex. The label is
/// reference-counted so shards, edge keys and the registry can all hold
/// it without copying the string.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex {
    label: Arc<str>,
}

impl Vertex {
    pub fn new(label: impl Into<Arc<str>>) -> Self {
        Self { label: label.into() }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

// Lets label-keyed maps be queried with a plain `&str`.
impl Borrow<str> for Vertex {
    fn borrow(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex({:?})", &*self.label)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl From<&str> for Vertex {
    fn from(label: &str) -> Self {
        Vertex::new(label)
    }
}

impl From<String> for Vertex {
    fn from(label: String) -> Self {
        Vertex::new(label)
    }
}

// ── Edge ───────────────────────────────────────────────────────────

/// Identity of a directed edge: the ordered (head, tail) label pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    pub head: Vertex,
    pub tail: Vertex,
}

impl EdgeKey {
    pub fn new(head: impl Into<Vertex>, tail: impl Into<Vertex>) -> Self {
        Self {
            head: head.into(),
            tail: tail.into(),
        }
    }
}

/// Directed edge, optionally weighted.
///
/// Equality and hashing only look at the (head, tail) pair, so a set of
/// edges never holds the same pair twice regardless of weight.
#[derive(Debug, Clone)]
pub struct Edge {
    pub head: Vertex,
    pub tail: Vertex,
    /// `None` for unweighted edges.
    pub weight: Option<f64>,
}

impl Edge {
    pub fn new(head: Vertex, tail: Vertex) -> Self {
        Self { head, tail, weight: None }
    }

    pub fn weighted(head: Vertex, tail: Vertex, weight: f64) -> Self {
        Self {
            head,
            tail,
            weight: Some(weight),
        }
    }

    pub fn key(&self) -> EdgeKey {
        EdgeKey {
            head: self.head.clone(),
            tail: self.tail.clone(),
        }
    }

    pub fn is_weighted(&self) -> bool {
        self.weight.is_some()
    }

    /// The endpoint that is not `label` (the vertex itself for a self-loop).
    pub fn opposite(&self, label: &str) -> &Vertex {
        if self.head.label() == label {
            &self.tail
        } else {
            &self.head
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.head == other.head && self.tail == other.tail
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.head.hash(state);
        self.tail.hash(state);
    }
}

// ── Capability Traits ──────────────────────────────────────────────

/// Read surface shared by every graph store, sharded or not.
///
/// Vertex-keyed queries take a label; an unknown label yields the empty
/// answer (`0`, empty `Vec`), never an error.
pub trait GraphStore: Send + Sync {
    fn contains_vertex(&self, label: &str) -> bool;

    fn contains_edge(&self, head: &str, tail: &str) -> bool;

    /// Number of edges incident to the vertex (in + out, self-loop once).
    fn degree(&self, label: &str) -> usize;

    /// Opposite endpoint of every incident edge, outgoing first.
    fn adjacent_vertices(&self, label: &str) -> Vec<Vertex>;

    /// Every incident edge, outgoing first.
    fn edges_of(&self, label: &str) -> Vec<Edge>;

    fn edge_set(&self) -> HashSet<Edge>;

    fn vertex_set(&self) -> HashSet<Vertex>;

    fn edge_count(&self) -> usize;

    fn vertex_count(&self) -> usize;
}

/// Write surface of a single shard.
///
/// A shard is not synchronized internally; whoever owns it serializes
/// access (see `HugeGraph`).
pub trait ShardStore: GraphStore {
    /// Returns false if the vertex was already present.
    fn add_vertex(&mut self, vertex: Vertex) -> Result<bool>;

    /// Adds (or re-weights) the edge, registering both endpoints.
    fn add_edge(&mut self, head: &Vertex, tail: &Vertex, weight: Option<f64>) -> Result<Edge>;

    /// Removes the vertex and all its incident edges. False if absent.
    fn remove_vertex(&mut self, label: &str) -> Result<bool>;

    /// False if the edge was not stored here. An endpoint left with no
    /// edges is dropped unless it was added with `add_vertex`.
    fn remove_edge(&mut self, key: &EdgeKey) -> Result<bool>;

    /// Removes every edge incident to the vertex. The vertex stays only if
    /// it was added with `add_vertex`. Returns the number of edges removed.
    fn remove_edges(&mut self, label: &str) -> Result<usize>;
}

/// Whole-graph topology queries.
///
/// A store that cannot answer these correctly (the sharded store, whose
/// edges are split across partitions) returns `GraphError::Unsupported`
/// from every method instead of a partial answer.
pub trait TopologyQuery {
    /// Shortest-path tree rooted at `from` (Dijkstra; unweighted edges cost 1).
    fn shortest_path(&self, from: &str) -> Result<GraphPartition>;

    /// Breadth-first order of every vertex reachable from `start`.
    fn traverse(&self, start: &str) -> Result<Vec<Vertex>>;

    /// Breadth-first order up to `max_depth` hops from `start`.
    fn traversal(&self, start: &str, max_depth: usize) -> Result<Vec<Vertex>>;

    /// Sum of all vertex degrees.
    fn total_degree(&self) -> Result<usize>;

    /// Weakly connected component containing the vertex.
    fn connected_set(&self, label: &str) -> Result<HashSet<Vertex>>;

    /// All weakly connected components.
    fn connected_sets(&self) -> Result<Vec<HashSet<Vertex>>>;

    fn is_connected(&self, a: &str, b: &str) -> Result<bool>;

    /// Union of the neighbourhoods of every listed vertex.
    fn adjacent_vertices_of_all(&self, vertices: &[Vertex]) -> Result<HashSet<Vertex>>;

    /// Out-neighbour reached over the lowest-weight edge.
    fn closest(&self, label: &str) -> Result<Option<Vertex>>;

    fn clone_vertices(&self) -> Result<Vec<Vertex>>;

    /// Fresh empty graph of the same kind.
    fn graph_factory(&self) -> Result<GraphPartition>;

    /// Drop any cached component partition.
    fn forget_connected_sets(&self) -> Result<()>;
}
