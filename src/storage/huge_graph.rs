//! HugeGraph — one logical graph over N `GraphPartition` shards.
//!
//! - **Vertices** live only in the `VertexRegistry`. Adding a vertex never
//!   touches a shard.
//! - **Edges** are routed by `ShardRouter` on the (head, tail) label pair
//!   to exactly one shard.
//! - **Vertex-keyed queries** fan out to every shard, because one vertex's
//!   edges may be spread over all of them, and merge the partial results.
//! - **Removals** cascade to every shard unconditionally. Each shard's
//!   removal is independent; a failing shard is logged and skipped.
//!
//! # Concurrency
//!
//! Structural mutations (`add`, `add_edge*`, `insert_edge`, `remove*`)
//! serialize on one store-wide write gate. Reads take only per-shard read
//! locks, one shard at a time, so they run alongside each other and
//! alongside a mutation in flight. A read racing a mutation may see a
//! torn cross-shard snapshot; a read issued after a mutation returned
//! always sees it.
//!
//! Whole-graph topology (`TopologyQuery`) is not supported and fails
//! with `GraphError::Unsupported`.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::HugeGraphConfig;
use crate::error::{GraphError, Result};
use crate::graph::{
    Edge, EdgeKey, GraphPartition, GraphStore, ShardStore, TopologyQuery, Vertex,
};
use crate::storage::distro::{EdgeCountDistro, ShardStats};
use crate::storage::fanout::FanOut;
use crate::storage::registry::VertexRegistry;
use crate::storage::router::{is_valid_label, ShardRouter};

/// Sharded graph store.
///
/// `Send + Sync`: share it between threads with `Arc<HugeGraph>`.
pub struct HugeGraph {
    router: ShardRouter,

    /// N shards, indexed by shard id. Fixed for the store's lifetime.
    shards: Vec<RwLock<GraphPartition>>,

    registry: VertexRegistry,

    /// Store-wide gate for structural mutations.
    write_gate: Mutex<()>,

    fanout: FanOut,
}

// ── Constructors ───────────────────────────────────────────────────

impl HugeGraph {
    /// Create a store with `shard_count` shards and serial fan-out.
    pub fn new(shard_count: usize) -> Result<Self> {
        Self::with_fanout(shard_count, FanOut::Serial)
    }

    /// Create a store that runs per-shard reads through `fanout`.
    pub fn with_fanout(shard_count: usize, fanout: FanOut) -> Result<Self> {
        if shard_count == 0 {
            return Err(GraphError::InvalidShardCount(shard_count));
        }

        let shards = (0..shard_count)
            .map(|_| RwLock::new(GraphPartition::new()))
            .collect();

        tracing::debug!(
            "HugeGraph: {} shards, parallel fan-out: {}",
            shard_count,
            fanout.is_parallel()
        );

        Ok(Self {
            router: ShardRouter::new(shard_count),
            shards,
            registry: VertexRegistry::new(),
            write_gate: Mutex::new(()),
            fanout,
        })
    }

    /// Create a store from configuration, building a fan-out pool if the
    /// config asks for more than one thread.
    pub fn from_config(config: &HugeGraphConfig) -> Result<Self> {
        config.validate()?;
        let fanout = FanOut::with_threads(config.fanout_threads.unwrap_or(1))?;
        Self::with_fanout(config.shard_count, fanout)
    }
}

// ── Lock Helpers ───────────────────────────────────────────────────

impl HugeGraph {
    // Poisoning is recovered: every shard mutation here is a single
    // `ShardStore` call, so a panic elsewhere cannot leave a shard torn.

    fn gate(&self) -> MutexGuard<'_, ()> {
        self.write_gate.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_shard(&self, shard_id: usize) -> RwLockReadGuard<'_, GraphPartition> {
        self.shards[shard_id]
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_shard(&self, shard_id: usize) -> RwLockWriteGuard<'_, GraphPartition> {
        self.shards[shard_id]
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` against every shard and collect results in shard order.
    fn fan_out<T, F>(&self, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(&GraphPartition) -> T + Sync + Send,
    {
        self.fanout
            .map(self.shards.len(), |i| f(&*self.read_shard(i)))
    }
}

fn check_label(label: &str) -> Result<()> {
    if !is_valid_label(label) {
        return Err(GraphError::InvalidLabel(label.to_string()));
    }
    Ok(())
}

// ── Write Operations ───────────────────────────────────────────────

impl HugeGraph {
    /// Register a vertex. Re-adding an existing label is a silent no-op.
    pub fn add(&self, vertex: &Vertex) -> Result<()> {
        check_label(vertex.label())?;
        let _gate = self.gate();
        if !self.registry.add(vertex) {
            tracing::trace!("add: vertex {:?} already present", vertex.label());
        }
        Ok(())
    }

    /// Add an unweighted edge to the shard owning (head, tail).
    pub fn add_edge(&self, head: &Vertex, tail: &Vertex) -> Result<Edge> {
        self.dispatch_edge(head, tail, None)
    }

    /// Add a weighted edge to the shard owning (head, tail).
    pub fn add_weighted_edge(&self, head: &Vertex, tail: &Vertex, weight: f64) -> Result<Edge> {
        self.dispatch_edge(head, tail, Some(weight))
    }

    /// Add a prebuilt edge, keeping its weight (or lack of one).
    pub fn insert_edge(&self, edge: Edge) -> Result<Edge> {
        self.dispatch_edge(&edge.head, &edge.tail, edge.weight)
    }

    /// Endpoints are not registered as vertices here; callers `add` them
    /// first. Shard failures are returned unchanged.
    fn dispatch_edge(&self, head: &Vertex, tail: &Vertex, weight: Option<f64>) -> Result<Edge> {
        check_label(head.label())?;
        check_label(tail.label())?;

        let _gate = self.gate();
        let shard_id = self.router.shard_for(head.label(), tail.label());
        tracing::trace!(
            "add_edge: {:?} -> {:?} routed to shard {}",
            head.label(),
            tail.label(),
            shard_id
        );
        self.write_shard(shard_id).add_edge(head, tail, weight)
    }

    /// Remove a vertex: cascade to every shard, then drop it from the
    /// registry. Returns whether the registry held it.
    pub fn remove(&self, vertex: &Vertex) -> bool {
        let label = vertex.label();
        let _gate = self.gate();
        self.cascade("remove", |shard| shard.remove_vertex(label).map(usize::from));
        self.registry.remove(label).is_some()
    }

    /// Remove one edge from every shard. Returns whether any shard held it.
    pub fn remove_edge(&self, key: &EdgeKey) -> bool {
        let _gate = self.gate();
        self.cascade("remove_edge", |shard| shard.remove_edge(key).map(usize::from)) > 0
    }

    /// Remove every edge incident to the vertex, in every shard. The
    /// vertex stays registered. Returns the number of edges removed.
    pub fn remove_edges(&self, vertex: &Vertex) -> usize {
        let label = vertex.label();
        let _gate = self.gate();
        self.cascade("remove_edges", |shard| shard.remove_edges(label))
    }

    /// Apply `op` to every shard, continuing past per-shard failures.
    /// Caller holds the write gate. Returns the summed per-shard counts.
    fn cascade<F>(&self, what: &str, op: F) -> usize
    where
        F: Fn(&mut GraphPartition) -> Result<usize>,
    {
        let mut total = 0;
        for shard_id in 0..self.shards.len() {
            let mut shard = self.write_shard(shard_id);
            match op(&mut *shard) {
                Ok(n) => total += n,
                Err(e) => {
                    tracing::warn!("{}: shard {} failed, continuing: {}", what, shard_id, e);
                }
            }
        }
        total
    }
}

// ── Vertex Lookup ──────────────────────────────────────────────────

impl HugeGraph {
    pub fn contains(&self, vertex: &Vertex) -> bool {
        self.registry.contains(vertex.label())
    }

    /// The registered instance for `label`.
    pub fn locate_vertex(&self, label: &str) -> Option<Vertex> {
        self.registry.locate(label)
    }

    /// Iterate over the vertices registered when the call was made.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> {
        self.registry.all_vertices()
    }
}

// ── Shard Diagnostics ──────────────────────────────────────────────

impl HugeGraph {
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Shard index the edge (head, tail) is routed to.
    pub fn shard_for(&self, head: &Vertex, tail: &Vertex) -> usize {
        self.router.shard_for(head.label(), tail.label())
    }

    /// Edge count per shard index.
    pub fn edge_count_distro(&self) -> EdgeCountDistro {
        self.fan_out(|shard| shard.edge_count())
            .into_iter()
            .enumerate()
            .collect()
    }

    /// Per-shard statistics for monitoring.
    pub fn shard_stats(&self) -> Vec<ShardStats> {
        self.fan_out(|shard| (shard.vertex_count(), shard.edge_count()))
            .into_iter()
            .enumerate()
            .map(|(shard_id, (vertex_count, edge_count))| ShardStats {
                shard_id,
                vertex_count,
                edge_count,
            })
            .collect()
    }
}

// ── Read Surface ───────────────────────────────────────────────────

impl GraphStore for HugeGraph {
    fn contains_vertex(&self, label: &str) -> bool {
        self.registry.contains(label)
    }

    /// Only the owning shard is consulted.
    fn contains_edge(&self, head: &str, tail: &str) -> bool {
        let shard_id = self.router.shard_for(head, tail);
        self.read_shard(shard_id).contains_edge(head, tail)
    }

    fn degree(&self, label: &str) -> usize {
        self.fan_out(|shard| shard.degree(label)).into_iter().sum()
    }

    fn adjacent_vertices(&self, label: &str) -> Vec<Vertex> {
        self.fan_out(|shard| shard.adjacent_vertices(label))
            .into_iter()
            .flatten()
            .collect()
    }

    fn edges_of(&self, label: &str) -> Vec<Edge> {
        self.fan_out(|shard| shard.edges_of(label))
            .into_iter()
            .flatten()
            .collect()
    }

    fn edge_set(&self) -> HashSet<Edge> {
        self.fan_out(|shard| shard.edge_set())
            .into_iter()
            .flatten()
            .collect()
    }

    /// Registry view; shards are not consulted.
    fn vertex_set(&self) -> HashSet<Vertex> {
        self.registry.all_vertices().collect()
    }

    fn edge_count(&self) -> usize {
        self.fan_out(|shard| shard.edge_count()).into_iter().sum()
    }

    /// Registry size; shards are not consulted.
    fn vertex_count(&self) -> usize {
        self.registry.len()
    }
}

// ── Unsupported Surface ────────────────────────────────────────────

/// Edges of one vertex are spread over shards, so none of these can be
/// answered from a single shard, and this store has no cross-shard
/// algorithms. Each call fails instead of returning a partial answer.
impl TopologyQuery for HugeGraph {
    fn shortest_path(&self, _from: &str) -> Result<GraphPartition> {
        Err(GraphError::unsupported("shortest_path"))
    }

    fn traverse(&self, _start: &str) -> Result<Vec<Vertex>> {
        Err(GraphError::unsupported("traverse"))
    }

    fn traversal(&self, _start: &str, _max_depth: usize) -> Result<Vec<Vertex>> {
        Err(GraphError::unsupported("traversal"))
    }

    fn total_degree(&self) -> Result<usize> {
        Err(GraphError::unsupported("total_degree"))
    }

    fn connected_set(&self, _label: &str) -> Result<HashSet<Vertex>> {
        Err(GraphError::unsupported("connected_set"))
    }

    fn connected_sets(&self) -> Result<Vec<HashSet<Vertex>>> {
        Err(GraphError::unsupported("connected_sets"))
    }

    fn is_connected(&self, _a: &str, _b: &str) -> Result<bool> {
        Err(GraphError::unsupported("is_connected"))
    }

    fn adjacent_vertices_of_all(&self, _vertices: &[Vertex]) -> Result<HashSet<Vertex>> {
        Err(GraphError::unsupported("adjacent_vertices_of_all"))
    }

    fn closest(&self, _label: &str) -> Result<Option<Vertex>> {
        Err(GraphError::unsupported("closest"))
    }

    fn clone_vertices(&self) -> Result<Vec<Vertex>> {
        Err(GraphError::unsupported("clone_vertices"))
    }

    fn graph_factory(&self) -> Result<GraphPartition> {
        Err(GraphError::unsupported("graph_factory"))
    }

    fn forget_connected_sets(&self) -> Result<()> {
        Err(GraphError::unsupported("forget_connected_sets"))
    }
}

// ── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // -- Test Helpers ----------------------------------------------------------

    fn v(label: &str) -> Vertex {
        Vertex::new(label)
    }

    fn graph_with(shards: usize, labels: &[&str]) -> HugeGraph {
        let g = HugeGraph::new(shards).unwrap();
        for l in labels {
            g.add(&v(l)).unwrap();
        }
        g
    }

    /// Find a head label whose edge to `tail` routes to a different shard
    /// than `other -> tail`.
    fn split_pair(g: &HugeGraph, tail: &str, other: &str) -> String {
        let target = g.shard_for(&v(other), &v(tail));
        (0..1000)
            .map(|i| format!("h{}", i))
            .find(|h| g.shard_for(&v(h), &v(tail)) != target)
            .expect("some label routes elsewhere")
    }

    // -- Construction ----------------------------------------------------------

    #[test]
    fn test_zero_shards_rejected() {
        assert!(matches!(
            HugeGraph::new(0),
            Err(GraphError::InvalidShardCount(0))
        ));
    }

    #[test]
    fn test_from_config() {
        let config = HugeGraphConfig {
            shard_count: 3,
            fanout_threads: Some(2),
        };
        let g = HugeGraph::from_config(&config).unwrap();
        assert_eq!(g.shard_count(), 3);
        assert_eq!(g.edge_count_distro().shard_count(), 3);
    }

    // -- Vertices ---------------------------------------------------------------

    #[test]
    fn test_add_is_registry_only() {
        let g = graph_with(4, &["a", "b", "a"]);

        assert_eq!(g.vertex_count(), 2);
        assert!(g.contains(&v("a")));
        assert!(g.contains_vertex("b"));
        assert!(!g.contains_vertex("c"));
        assert!(g.shard_stats().iter().all(|s| s.vertex_count == 0));
    }

    #[test]
    fn test_invalid_labels_rejected() {
        let g = HugeGraph::new(2).unwrap();
        let bad = v("a\u{1a}b");

        assert!(matches!(g.add(&bad), Err(GraphError::InvalidLabel(_))));
        assert!(matches!(
            g.add_edge(&v("a"), &bad),
            Err(GraphError::InvalidLabel(_))
        ));
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_empty_label_counts_as_vertex() {
        let g = HugeGraph::new(2).unwrap();
        g.add(&v("")).unwrap();
        g.add(&v("")).unwrap();

        assert_eq!(g.vertex_count(), 1);
        assert!(g.contains(&v("")));

        g.add(&v("a")).unwrap();
        g.add_edge(&v(""), &v("a")).unwrap();
        assert!(g.contains_edge("", "a"));
        assert_eq!(g.degree(""), 1);

        assert!(g.remove(&v("")));
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_locate_and_iterate() {
        let g = graph_with(2, &["x", "y"]);
        assert_eq!(g.locate_vertex("x"), Some(v("x")));
        assert_eq!(g.locate_vertex("z"), None);

        let mut labels: Vec<String> = g.vertices().map(|v| v.to_string()).collect();
        labels.sort();
        assert_eq!(labels, vec!["x", "y"]);
        assert_eq!(g.vertex_set().len(), 2);
    }

    // -- Edges ------------------------------------------------------------------

    #[test]
    fn test_edge_lands_in_routed_shard_only() {
        let g = graph_with(8, &["a", "b"]);
        g.add_edge(&v("a"), &v("b")).unwrap();

        let owner = g.shard_for(&v("a"), &v("b"));
        for stats in g.shard_stats() {
            let expected = usize::from(stats.shard_id == owner);
            assert_eq!(stats.edge_count, expected, "shard {}", stats.shard_id);
        }
        assert!(g.contains_edge("a", "b"));
        assert!(!g.contains_edge("b", "a"));
    }

    #[test]
    fn test_weighted_and_prebuilt_edges() {
        let g = graph_with(3, &["a", "b", "c"]);
        let e = g.add_weighted_edge(&v("a"), &v("b"), 0.25).unwrap();
        assert_eq!(e.weight, Some(0.25));

        g.insert_edge(Edge::weighted(v("b"), v("c"), 2.0)).unwrap();
        g.insert_edge(Edge::new(v("c"), v("a"))).unwrap();

        assert_eq!(g.edge_count(), 3);
        let weights: Vec<Option<f64>> = g.edges_of("b").iter().map(|e| e.weight).collect();
        assert!(weights.contains(&Some(0.25)));
        assert!(weights.contains(&Some(2.0)));
    }

    #[test]
    fn test_shard_failure_propagates() {
        let g = graph_with(2, &["a", "b"]);
        let err = g.add_weighted_edge(&v("a"), &v("b"), f64::INFINITY).unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight(_)));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_readding_edge_does_not_duplicate() {
        let g = graph_with(4, &["a", "b"]);
        g.add_edge(&v("a"), &v("b")).unwrap();
        g.add_weighted_edge(&v("a"), &v("b"), 3.0).unwrap();

        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.edge_set().len(), 1);
    }

    // -- Fan-out Reads ----------------------------------------------------------

    #[test]
    fn test_vertex_queries_merge_across_shards() {
        let g = HugeGraph::new(4).unwrap();
        let h = split_pair(&g, "t", "a");
        for l in ["a", "t", h.as_str()] {
            g.add(&v(l)).unwrap();
        }
        g.add_edge(&v("a"), &v("t")).unwrap();
        g.add_edge(&v(&h), &v("t")).unwrap();

        // the two edges of "t" sit in different shards
        assert_ne!(g.shard_for(&v("a"), &v("t")), g.shard_for(&v(&h), &v("t")));

        assert_eq!(g.degree("t"), 2);
        let adjacent: HashSet<Vertex> = g.adjacent_vertices("t").into_iter().collect();
        assert_eq!(adjacent, [v("a"), v(&h)].into_iter().collect());
        assert_eq!(g.edges_of("t").len(), 2);
        assert_eq!(g.degree("missing"), 0);
    }

    #[test]
    fn test_edge_set_is_union() {
        let g = graph_with(3, &["a", "b", "c"]);
        g.add_edge(&v("a"), &v("b")).unwrap();
        g.add_edge(&v("b"), &v("c")).unwrap();
        g.add_edge(&v("c"), &v("a")).unwrap();

        let set = g.edge_set();
        assert_eq!(set.len(), 3);
        assert_eq!(set.len(), g.edge_count());
        assert!(set.contains(&Edge::new(v("c"), v("a"))));
    }

    #[test]
    fn test_pooled_fanout_matches_serial() {
        let serial = HugeGraph::new(5).unwrap();
        let pooled = HugeGraph::with_fanout(5, FanOut::with_threads(3).unwrap()).unwrap();

        for g in [&serial, &pooled] {
            for i in 0..30 {
                g.add(&v(&format!("w{}", i))).unwrap();
            }
            for i in 0..30 {
                g.add_edge(&v(&format!("w{}", i)), &v(&format!("w{}", (i * 7) % 30)))
                    .unwrap();
            }
        }

        assert_eq!(serial.edge_count(), pooled.edge_count());
        assert_eq!(serial.edge_set(), pooled.edge_set());
        assert_eq!(serial.edge_count_distro(), pooled.edge_count_distro());
        for i in 0..30 {
            let label = format!("w{}", i);
            assert_eq!(serial.degree(&label), pooled.degree(&label));
            assert_eq!(
                serial.adjacent_vertices(&label),
                pooled.adjacent_vertices(&label)
            );
        }
    }

    // -- Removal ----------------------------------------------------------------

    #[test]
    fn test_remove_cascades() {
        let g = graph_with(2, &["a", "b", "c"]);
        g.add_edge(&v("a"), &v("b")).unwrap();
        g.add_edge(&v("b"), &v("c")).unwrap();
        g.add_edge(&v("a"), &v("c")).unwrap();

        assert!(g.remove(&v("b")));
        assert!(!g.remove(&v("b")));

        assert!(!g.contains(&v("b")));
        assert_eq!(g.degree("b"), 0);
        assert_eq!(g.adjacent_vertices("a"), vec![v("c")]);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.vertex_count(), 2);
    }

    #[test]
    fn test_remove_edge_and_edges() {
        let g = graph_with(4, &["a", "b", "c"]);
        g.add_edge(&v("a"), &v("b")).unwrap();
        g.add_edge(&v("c"), &v("a")).unwrap();
        g.add_edge(&v("b"), &v("c")).unwrap();

        assert!(g.remove_edge(&EdgeKey::new("a", "b")));
        assert!(!g.remove_edge(&EdgeKey::new("a", "b")));
        assert_eq!(g.edge_count(), 2);

        assert_eq!(g.remove_edges(&v("c")), 2);
        assert_eq!(g.edge_count(), 0);
        assert!(g.contains(&v("c")));
    }

    #[test]
    fn test_edge_removal_releases_shard_bookkeeping() {
        let g = graph_with(4, &["a", "b"]);
        g.add_edge(&v("a"), &v("b")).unwrap();
        let owner = g.shard_for(&v("a"), &v("b"));
        assert_eq!(g.shard_stats()[owner].vertex_count, 2);

        assert!(g.remove_edge(&EdgeKey::new("a", "b")));
        assert!(g.shard_stats().iter().all(|s| s.vertex_count == 0));

        g.add_edge(&v("a"), &v("b")).unwrap();
        assert_eq!(g.remove_edges(&v("b")), 1);
        assert!(g.shard_stats().iter().all(|s| s.vertex_count == 0));
        assert_eq!(g.vertex_count(), 2);
    }

    #[test]
    fn test_cascade_survives_shard_failure() {
        let g = graph_with(4, &["hub"]);
        for i in 0..40 {
            g.add_edge(&v("hub"), &v(&format!("w{}", i))).unwrap();
        }
        let per_shard: Vec<usize> = g.shard_stats().iter().map(|s| s.edge_count).collect();
        let failing = per_shard
            .iter()
            .position(|n| *n > 0)
            .expect("some shard holds hub edges");

        // one shard refuses; the rest are still visited
        g.write_shard(failing).add_vertex(v("locked")).unwrap();
        let removed = g.cascade("remove_edges", |shard| {
            if shard.contains_vertex("locked") {
                return Err(GraphError::Config("shard locked".to_string()));
            }
            shard.remove_edges("hub")
        });

        assert_eq!(removed, 40 - per_shard[failing]);
        assert_eq!(g.degree("hub"), per_shard[failing]);
        for stats in g.shard_stats() {
            let expected = if stats.shard_id == failing { per_shard[failing] } else { 0 };
            assert_eq!(stats.edge_count, expected, "shard {}", stats.shard_id);
        }
    }

    // -- Distro -----------------------------------------------------------------

    #[test]
    fn test_edge_count_distro_sums_to_total() {
        let g = graph_with(4, &["a", "b", "c"]);
        g.add_edge(&v("a"), &v("b")).unwrap();
        g.add_edge(&v("b"), &v("c")).unwrap();

        let distro = g.edge_count_distro();
        assert_eq!(distro.shard_count(), 4);
        assert_eq!(distro.total(), 2);
        assert!(distro.get(g.shard_for(&v("a"), &v("b"))).unwrap() >= 1);
    }

    // -- Unsupported ------------------------------------------------------------

    #[test]
    fn test_topology_queries_unsupported() {
        let g = graph_with(2, &["a", "b"]);
        g.add_edge(&v("a"), &v("b")).unwrap();

        let results: Vec<(&str, GraphError)> = vec![
            ("shortest_path", g.shortest_path("a").unwrap_err()),
            ("traverse", g.traverse("a").unwrap_err()),
            ("traversal", g.traversal("a", 2).unwrap_err()),
            ("total_degree", g.total_degree().unwrap_err()),
            ("connected_set", g.connected_set("a").unwrap_err()),
            ("connected_sets", g.connected_sets().unwrap_err()),
            ("is_connected", g.is_connected("a", "b").unwrap_err()),
            (
                "adjacent_vertices_of_all",
                g.adjacent_vertices_of_all(&[v("a")]).unwrap_err(),
            ),
            ("closest", g.closest("a").unwrap_err()),
            ("clone_vertices", g.clone_vertices().unwrap_err()),
            ("graph_factory", g.graph_factory().unwrap_err()),
            ("forget_connected_sets", g.forget_connected_sets().unwrap_err()),
        ];

        for (name, err) in results {
            match err {
                GraphError::Unsupported { operation } => assert_eq!(operation, name),
                other => panic!("{} returned {:?}", name, other),
            }
        }
    }
}
