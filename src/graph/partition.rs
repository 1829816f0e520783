//! Single, non-sharded directed weighted graph.
//!
//! Used standalone for small document graphs and as one shard of a
//! `HugeGraph`. NOT Send+Sync-safe for concurrent mutation by itself:
//! the owner wraps it in a lock.
//!
//! Adjacency is kept in `BTreeMap`/`BTreeSet` so neighbour order, and
//! therefore traversal order, is deterministic by label.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::error::{GraphError, Result};

use super::traversal;
use super::{Edge, EdgeKey, GraphStore, ShardStore, TopologyQuery, Vertex};

#[derive(Debug, Clone, Default)]
struct Adjacency {
    /// tail -> weight
    outgoing: BTreeMap<Vertex, Option<f64>>,
    /// heads of edges pointing at this vertex
    incoming: BTreeSet<Vertex>,
    /// Added through `add_vertex`; kept even with no edges left.
    explicit: bool,
}

impl Adjacency {
    /// Endpoint entry that only existed for edges now gone.
    fn is_stale(&self) -> bool {
        !self.explicit && self.outgoing.is_empty() && self.incoming.is_empty()
    }

    fn degree(&self, me: &Vertex) -> usize {
        let self_loop = usize::from(self.outgoing.contains_key(me));
        self.outgoing.len() + self.incoming.len() - self_loop
    }
}

/// Directed weighted graph keyed by vertex label.
#[derive(Debug, Clone, Default)]
pub struct GraphPartition {
    vertices: HashMap<Vertex, Adjacency>,
    edge_count: usize,
}

impl GraphPartition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a stored edge, with its weight.
    pub fn edge(&self, head: &str, tail: &str) -> Option<Edge> {
        let (head_v, adj) = self.vertices.get_key_value(head)?;
        let (tail_v, weight) = adj.outgoing.get_key_value(tail)?;
        Some(Edge {
            head: head_v.clone(),
            tail: tail_v.clone(),
            weight: *weight,
        })
    }

    /// Vertices sorted by label.
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut all: Vec<Vertex> = self.vertices.keys().cloned().collect();
        all.sort();
        all
    }

    fn out_neighbors(&self, v: &Vertex) -> Vec<Vertex> {
        self.vertices
            .get(v)
            .map(|adj| adj.outgoing.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Out- and in-neighbours, ignoring direction; used for components.
    fn undirected_neighbors(&self, v: &Vertex) -> Vec<Vertex> {
        match self.vertices.get(v) {
            Some(adj) => adj
                .outgoing
                .keys()
                .chain(adj.incoming.iter())
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }

    fn require_vertex(&self, label: &str) -> Result<Vertex> {
        self.vertices
            .get_key_value(label)
            .map(|(v, _)| v.clone())
            .ok_or_else(|| GraphError::VertexNotFound(label.to_string()))
    }

    fn component_of(&self, v: &Vertex) -> HashSet<Vertex> {
        traversal::bfs(std::slice::from_ref(v), usize::MAX, |x| {
            self.undirected_neighbors(x)
        })
        .into_iter()
        .collect()
    }

    fn prune_if_stale(&mut self, label: &str) {
        if self.vertices.get(label).is_some_and(Adjacency::is_stale) {
            self.vertices.remove(label);
        }
    }
}

// ── Read Surface ───────────────────────────────────────────────────

impl GraphStore for GraphPartition {
    fn contains_vertex(&self, label: &str) -> bool {
        self.vertices.contains_key(label)
    }

    fn contains_edge(&self, head: &str, tail: &str) -> bool {
        self.vertices
            .get(head)
            .is_some_and(|adj| adj.outgoing.contains_key(tail))
    }

    fn degree(&self, label: &str) -> usize {
        match self.vertices.get_key_value(label) {
            Some((v, adj)) => adj.degree(v),
            None => 0,
        }
    }

    fn adjacent_vertices(&self, label: &str) -> Vec<Vertex> {
        self.edges_of(label)
            .into_iter()
            .map(|e| e.opposite(label).clone())
            .collect()
    }

    fn edges_of(&self, label: &str) -> Vec<Edge> {
        let Some((me, adj)) = self.vertices.get_key_value(label) else {
            return Vec::new();
        };

        let mut edges = Vec::with_capacity(adj.degree(me));
        for (tail, weight) in &adj.outgoing {
            edges.push(Edge {
                head: me.clone(),
                tail: tail.clone(),
                weight: *weight,
            });
        }
        for head in &adj.incoming {
            if head == me {
                continue; // self-loop already listed as outgoing
            }
            let weight = self
                .vertices
                .get(head)
                .and_then(|h| h.outgoing.get(me).copied())
                .flatten();
            edges.push(Edge {
                head: head.clone(),
                tail: me.clone(),
                weight,
            });
        }
        edges
    }

    fn edge_set(&self) -> HashSet<Edge> {
        let mut set = HashSet::with_capacity(self.edge_count);
        for (head, adj) in &self.vertices {
            for (tail, weight) in &adj.outgoing {
                set.insert(Edge {
                    head: head.clone(),
                    tail: tail.clone(),
                    weight: *weight,
                });
            }
        }
        set
    }

    fn vertex_set(&self) -> HashSet<Vertex> {
        self.vertices.keys().cloned().collect()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

// ── Write Surface ──────────────────────────────────────────────────

impl ShardStore for GraphPartition {
    fn add_vertex(&mut self, vertex: Vertex) -> Result<bool> {
        if let Some(adj) = self.vertices.get_mut(&vertex) {
            adj.explicit = true;
            return Ok(false);
        }
        self.vertices.insert(
            vertex,
            Adjacency {
                explicit: true,
                ..Adjacency::default()
            },
        );
        Ok(true)
    }

    fn add_edge(&mut self, head: &Vertex, tail: &Vertex, weight: Option<f64>) -> Result<Edge> {
        if let Some(w) = weight {
            if !w.is_finite() {
                return Err(GraphError::InvalidWeight(w));
            }
        }

        let inserted = self
            .vertices
            .entry(head.clone())
            .or_default()
            .outgoing
            .insert(tail.clone(), weight)
            .is_none();
        self.vertices
            .entry(tail.clone())
            .or_default()
            .incoming
            .insert(head.clone());
        if inserted {
            self.edge_count += 1;
        }

        Ok(Edge {
            head: head.clone(),
            tail: tail.clone(),
            weight,
        })
    }

    fn remove_vertex(&mut self, label: &str) -> Result<bool> {
        if !self.vertices.contains_key(label) {
            return Ok(false);
        }
        self.remove_edges(label)?;
        self.vertices.remove(label);
        Ok(true)
    }

    fn remove_edge(&mut self, key: &EdgeKey) -> Result<bool> {
        let removed = self
            .vertices
            .get_mut(&key.head)
            .is_some_and(|adj| adj.outgoing.remove(&key.tail).is_some());
        if !removed {
            return Ok(false);
        }
        if let Some(adj) = self.vertices.get_mut(&key.tail) {
            adj.incoming.remove(&key.head);
        }
        self.edge_count -= 1;
        self.prune_if_stale(key.head.label());
        self.prune_if_stale(key.tail.label());
        Ok(true)
    }

    fn remove_edges(&mut self, label: &str) -> Result<usize> {
        let keys: Vec<EdgeKey> = self.edges_of(label).iter().map(Edge::key).collect();
        let mut removed = 0;
        for key in &keys {
            if self.remove_edge(key)? {
                removed += 1;
            }
        }
        Ok(removed)
    }
}

// ── Topology ───────────────────────────────────────────────────────

impl TopologyQuery for GraphPartition {
    fn shortest_path(&self, from: &str) -> Result<GraphPartition> {
        let source = self.require_vertex(from)?;
        for adj in self.vertices.values() {
            if let Some(w) = adj.outgoing.values().flatten().find(|w| **w < 0.0) {
                return Err(GraphError::InvalidWeight(*w));
            }
        }

        let paths = traversal::dijkstra(&source, |v| {
            self.vertices
                .get(v)
                .map(|adj| {
                    adj.outgoing
                        .iter()
                        .map(|(t, w)| (t.clone(), w.unwrap_or(1.0)))
                        .collect()
                })
                .unwrap_or_default()
        });

        let mut tree = GraphPartition::new();
        tree.add_vertex(source)?;
        for (vertex, (_, predecessor)) in &paths {
            if let Some(pred) = predecessor {
                let weight = self.edge(pred.label(), vertex.label()).and_then(|e| e.weight);
                tree.add_edge(pred, vertex, weight)?;
            }
        }
        Ok(tree)
    }

    fn traverse(&self, start: &str) -> Result<Vec<Vertex>> {
        self.traversal(start, usize::MAX)
    }

    fn traversal(&self, start: &str, max_depth: usize) -> Result<Vec<Vertex>> {
        let start = self.require_vertex(start)?;
        Ok(traversal::bfs(&[start], max_depth, |v| self.out_neighbors(v)))
    }

    fn total_degree(&self) -> Result<usize> {
        Ok(self.vertices.iter().map(|(v, adj)| adj.degree(v)).sum())
    }

    fn connected_set(&self, label: &str) -> Result<HashSet<Vertex>> {
        let v = self.require_vertex(label)?;
        Ok(self.component_of(&v))
    }

    fn connected_sets(&self) -> Result<Vec<HashSet<Vertex>>> {
        let mut seen: HashSet<Vertex> = HashSet::new();
        let mut sets = Vec::new();
        for v in self.vertices() {
            if seen.contains(&v) {
                continue;
            }
            let component = self.component_of(&v);
            seen.extend(component.iter().cloned());
            sets.push(component);
        }
        Ok(sets)
    }

    fn is_connected(&self, a: &str, b: &str) -> Result<bool> {
        let a = self.require_vertex(a)?;
        let b = self.require_vertex(b)?;
        Ok(self.component_of(&a).contains(&b))
    }

    fn adjacent_vertices_of_all(&self, vertices: &[Vertex]) -> Result<HashSet<Vertex>> {
        Ok(vertices
            .iter()
            .flat_map(|v| self.adjacent_vertices(v.label()))
            .collect())
    }

    fn closest(&self, label: &str) -> Result<Option<Vertex>> {
        let v = self.require_vertex(label)?;
        let adj = &self.vertices[&v];
        Ok(adj
            .outgoing
            .iter()
            .min_by(|(_, a), (_, b)| a.unwrap_or(1.0).total_cmp(&b.unwrap_or(1.0)))
            .map(|(t, _)| t.clone()))
    }

    fn clone_vertices(&self) -> Result<Vec<Vertex>> {
        Ok(self.vertices())
    }

    fn graph_factory(&self) -> Result<GraphPartition> {
        Ok(GraphPartition::new())
    }

    fn forget_connected_sets(&self) -> Result<()> {
        // Components are computed on demand; nothing is cached.
        Ok(())
    }
}
