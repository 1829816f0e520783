//! Traversal algorithms over a neighbour function.
//!
//! Kept free of any storage type so a single partition (or a test
//! fixture) can plug in its own adjacency lookup.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use super::Vertex;

/// BFS from `start` up to `max_depth` hops. Start vertices are included
/// (depth 0). Each vertex appears once, in discovery order.
pub fn bfs<F>(start: &[Vertex], max_depth: usize, mut neighbors: F) -> Vec<Vertex>
where
    F: FnMut(&Vertex) -> Vec<Vertex>,
{
    let mut visited: HashSet<Vertex> = HashSet::new();
    let mut queue: VecDeque<(Vertex, usize)> = VecDeque::new();
    let mut result = Vec::new();

    for v in start {
        if visited.insert(v.clone()) {
            queue.push_back((v.clone(), 0));
        }
    }

    while let Some((current, depth)) = queue.pop_front() {
        result.push(current.clone());

        if depth >= max_depth {
            continue;
        }

        for next in neighbors(&current) {
            if visited.insert(next.clone()) {
                queue.push_back((next, depth + 1));
            }
        }
    }

    result
}

/// Min-heap entry. Ordering is reversed on cost so `BinaryHeap` pops the
/// cheapest vertex first; ties break on label for determinism.
struct State {
    cost: f64,
    vertex: Vertex,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Single-source Dijkstra.
///
/// Returns, for every reachable vertex, its distance from `source` and its
/// predecessor on the shortest path (`None` for the source itself).
/// Edge costs must be non-negative.
pub fn dijkstra<F>(source: &Vertex, mut neighbors: F) -> HashMap<Vertex, (f64, Option<Vertex>)>
where
    F: FnMut(&Vertex) -> Vec<(Vertex, f64)>,
{
    let mut best: HashMap<Vertex, (f64, Option<Vertex>)> = HashMap::new();
    let mut settled: HashSet<Vertex> = HashSet::new();
    let mut heap = BinaryHeap::new();

    best.insert(source.clone(), (0.0, None));
    heap.push(State {
        cost: 0.0,
        vertex: source.clone(),
    });

    while let Some(State { cost, vertex }) = heap.pop() {
        if !settled.insert(vertex.clone()) {
            continue;
        }

        for (next, weight) in neighbors(&vertex) {
            let candidate = cost + weight;
            let improved = match best.get(&next) {
                Some((known, _)) => candidate < *known,
                None => true,
            };
            if improved {
                best.insert(next.clone(), (candidate, Some(vertex.clone())));
                heap.push(State {
                    cost: candidate,
                    vertex: next,
                });
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(label: &str) -> Vertex {
        Vertex::new(label)
    }

    fn chain(label: &Vertex) -> Vec<Vertex> {
        match label.label() {
            "a" => vec![v("b"), v("c")],
            "b" => vec![v("d")],
            "c" => vec![v("d")],
            "d" => vec![v("a")],
            _ => vec![],
        }
    }

    #[test]
    fn test_bfs_order_and_dedup() {
        let order = bfs(&[v("a")], usize::MAX, chain);
        assert_eq!(order, vec![v("a"), v("b"), v("c"), v("d")]);
    }

    #[test]
    fn test_bfs_respects_depth() {
        assert_eq!(bfs(&[v("a")], 0, chain), vec![v("a")]);
        assert_eq!(bfs(&[v("a")], 1, chain), vec![v("a"), v("b"), v("c")]);
    }

    #[test]
    fn test_bfs_multiple_starts() {
        let order = bfs(&[v("d"), v("b")], 1, chain);
        assert_eq!(order, vec![v("d"), v("b"), v("a")]);
    }

    #[test]
    fn test_dijkstra_prefers_cheaper_path() {
        // a -> b (1), b -> c (1), a -> c (5)
        let dist = dijkstra(&v("a"), |x| match x.label() {
            "a" => vec![(v("b"), 1.0), (v("c"), 5.0)],
            "b" => vec![(v("c"), 1.0)],
            _ => vec![],
        });

        assert_eq!(dist[&v("a")], (0.0, None));
        assert_eq!(dist[&v("b")], (1.0, Some(v("a"))));
        assert_eq!(dist[&v("c")], (2.0, Some(v("b"))));
    }

    #[test]
    fn test_dijkstra_unreachable_absent() {
        let dist = dijkstra(&v("x"), |_| vec![]);
        assert_eq!(dist.len(), 1);
        assert!(!dist.contains_key(&v("y")));
    }
}
