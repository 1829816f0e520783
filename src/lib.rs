//! hugegraph — sharded in-memory store for n-gram document graphs.
//!
//! A document graph's edges are partitioned across N independent
//! [`GraphPartition`] shards while callers see one logical graph through
//! [`HugeGraph`]. Vertices live in a single [`VertexRegistry`]; edges are
//! routed to a shard by hashing the ordered pair of endpoint labels.
//!
//! ```
//! use hugegraph::{GraphStore, HugeGraph, Vertex};
//!
//! let graph = HugeGraph::new(2).unwrap();
//! let (a, b) = (Vertex::new("A"), Vertex::new("B"));
//! graph.add(&a).unwrap();
//! graph.add(&b).unwrap();
//! graph.add_edge(&a, &b).unwrap();
//!
//! assert_eq!(graph.vertex_count(), 2);
//! assert!(graph.contains_edge("A", "B"));
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod storage;

pub use config::{HugeGraphConfig, SystemResources, TuningProfile};
pub use error::{GraphError, Result};
pub use graph::partition::GraphPartition;
pub use graph::{Edge, EdgeKey, GraphStore, ShardStore, TopologyQuery, Vertex};
pub use storage::distro::{EdgeCountDistro, ShardStats};
pub use storage::fanout::FanOut;
pub use storage::huge_graph::HugeGraph;
pub use storage::registry::VertexRegistry;
pub use storage::router::{ShardRouter, LABEL_SEPARATOR};
