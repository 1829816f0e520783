//! Sharded graph storage.
//!
//! - `router`: deterministic edge -> shard assignment
//! - `registry`: authoritative vertex membership
//! - `huge_graph`: the facade composing both over N `GraphPartition`s
//! - `fanout`: serial or pooled execution of per-shard sub-queries
//! - `distro`: per-shard load diagnostics

pub mod distro;
pub mod fanout;
pub mod huge_graph;
pub mod registry;
pub mod router;
