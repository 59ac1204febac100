//! Adjacency-list graphs with a set of classic analyses over them.
//!
//! Graphs have a fixed number of vertices identified by dense indices `0..n`
//! and are mutated only by connecting and disconnecting vertices. Every
//! algorithm borrows a graph, computes its result eagerly and returns an
//! immutable value that is independent of any later mutation of the graph.
//!
//! # Examples
//!
//! ```
//! use adjgraph::{
//!     algo::{BreadthFirstPaths, ConnectedComponents},
//!     core::Connect,
//!     storage::Graph,
//! };
//!
//! let mut graph = Graph::new(5);
//! graph.extend_with_edges([(0, 1), (1, 2), (3, 4)]);
//!
//! let paths = BreadthFirstPaths::on(&graph).run(0).unwrap();
//! assert_eq!(paths.path_to(2), vec![0, 1, 2]);
//! assert!(!paths.has_path_to(3));
//!
//! let components = ConnectedComponents::on(&graph).run();
//! assert_eq!(components.count(), 2);
//! assert!(components.connected(3, 4));
//! ```

pub mod algo;
pub mod common;
pub mod core;
pub mod infra;
pub mod storage;
pub mod visit;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::core::{Connect, GraphBase, Neighbors, Reverse, WeightedNeighbors};
}
