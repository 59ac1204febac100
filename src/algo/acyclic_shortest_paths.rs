//! Find shortest paths from a source in a weighted directed acyclic graph.
//!
//! Vertices are relaxed one by one in a topological order, which makes the
//! algorithm linear and allows negative weights.
//!
//! By default the topological order is computed with [`TopoSort`] restricted
//! to the vertices reachable from the source, so a cycle reachable from the
//! source is reported as [`Error::Cycle`]. An order can also be supplied by
//! the caller with [`order`](AcyclicShortestPathsBuilder::order). Such order
//! is trusted: if it is not topological, the distances are silently wrong.
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::AcyclicShortestPaths, core::Connect, storage::WeightedDigraph};
//!
//! let mut graph = WeightedDigraph::new(4);
//! graph.extend_with_edges([(0, 1, 2.0), (0, 2, 5.0), (1, 3, 1.0), (2, 3, 1.0)]);
//!
//! let paths = AcyclicShortestPaths::on(&graph).run(0).unwrap();
//!
//! assert_eq!(paths.dist_to(3), 3.0);
//! assert_eq!(
//!     paths.path_to(3).iter().map(|e| e.to()).collect::<Vec<_>>(),
//!     vec![1, 3]
//! );
//! ```

use thiserror::Error;

use crate::{
    algo::toposort::{self, TopoSort},
    core::{error::VertexOutOfRange, WeightedEdge},
};

use super::assert_vertex;

mod builder;

pub use builder::AcyclicShortestPathsBuilder;

#[derive(Debug, Clone, PartialEq)]
pub struct AcyclicShortestPaths {
    source: usize,
    dist_to: Vec<f64>,
    edge_to: Vec<Option<WeightedEdge>>,
}

impl AcyclicShortestPaths {
    pub fn source(&self) -> usize {
        self.source
    }

    /// Total weight of the shortest path to the vertex, positive infinity if
    /// it is not reachable.
    ///
    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    pub fn dist_to(&self, vertex: usize) -> f64 {
        assert_vertex(vertex, self.dist_to.len());
        self.dist_to[vertex]
    }

    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    pub fn has_path_to(&self, vertex: usize) -> bool {
        self.dist_to(vertex) < f64::INFINITY
    }

    /// Edges of the shortest path from the source to `vertex`. The path is
    /// empty if the vertex is the source or is not reachable.
    ///
    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    pub fn path_to(&self, vertex: usize) -> Vec<WeightedEdge> {
        if !self.has_path_to(vertex) {
            return Vec::new();
        }

        let mut path = Vec::new();
        let mut current = vertex;

        // The bound matters only for an untrusted order, in which the
        // recorded edges may form a cycle.
        while current != self.source && path.len() < self.edge_to.len() {
            match self.edge_to[current] {
                Some(edge) => {
                    path.push(edge);
                    current = edge.from();
                }
                None => break,
            }
        }

        path.reverse();
        path
    }
}

/// The error encountered during a [`AcyclicShortestPaths`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("source vertex does not exist: {0}")]
    SourceAbsent(VertexOutOfRange),

    /// A cycle is reachable from the source.
    #[error("graph contains cycle through vertex {vertex}")]
    Cycle { vertex: usize },

    /// The supplied order contains a vertex that does not exist.
    #[error("order contains a vertex that does not exist: {0}")]
    OrderVertexAbsent(VertexOutOfRange),
}

impl From<toposort::Error> for Error {
    fn from(error: toposort::Error) -> Self {
        match error {
            toposort::Error::Cycle { vertex } => Error::Cycle { vertex },
            toposort::Error::SourceAbsent(error) => Error::SourceAbsent(error),
        }
    }
}
