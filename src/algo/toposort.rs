//! Find a [topologically sorted] sequence of vertices of a directed acyclic
//! graph (DAG).
//!
//! See available parameters [here](TopoSortBuilder#implementations).
//!
//! The exact order in which independent vertices are reported is not
//! specified and should not be relied upon.
//!
//! [topologically sorted]: https://en.wikipedia.org/wiki/Topological_sorting
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::TopoSort, core::Connect, storage::Digraph};
//!
//! // Edge direction in "must be compiled before" relation.
//! let mut dependencies = Digraph::new(5);
//! dependencies.extend_with_edges([(1, 0), (2, 1), (3, 1), (2, 3), (4, 0)]);
//!
//! let order = TopoSort::on(&dependencies).run().unwrap();
//! let position = |v| order.iter().position(|w| w == v).unwrap();
//!
//! assert!(position(2) < position(3));
//! assert!(position(3) < position(1));
//! assert!(position(1) < position(0));
//! ```

use thiserror::Error;

use crate::core::{error::VertexOutOfRange, marker::Directed, Neighbors};

mod builder;
mod kahn;

pub use builder::TopoSortBuilder;

/// Topologically sorted sequence of vertices.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopoSort {
    order: Vec<usize>,
}

impl TopoSort {
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.order
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, usize>> {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl IntoIterator for TopoSort {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

/// The error encountered during a [`TopoSort`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The graph contains a cycle.
    ///
    /// Graphs with cycles don't have a topological order.
    #[error("graph contains cycle through vertex {vertex}")]
    Cycle { vertex: usize },

    #[error(transparent)]
    SourceAbsent(#[from] VertexOutOfRange),
}

/// Shortcut for `TopoSort::on(graph).run()`.
pub fn topological_order<G>(graph: &G) -> Result<Vec<usize>, Error>
where
    G: Neighbors<EdgeType = Directed>,
{
    TopoSort::on(graph).run().map(TopoSort::into_vec)
}
