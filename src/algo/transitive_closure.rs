//! All-pairs reachability of a directed graph.
//!
//! The closure is itself a directed graph: it has an edge `v -> w` for every
//! pair such that `w` is reachable from `v`. Every vertex reaches itself, so
//! the closure contains a self-loop at every vertex. Consequently,
//! [`edge_count`](GraphBase::edge_count) of the closure is the number of
//! reachability pairs, not the number of edges of the original graph.
//!
//! # Examples
//!
//! ```
//! use adjgraph::{
//!     algo::TransitiveClosure,
//!     core::{Connect, GraphBase},
//!     storage::Digraph,
//! };
//!
//! let mut graph = Digraph::new(3);
//! graph.extend_with_edges([(0, 1), (1, 2)]);
//!
//! let closure = TransitiveClosure::on(&graph).run();
//!
//! assert!(closure.reachable(0, 2));
//! assert!(!closure.reachable(2, 0));
//! assert_eq!(closure.edge_count(), 6);
//! ```

use fixedbitset::Ones;
use tracing::debug;

use crate::{
    core::{error::VertexOutOfRange, marker::Directed, Connect, GraphBase, Neighbors, Reverse},
    storage::Digraph,
};

use super::{assert_vertex, DepthFirstSearch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitiveClosure {
    all: Vec<DepthFirstSearch>,
    pair_count: usize,
}

impl TransitiveClosure {
    pub fn on<G>(graph: &G) -> TransitiveClosureBuilder<'_, G>
    where
        G: Neighbors<EdgeType = Directed>,
    {
        TransitiveClosureBuilder { graph }
    }

    /// Returns `true` if there is a directed path from `v` to `w`.
    ///
    /// # Panics
    ///
    /// Panics if any of the vertices does not exist.
    pub fn reachable(&self, v: usize, w: usize) -> bool {
        match self.try_reachable(v, w) {
            Ok(reachable) => reachable,
            Err(error) => panic!("{error}"),
        }
    }

    pub fn try_reachable(&self, v: usize, w: usize) -> Result<bool, VertexOutOfRange> {
        VertexOutOfRange::check(v, self.all.len())?;
        self.all[v].try_is_reachable(w)
    }
}

pub struct TransitiveClosureBuilder<'a, G> {
    graph: &'a G,
}

impl<'a, G> TransitiveClosureBuilder<'a, G>
where
    G: Neighbors<EdgeType = Directed>,
{
    pub fn run(self) -> TransitiveClosure {
        let vertex_count = self.graph.vertex_count();

        let all = (0..vertex_count)
            .map(|v| DepthFirstSearch::search(self.graph, [v]))
            .collect::<Vec<_>>();
        let pair_count = all.iter().map(DepthFirstSearch::count).sum();

        debug!(vertex_count, pair_count, "transitive closure computed");

        TransitiveClosure { all, pair_count }
    }
}

impl GraphBase for TransitiveClosure {
    type EdgeType = Directed;

    fn vertex_count(&self) -> usize {
        self.all.len()
    }

    fn edge_count(&self) -> usize {
        self.pair_count
    }
}

impl Neighbors for TransitiveClosure {
    type NeighborsIter<'a> = Ones<'a>
    where
        Self: 'a;

    /// Vertices reachable from `vertex` in increasing order, including
    /// `vertex` itself.
    fn neighbors(&self, vertex: usize) -> Self::NeighborsIter<'_> {
        assert_vertex(vertex, self.all.len());
        self.all[vertex].iter()
    }

    fn degree(&self, vertex: usize) -> usize {
        assert_vertex(vertex, self.all.len());
        self.all[vertex].count()
    }
}

impl Reverse for TransitiveClosure {
    type Output = Digraph;

    /// Materializes the closure with every pair flipped: `w -> v` for every
    /// `w` reachable from `v`.
    fn reverse(&self) -> Self::Output {
        let mut reversed = Digraph::new(self.all.len());

        for (v, dfs) in self.all.iter().enumerate() {
            for w in dfs.iter() {
                reversed.connect(w, v, ());
            }
        }

        reversed
    }
}
