//! Find all vertices reachable from one or more sources.
//!
//! Reachability follows the edge direction in directed graphs. The source
//! itself is always reachable.
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::DepthFirstSearch, core::Connect, storage::Digraph};
//!
//! let mut graph = Digraph::new(4);
//! graph.extend_with_edges([(0, 1), (1, 2), (3, 2)]);
//!
//! let dfs = DepthFirstSearch::on(&graph).run(0).unwrap();
//!
//! assert!(dfs.is_reachable(2));
//! assert!(!dfs.is_reachable(3));
//! assert_eq!(dfs.count(), 3);
//! ```

use fixedbitset::{FixedBitSet, Ones};
use tracing::debug;

use crate::{
    core::{error::VertexOutOfRange, Neighbors},
    visit::Dfs,
};

use super::assert_vertex;

/// Set of vertices reachable from the sources of the search.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthFirstSearch {
    marked: FixedBitSet,
    count: usize,
}

impl DepthFirstSearch {
    pub fn on<G: Neighbors>(graph: &G) -> DepthFirstSearchBuilder<'_, G> {
        DepthFirstSearchBuilder { graph }
    }

    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    pub fn is_reachable(&self, vertex: usize) -> bool {
        assert_vertex(vertex, self.marked.len());
        self.marked.contains(vertex)
    }

    pub fn try_is_reachable(&self, vertex: usize) -> Result<bool, VertexOutOfRange> {
        VertexOutOfRange::check(vertex, self.marked.len())?;
        Ok(self.marked.contains(vertex))
    }

    /// Number of reachable vertices, including the sources.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Reachable vertices in increasing order.
    pub fn iter(&self) -> Ones<'_> {
        self.marked.ones()
    }

    pub(crate) fn search<G, I>(graph: &G, sources: I) -> Self
    where
        G: Neighbors,
        I: IntoIterator<Item = usize>,
    {
        let mut dfs = Dfs::new(graph);

        for source in sources {
            dfs.start(source).for_each(drop);
        }

        let marked = dfs.into_visited();
        let count = marked.count_ones(..);

        Self { marked, count }
    }
}

pub struct DepthFirstSearchBuilder<'a, G> {
    graph: &'a G,
}

impl<'a, G> DepthFirstSearchBuilder<'a, G>
where
    G: Neighbors,
{
    pub fn run(self, source: usize) -> Result<DepthFirstSearch, VertexOutOfRange> {
        self.run_multi([source])
    }

    /// Marks everything reachable from any of the sources. No vertex is
    /// reachable if there are no sources.
    pub fn run_multi<I>(self, sources: I) -> Result<DepthFirstSearch, VertexOutOfRange>
    where
        I: IntoIterator<Item = usize>,
    {
        let sources = sources.into_iter().collect::<Vec<_>>();
        for &source in sources.iter() {
            self.graph.check_vertex(source)?;
        }

        let dfs = DepthFirstSearch::search(self.graph, sources);
        debug!(
            vertex_count = self.graph.vertex_count(),
            reachable = dfs.count,
            "depth-first search finished"
        );

        Ok(dfs)
    }
}

/// Returns `true` if there is a directed path from `from` to `to`.
///
/// # Panics
///
/// Panics if any of the vertices does not exist.
pub fn is_reachable<G: Neighbors>(graph: &G, from: usize, to: usize) -> bool {
    match DepthFirstSearch::on(graph).run(from) {
        Ok(dfs) => dfs.is_reachable(to),
        Err(error) => panic!("{error}"),
    }
}
