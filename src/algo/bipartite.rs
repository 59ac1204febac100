//! Test whether a graph is [bipartite] and find a proper 2-coloring or an
//! odd cycle proving it does not exist.
//!
//! Edge direction is ignored: a directed graph is bipartite if its underlying
//! undirected graph is. The odd cycle of a directed graph may therefore use
//! edges against their direction.
//!
//! [bipartite]: https://en.wikipedia.org/wiki/Bipartite_graph
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::Bipartite, core::Connect, storage::Graph};
//!
//! let mut square = Graph::new(4);
//! square.extend_with_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
//!
//! let bipartite = Bipartite::on(&square).run();
//! assert!(bipartite.is_bipartite());
//! assert_ne!(bipartite.color(0), bipartite.color(1));
//!
//! let mut triangle = Graph::new(3);
//! triangle.extend_with_edges([(0, 1), (1, 2), (2, 0)]);
//!
//! let bipartite = Bipartite::on(&triangle).run();
//! assert!(!bipartite.is_bipartite());
//! assert_eq!(bipartite.odd_cycle().map(|cycle| cycle.len()), Some(4));
//! ```

use bitvec::prelude::*;
use tracing::debug;

use crate::{
    core::{Create, Neighbors},
    storage::Graph,
    visit::{Dfs, DfsEvent},
};

use super::assert_vertex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bipartite {
    color: BitVec,
    odd_cycle: Option<Vec<usize>>,
}

impl Bipartite {
    pub fn on<G: Neighbors>(graph: &G) -> BipartiteBuilder<'_, G> {
        BipartiteBuilder { graph }
    }

    pub fn is_bipartite(&self) -> bool {
        self.odd_cycle.is_none()
    }

    /// The side of the vertex in a proper 2-coloring, `None` if the graph is
    /// not bipartite.
    ///
    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    pub fn color(&self, vertex: usize) -> Option<bool> {
        assert_vertex(vertex, self.color.len());

        if self.is_bipartite() {
            Some(self.color[vertex])
        } else {
            None
        }
    }

    /// A closed walk `[v, .., v]` along an odd number of edges, present if
    /// and only if the graph is not bipartite. For a directed graph, each step
    /// follows an edge in either direction.
    pub fn odd_cycle(&self) -> Option<&[usize]> {
        self.odd_cycle.as_deref()
    }
}

pub struct BipartiteBuilder<'a, G> {
    graph: &'a G,
}

impl<'a, G> BipartiteBuilder<'a, G>
where
    G: Neighbors,
{
    /// The search stops at the first edge joining two vertices of the same
    /// color.
    pub fn run(self) -> Bipartite {
        let graph = self.graph;

        if graph.is_directed() {
            let underlying = Graph::from_edges(
                graph.vertex_count(),
                (0..graph.vertex_count())
                    .flat_map(|v| graph.neighbors(v).map(move |w| (v, w))),
            );
            two_color(&underlying)
        } else {
            two_color(graph)
        }
    }
}

// Expects the adjacency to be symmetric, as in an undirected graph.
fn two_color<G: Neighbors>(graph: &G) -> Bipartite {
    let vertex_count = graph.vertex_count();
    let mut color = bitvec![0; vertex_count];
    let mut edge_to = vec![None; vertex_count];
    let mut odd_cycle = None;

    let mut dfs = Dfs::new(graph);

    'roots: for root in 0..vertex_count {
        if dfs.is_visited(root) {
            continue;
        }

        for event in dfs.start(root) {
            match event {
                DfsEvent::TreeEdge { from, to } => {
                    let side = !color[from];
                    color.set(to, side);
                    edge_to[to] = Some(from);
                }
                DfsEvent::NonTreeEdge { from, to } if color[from] == color[to] => {
                    // In an undirected search, the first such edge leads
                    // to an ancestor (or is a self-loop).
                    let mut cycle = vec![from];
                    let mut current = from;
                    while current != to {
                        match edge_to[current] {
                            Some(pred) => {
                                cycle.push(pred);
                                current = pred;
                            }
                            None => break,
                        }
                    }
                    cycle.reverse();
                    cycle.push(to);

                    odd_cycle = Some(cycle);
                    break 'roots;
                }
                _ => {}
            }
        }
    }

    debug!(
        vertex_count,
        bipartite = odd_cycle.is_none(),
        "bipartiteness determined"
    );

    Bipartite { color, odd_cycle }
}

/// # Examples
///
/// ```
/// use adjgraph::{algo::is_bipartite, infra::testing::create_cycle, storage::Graph};
///
/// assert!(is_bipartite(&create_cycle::<Graph>(6)));
/// assert!(!is_bipartite(&create_cycle::<Graph>(5)));
/// ```
pub fn is_bipartite<G: Neighbors>(graph: &G) -> bool {
    Bipartite::on(graph).run().is_bipartite()
}
