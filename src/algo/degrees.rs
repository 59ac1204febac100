//! In and out degrees of every vertex of a directed graph.
//!
//! The out degree counts parallel edges individually. The in degree counts
//! **distinct sources** only: two parallel edges `v -> w` add two to the out
//! degree of `v` but one to the in degree of `w`.
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::Degrees, core::Connect, storage::Digraph};
//!
//! let mut graph = Digraph::new(3);
//! graph.extend_with_edges([(0, 1), (0, 1), (1, 2)]);
//!
//! let degrees = Degrees::on(&graph).run();
//!
//! assert_eq!(degrees.outdegree(0), 2);
//! assert_eq!(degrees.indegree(1), 1);
//! assert_eq!(degrees.sources().collect::<Vec<_>>(), vec![0]);
//! assert_eq!(degrees.sinks().collect::<Vec<_>>(), vec![2]);
//! ```

use tracing::debug;

use crate::core::{marker::Directed, Neighbors};

use super::assert_vertex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Degrees {
    indegree: Vec<usize>,
    outdegree: Vec<usize>,
}

impl Degrees {
    pub fn on<G>(graph: &G) -> DegreesBuilder<'_, G>
    where
        G: Neighbors<EdgeType = Directed>,
    {
        DegreesBuilder { graph }
    }

    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    pub fn indegree(&self, vertex: usize) -> usize {
        assert_vertex(vertex, self.indegree.len());
        self.indegree[vertex]
    }

    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    pub fn outdegree(&self, vertex: usize) -> usize {
        assert_vertex(vertex, self.outdegree.len());
        self.outdegree[vertex]
    }

    /// Vertices with in degree zero.
    pub fn sources(&self) -> impl Iterator<Item = usize> + '_ {
        zero_positions(&self.indegree)
    }

    /// Vertices with out degree zero.
    pub fn sinks(&self) -> impl Iterator<Item = usize> + '_ {
        zero_positions(&self.outdegree)
    }

    /// Returns `true` if every vertex has exactly one outgoing edge, that is,
    /// the graph represents a function from vertices to vertices.
    pub fn is_map(&self) -> bool {
        self.outdegree.iter().all(|&degree| degree == 1)
    }
}

fn zero_positions(degrees: &[usize]) -> impl Iterator<Item = usize> + '_ {
    degrees
        .iter()
        .enumerate()
        .filter(|(_, degree)| **degree == 0)
        .map(|(vertex, _)| vertex)
}

pub struct DegreesBuilder<'a, G> {
    graph: &'a G,
}

impl<'a, G> DegreesBuilder<'a, G>
where
    G: Neighbors<EdgeType = Directed>,
{
    pub fn run(self) -> Degrees {
        let vertex_count = self.graph.vertex_count();
        let mut indegree = vec![0; vertex_count];
        let mut outdegree = vec![0; vertex_count];

        // The last source that contributed to the in degree of each vertex.
        let mut seen_from = vec![usize::MAX; vertex_count];

        for v in 0..vertex_count {
            outdegree[v] = self.graph.degree(v);

            for w in self.graph.neighbors(v) {
                if seen_from[w] != v {
                    seen_from[w] = v;
                    indegree[w] += 1;
                }
            }
        }

        debug!(vertex_count, "degrees computed");

        Degrees {
            indegree,
            outdegree,
        }
    }
}
