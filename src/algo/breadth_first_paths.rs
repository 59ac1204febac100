//! Find paths with the fewest edges from one or more sources.
//!
//! Edge weights are not considered. Each reached vertex records the vertex it
//! was discovered from, forming a tree of shortest (by edge count) paths.
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::BreadthFirstPaths, core::Connect, storage::Graph};
//!
//! let mut graph = Graph::new(5);
//! graph.extend_with_edges([(0, 1), (1, 2), (2, 3), (0, 3)]);
//!
//! let paths = BreadthFirstPaths::on(&graph).run(0).unwrap();
//!
//! assert_eq!(paths.path_to(3), vec![0, 3]);
//! assert_eq!(paths.dist_to(2), Some(2));
//! assert!(paths.path_to(4).is_empty());
//! ```

use tracing::debug;

use crate::{
    core::{error::VertexOutOfRange, Neighbors},
    visit::Bfs,
};

use super::assert_vertex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadthFirstPaths {
    edge_to: Vec<Option<usize>>,
    dist_to: Vec<Option<usize>>,
}

impl BreadthFirstPaths {
    pub fn on<G: Neighbors>(graph: &G) -> BreadthFirstPathsBuilder<'_, G> {
        BreadthFirstPathsBuilder { graph }
    }

    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    pub fn has_path_to(&self, vertex: usize) -> bool {
        self.dist_to(vertex).is_some()
    }

    /// Number of edges on the shortest path to the vertex, `None` if it was
    /// not reached.
    ///
    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    pub fn dist_to(&self, vertex: usize) -> Option<usize> {
        assert_vertex(vertex, self.dist_to.len());
        self.dist_to[vertex]
    }

    /// Returns the vertices of a path from a source to `vertex`, both
    /// endpoints included. The path is empty if the vertex was not reached.
    ///
    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    pub fn path_to(&self, vertex: usize) -> Vec<usize> {
        match self.try_path_to(vertex) {
            Ok(path) => path,
            Err(error) => panic!("{error}"),
        }
    }

    pub fn try_path_to(&self, vertex: usize) -> Result<Vec<usize>, VertexOutOfRange> {
        VertexOutOfRange::check(vertex, self.dist_to.len())?;

        if self.dist_to[vertex].is_none() {
            return Ok(Vec::new());
        }

        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(pred) = self.edge_to[current] {
            path.push(pred);
            current = pred;
        }

        path.reverse();
        Ok(path)
    }
}

pub struct BreadthFirstPathsBuilder<'a, G> {
    graph: &'a G,
}

impl<'a, G> BreadthFirstPathsBuilder<'a, G>
where
    G: Neighbors,
{
    pub fn run(self, source: usize) -> Result<BreadthFirstPaths, VertexOutOfRange> {
        self.run_multi([source])
    }

    /// Each reached vertex gets a path from the closest of the sources.
    pub fn run_multi<I>(self, sources: I) -> Result<BreadthFirstPaths, VertexOutOfRange>
    where
        I: IntoIterator<Item = usize>,
    {
        let graph = self.graph;
        let vertex_count = graph.vertex_count();

        let mut bfs = Bfs::new(graph);
        for source in sources {
            graph.check_vertex(source)?;
            bfs.start(source);
        }

        let mut edge_to = vec![None; vertex_count];
        let mut dist_to = vec![None; vertex_count];
        let mut reached = 0usize;

        for step in bfs {
            edge_to[step.vertex] = step.pred;
            dist_to[step.vertex] = Some(step.dist);
            reached += 1;
        }

        debug!(vertex_count, reached, "breadth-first paths computed");

        Ok(BreadthFirstPaths { edge_to, dist_to })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use super::*;
    use crate::{
        core::{Connect, GraphBase},
        infra::{
            proptest::{graph_directed, graph_undirected},
            testing::{create_cycle, distances_naive},
        },
        storage::{Digraph, Graph},
    };

    fn assert_valid_paths<G: Neighbors>(paths: &BreadthFirstPaths, graph: &G, source: usize) {
        let expected = distances_naive(graph, source);

        for v in 0..graph.vertex_count() {
            assert_eq!(paths.dist_to(v), expected[v], "distance to {v}");

            let path = paths.path_to(v);
            match expected[v] {
                Some(dist) => {
                    assert_eq!(path.len(), dist + 1, "path to {v} is not shortest");
                    assert_eq!(path.first(), Some(&source));
                    assert_eq!(path.last(), Some(&v));

                    for pair in path.windows(2) {
                        assert!(
                            graph.neighbors(pair[0]).any(|w| w == pair[1]),
                            "{} -> {} is not an edge",
                            pair[0],
                            pair[1]
                        );
                    }
                }
                None => assert!(path.is_empty()),
            }
        }
    }

    #[test]
    fn fewest_edges() {
        let mut graph = Graph::new(6);
        graph.extend_with_edges([(0, 1), (1, 2), (2, 3), (3, 4), (0, 5), (5, 4)]);

        let paths = BreadthFirstPaths::on(&graph).run(0).unwrap();

        assert_eq!(paths.path_to(4), vec![0, 5, 4]);
        assert_eq!(paths.dist_to(3), Some(3));
        assert_valid_paths(&paths, &graph, 0);
    }

    #[test]
    fn source_path() {
        let graph: Graph = create_cycle(4);

        let paths = BreadthFirstPaths::on(&graph).run(2).unwrap();

        assert_eq!(paths.path_to(2), vec![2]);
        assert_eq!(paths.dist_to(2), Some(0));
    }

    #[test]
    fn directed_unreachable() {
        let mut graph = Digraph::new(4);
        graph.extend_with_edges([(0, 1), (1, 2), (3, 0)]);

        let paths = BreadthFirstPaths::on(&graph).run(0).unwrap();

        assert!(paths.has_path_to(2));
        assert!(!paths.has_path_to(3));
        assert!(paths.path_to(3).is_empty());
        assert_valid_paths(&paths, &graph, 0);
    }

    #[test]
    fn multiple_sources_closest_wins() {
        let mut graph = Graph::new(7);
        graph.extend_with_edges([(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]);

        let paths = BreadthFirstPaths::on(&graph).run_multi([0, 5]).unwrap();

        assert_eq!(paths.path_to(4), vec![5, 4]);
        assert_eq!(paths.path_to(1), vec![0, 1]);
        assert_eq!(paths.dist_to(2), Some(2));
        assert_eq!(paths.dist_to(6), None);
    }

    #[test]
    fn out_of_range() {
        let graph = Graph::new(2);

        assert_matches!(
            BreadthFirstPaths::on(&graph).run(2),
            Err(VertexOutOfRange { vertex: 2, .. })
        );

        let paths = BreadthFirstPaths::on(&graph).run(0).unwrap();
        assert_matches!(paths.try_path_to(5), Err(VertexOutOfRange { vertex: 5, .. }));
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_bfs_undirected(graph in graph_undirected().max_size(64).multi_edge_prob(0.05)) {
            if graph.vertex_count() > 0 {
                let paths = BreadthFirstPaths::on(&graph).run(0).unwrap();
                assert_valid_paths(&paths, &graph, 0);
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_bfs_directed(graph in graph_directed().max_size(64).allow_loops()) {
            if graph.vertex_count() > 0 {
                let source = graph.vertex_count() / 2;
                let paths = BreadthFirstPaths::on(&graph).run(source).unwrap();
                assert_valid_paths(&paths, &graph, source);
            }
        }
    }
}
