//! Distance-based properties of a graph: [eccentricity], diameter, radius,
//! center and periphery.
//!
//! Distances count edges and are computed by a breadth-first search from every
//! vertex. The graph must be nonempty and every vertex must reach every other
//! vertex (for directed graphs, it must be strongly connected).
//!
//! [eccentricity]: https://en.wikipedia.org/wiki/Distance_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::GraphProperties, infra::testing::create_path, storage::Graph};
//!
//! let graph: Graph = create_path(5);
//!
//! let properties = GraphProperties::on(&graph).run().unwrap();
//!
//! assert_eq!(properties.diameter(), 4);
//! assert_eq!(properties.radius(), 2);
//! assert_eq!(properties.center(), 2);
//! assert_eq!(properties.periphery().collect::<Vec<_>>(), vec![0, 4]);
//! ```

use thiserror::Error;
use tracing::debug;

use crate::{
    core::Neighbors,
    visit::Bfs,
};

use super::assert_vertex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphProperties {
    eccentricity: Vec<usize>,
    diameter: usize,
    radius: usize,
    center: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("graph has no vertices")]
    Empty,

    #[error("vertex {to} is not reachable from vertex {from}")]
    Disconnected { from: usize, to: usize },
}

impl GraphProperties {
    pub fn on<G: Neighbors>(graph: &G) -> GraphPropertiesBuilder<'_, G> {
        GraphPropertiesBuilder { graph }
    }

    /// The greatest distance from the vertex to any other vertex.
    ///
    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    pub fn eccentricity(&self, vertex: usize) -> usize {
        assert_vertex(vertex, self.eccentricity.len());
        self.eccentricity[vertex]
    }

    /// Maximum eccentricity.
    pub fn diameter(&self) -> usize {
        self.diameter
    }

    /// Minimum eccentricity.
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// The smallest vertex with minimum eccentricity.
    pub fn center(&self) -> usize {
        self.center
    }

    /// All vertices with maximum eccentricity.
    pub fn periphery(&self) -> impl Iterator<Item = usize> + '_ {
        self.eccentricity
            .iter()
            .enumerate()
            .filter(|(_, eccentricity)| **eccentricity == self.diameter)
            .map(|(vertex, _)| vertex)
    }
}

pub struct GraphPropertiesBuilder<'a, G> {
    graph: &'a G,
}

impl<'a, G> GraphPropertiesBuilder<'a, G>
where
    G: Neighbors,
{
    pub fn run(self) -> Result<GraphProperties, Error> {
        let graph = self.graph;
        let vertex_count = graph.vertex_count();

        let mut eccentricity = Vec::with_capacity(vertex_count);

        for v in 0..vertex_count {
            let mut bfs = Bfs::new(graph);
            bfs.start(v);

            let farthest = bfs.by_ref().map(|step| step.dist).max().unwrap_or_default();

            if let Some(to) = (0..vertex_count).find(|&w| !bfs.visited().contains(w)) {
                return Err(Error::Disconnected { from: v, to });
            }

            eccentricity.push(farthest);
        }

        let (center, radius) = eccentricity
            .iter()
            .copied()
            .enumerate()
            .min_by_key(|(_, eccentricity)| *eccentricity)
            .ok_or(Error::Empty)?;
        let diameter = eccentricity.iter().copied().max().unwrap_or_default();

        debug!(
            vertex_count,
            diameter,
            radius,
            center,
            "graph properties computed"
        );

        Ok(GraphProperties {
            eccentricity,
            diameter,
            radius,
            center,
        })
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
            proptest::graph_undirected,
            testing::{create_complete, create_cycle, distances_naive},
        },
        storage::{Digraph, Graph},
    };

    #[test]
    fn star() {
        let mut graph = Graph::new(5);
        graph.extend_with_edges([(1, 0), (2, 0), (3, 0), (4, 0)]);

        let properties = GraphProperties::on(&graph).run().unwrap();

        assert_eq!(properties.eccentricity(0), 1);
        assert_eq!(properties.eccentricity(3), 2);
        assert_eq!(properties.radius(), 1);
        assert_eq!(properties.diameter(), 2);
        assert_eq!(properties.center(), 0);
        assert_eq!(properties.periphery().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn cycle_center_is_smallest() {
        let graph: Graph = create_cycle(6);

        let properties = GraphProperties::on(&graph).run().unwrap();

        assert_eq!(properties.radius(), 3);
        assert_eq!(properties.diameter(), 3);
        assert_eq!(properties.center(), 0);
        assert_eq!(properties.periphery().count(), 6);
    }

    #[test]
    fn complete() {
        let graph: Graph = create_complete(4);

        let properties = GraphProperties::on(&graph).run().unwrap();

        assert_eq!(properties.diameter(), 1);
        assert_eq!(properties.radius(), 1);
    }

    #[test]
    fn single_vertex() {
        let graph = Graph::new(1);

        let properties = GraphProperties::on(&graph).run().unwrap();

        assert_eq!(properties.diameter(), 0);
        assert_eq!(properties.radius(), 0);
        assert_eq!(properties.center(), 0);
    }

    #[test]
    fn directed_cycle() {
        let graph: Digraph = create_cycle(4);

        let properties = GraphProperties::on(&graph).run().unwrap();

        assert_eq!(properties.eccentricity(0), 3);
        assert_eq!(properties.radius(), 3);
    }

    #[test]
    fn errors() {
        assert_matches!(GraphProperties::on(&Graph::new(0)).run(), Err(Error::Empty));

        let mut graph = Graph::new(3);
        graph.connect(0, 1, ());
        assert_eq!(
            GraphProperties::on(&graph).run(),
            Err(Error::Disconnected { from: 0, to: 2 })
        );

        let mut graph = Digraph::new(2);
        graph.connect(0, 1, ());
        assert_eq!(
            GraphProperties::on(&graph).run(),
            Err(Error::Disconnected { from: 1, to: 0 })
        );
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_properties_bounds(graph in graph_undirected().max_size(32)) {
            match GraphProperties::on(&graph).run() {
                Ok(properties) => {
                    prop_assert!(properties.radius() <= properties.diameter());
                    prop_assert!(properties.diameter() <= 2 * properties.radius());

                    for v in 0..graph.vertex_count() {
                        let expected = distances_naive(&graph, v).into_iter().flatten().max();
                        prop_assert_eq!(Some(properties.eccentricity(v)), expected);
                    }
                }
                Err(Error::Empty) => prop_assert_eq!(graph.vertex_count(), 0),
                Err(Error::Disconnected { from, to }) => {
                    prop_assert_eq!(distances_naive(&graph, from)[to], None);
                }
            }
        }
    }
}
