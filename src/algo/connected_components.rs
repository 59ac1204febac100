//! Partition the vertices into connected components.
//!
//! Components are numbered `0..count` in the order of their smallest vertex.
//!
//! On directed graphs, each component is the set of vertices discovered by a
//! single search launched from the smallest vertex not yet assigned, following
//! the edge direction. This is **not** a partition into strongly connected
//! components.
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::ConnectedComponents, core::Connect, storage::Graph};
//!
//! let mut graph = Graph::new(5);
//! graph.extend_with_edges([(0, 3), (1, 4)]);
//!
//! let cc = ConnectedComponents::on(&graph).run();
//!
//! assert_eq!(cc.count(), 3);
//! assert!(cc.connected(0, 3));
//! assert_eq!(cc.components(cc.id_of(4)).collect::<Vec<_>>(), vec![1, 4]);
//! ```

use tracing::debug;

use crate::{
    core::Neighbors,
    visit::{Dfs, DfsEvent},
};

use super::assert_vertex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedComponents {
    id: Vec<usize>,
    size: Vec<usize>,
}

impl ConnectedComponents {
    pub fn on<G: Neighbors>(graph: &G) -> ConnectedComponentsBuilder<'_, G> {
        ConnectedComponentsBuilder { graph }
    }

    pub fn count(&self) -> usize {
        self.size.len()
    }

    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    pub fn id_of(&self, vertex: usize) -> usize {
        assert_vertex(vertex, self.id.len());
        self.id[vertex]
    }

    /// # Panics
    ///
    /// Panics if any of the vertices does not exist.
    pub fn connected(&self, v: usize, w: usize) -> bool {
        self.id_of(v) == self.id_of(w)
    }

    /// Vertices of the component in increasing order. Each call scans all
    /// vertices.
    ///
    /// # Panics
    ///
    /// Panics if the component does not exist.
    pub fn components(&self, id: usize) -> impl Iterator<Item = usize> + '_ {
        self.assert_component(id);
        self.id
            .iter()
            .enumerate()
            .filter(move |(_, component)| **component == id)
            .map(|(vertex, _)| vertex)
    }

    /// Number of vertices in the component.
    ///
    /// # Panics
    ///
    /// Panics if the component does not exist.
    pub fn size(&self, id: usize) -> usize {
        self.assert_component(id);
        self.size[id]
    }

    fn assert_component(&self, id: usize) {
        assert!(
            id < self.size.len(),
            "component {id} does not exist, there are {} components",
            self.size.len()
        );
    }
}

pub struct ConnectedComponentsBuilder<'a, G> {
    graph: &'a G,
}

impl<'a, G> ConnectedComponentsBuilder<'a, G>
where
    G: Neighbors,
{
    pub fn run(self) -> ConnectedComponents {
        let vertex_count = self.graph.vertex_count();
        let mut id = vec![0; vertex_count];
        let mut size = Vec::new();

        let mut dfs = Dfs::new(self.graph);

        for root in 0..vertex_count {
            if dfs.is_visited(root) {
                continue;
            }

            let current = size.len();
            let mut count = 0;

            for event in dfs.start(root) {
                if let DfsEvent::Open(vertex) = event {
                    id[vertex] = current;
                    count += 1;
                }
            }

            size.push(count);
        }

        debug!(
            vertex_count,
            components = size.len(),
            "connected components computed"
        );

        ConnectedComponents { id, size }
    }
}
