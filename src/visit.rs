//! Graph traversals.
//!
//! All traversals are **iterative**: they keep an explicit stack or queue and
//! are therefore not limited by the size of the program stack, even on long
//! path-like graphs.
//!
//! The order in which the neighbors of a vertex are discovered follows the
//! adjacency order of the graph, but algorithms built on top of these
//! traversals do not rely on it.

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

use crate::{common::VisitSet, core::Neighbors};

/// Event produced by the [`Dfs`] traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsEvent {
    /// A new vertex was discovered.
    Open(usize),

    /// An edge of the tree formed by the traversal. It is immediately followed
    /// by the [`Open`](DfsEvent::Open) of its target.
    TreeEdge { from: usize, to: usize },

    /// An edge to a vertex that was already discovered.
    ///
    /// In undirected graphs, this includes the edge back to the parent in the
    /// traversal tree.
    NonTreeEdge { from: usize, to: usize },

    /// All neighbors of the vertex were explored.
    Close(usize),
}

/// Depth-first traversal producing [events](DfsEvent).
///
/// The set of visited vertices is kept between [starts](Dfs::start), so
/// starting the traversal from several roots explores each vertex at most once
/// in total.
pub struct Dfs<'a, G>
where
    G: Neighbors + 'a,
{
    graph: &'a G,
    visited: FixedBitSet,
    stack: Vec<(usize, G::NeighborsIter<'a>)>,
    pending: Option<usize>,
}

impl<'a, G> Dfs<'a, G>
where
    G: Neighbors + 'a,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: FixedBitSet::with_capacity(graph.vertex_count()),
            stack: Vec::new(),
            pending: None,
        }
    }

    /// Starts the traversal from `root`. If the root was already visited, the
    /// traversal produces no events.
    ///
    /// Any unfinished traversal is abandoned.
    ///
    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    pub fn start(&mut self, root: usize) -> &mut Self {
        assert_root(self.graph, root);

        self.stack.clear();
        self.pending = None;

        if self.visited.visit(root) {
            self.pending = Some(root);
        }

        self
    }

    pub fn is_visited(&self, vertex: usize) -> bool {
        self.visited.is_visited(vertex)
    }

    pub fn visited(&self) -> &FixedBitSet {
        &self.visited
    }

    pub fn into_visited(self) -> FixedBitSet {
        self.visited
    }
}

impl<'a, G> Iterator for Dfs<'a, G>
where
    G: Neighbors + 'a,
{
    type Item = DfsEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(vertex) = self.pending.take() {
            self.stack.push((vertex, self.graph.neighbors(vertex)));
            return Some(DfsEvent::Open(vertex));
        }

        let (vertex, neighbors) = self.stack.last_mut()?;
        let vertex = *vertex;

        match neighbors.next() {
            Some(next) if self.visited.visit(next) => {
                self.pending = Some(next);
                Some(DfsEvent::TreeEdge {
                    from: vertex,
                    to: next,
                })
            }
            Some(next) => Some(DfsEvent::NonTreeEdge {
                from: vertex,
                to: next,
            }),
            None => {
                self.stack.pop();
                Some(DfsEvent::Close(vertex))
            }
        }
    }
}

/// A vertex reached by the [`Bfs`] traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BfsStep {
    pub vertex: usize,
    /// The vertex from which `vertex` was discovered, `None` for roots.
    pub pred: Option<usize>,
    /// The number of edges between the closest root and `vertex`.
    pub dist: usize,
}

/// Breadth-first traversal.
///
/// Vertices are reported in nondecreasing order of their distance from the
/// roots, each exactly once.
pub struct Bfs<'a, G>
where
    G: Neighbors,
{
    graph: &'a G,
    visited: FixedBitSet,
    queue: VecDeque<BfsStep>,
}

impl<'a, G> Bfs<'a, G>
where
    G: Neighbors,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: FixedBitSet::with_capacity(graph.vertex_count()),
            queue: VecDeque::new(),
        }
    }

    /// Adds a root to the traversal. Already visited roots are ignored.
    ///
    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    pub fn start(&mut self, root: usize) -> &mut Self {
        assert_root(self.graph, root);

        if self.visited.visit(root) {
            self.queue.push_back(BfsStep {
                vertex: root,
                pred: None,
                dist: 0,
            });
        }

        self
    }

    pub fn visited(&self) -> &FixedBitSet {
        &self.visited
    }
}

impl<'a, G> Iterator for Bfs<'a, G>
where
    G: Neighbors,
{
    type Item = BfsStep;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.queue.pop_front()?;

        for next in self.graph.neighbors(step.vertex) {
            if self.visited.visit(next) {
                self.queue.push_back(BfsStep {
                    vertex: next,
                    pred: Some(step.vertex),
                    dist: step.dist + 1,
                });
            }
        }

        Some(step)
    }
}

fn assert_root<G: Neighbors>(graph: &G, root: usize) {
    if let Err(error) = graph.check_vertex(root) {
        panic!("{error}");
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        core::Connect,
        infra::testing::create_path,
        storage::{Digraph, Graph},
    };

    use super::*;

    #[test]
    fn dfs_events_undirected() {
        let mut graph = Graph::new(3);
        graph.extend_with_edges([(0, 1), (1, 2), (2, 0)]);

        let events = Dfs::new(&graph).start(0).collect::<Vec<_>>();

        assert_eq!(
            events,
            vec![
                DfsEvent::Open(0),
                DfsEvent::TreeEdge { from: 0, to: 1 },
                DfsEvent::Open(1),
                DfsEvent::NonTreeEdge { from: 1, to: 0 },
                DfsEvent::TreeEdge { from: 1, to: 2 },
                DfsEvent::Open(2),
                DfsEvent::NonTreeEdge { from: 2, to: 1 },
                DfsEvent::NonTreeEdge { from: 2, to: 0 },
                DfsEvent::Close(2),
                DfsEvent::Close(1),
                DfsEvent::NonTreeEdge { from: 0, to: 2 },
                DfsEvent::Close(0),
            ]
        );
    }

    #[test]
    fn dfs_visited_kept_between_starts() {
        let mut graph = Digraph::new(4);
        graph.extend_with_edges([(0, 1), (2, 1), (2, 3)]);

        let mut dfs = Dfs::new(&graph);
        let first = dfs
            .start(0)
            .filter_map(|event| match event {
                DfsEvent::Open(vertex) => Some(vertex),
                _ => None,
            })
            .collect::<Vec<_>>();
        let second = dfs
            .start(2)
            .filter_map(|event| match event {
                DfsEvent::Open(vertex) => Some(vertex),
                _ => None,
            })
            .collect::<Vec<_>>();

        assert_eq!(first, vec![0, 1]);
        assert_eq!(second, vec![2, 3]);
        assert_eq!(dfs.start(1).count(), 0);
        assert_eq!(dfs.visited().count_ones(..), 4);
    }

    #[test]
    fn dfs_long_path_does_not_overflow() {
        let graph: Graph = create_path(200_000);

        let opened = Dfs::new(&graph)
            .start(0)
            .filter(|event| matches!(event, DfsEvent::Open(_)))
            .count();

        assert_eq!(opened, 200_000);
    }

    #[test]
    #[should_panic(expected = "vertex 5 is out of range for a graph with 3 vertices")]
    fn dfs_root_out_of_range() {
        let graph = Graph::new(3);
        Dfs::new(&graph).start(5);
    }

    #[test]
    #[should_panic(expected = "vertex 7 is out of range for a graph with 3 vertices")]
    fn bfs_root_out_of_range() {
        let graph = Digraph::new(3);
        Bfs::new(&graph).start(7);
    }

    #[test]
    fn bfs_distances() {
        let mut graph = Graph::new(5);
        graph.extend_with_edges([(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)]);

        let steps = Bfs::new(&graph).start(0).collect::<Vec<_>>();
        let dists = steps
            .iter()
            .map(|step| (step.vertex, step.dist))
            .collect::<Vec<_>>();

        assert_eq!(dists, vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 3)]);
        assert_eq!(steps[3].pred, Some(1));
    }

    #[test]
    fn bfs_multiple_roots() {
        let graph: Graph = create_path(5);

        let mut bfs = Bfs::new(&graph);
        bfs.start(0).start(4).start(0);
        let dists = bfs.map(|step| step.dist).collect::<Vec<_>>();

        assert_eq!(dists, vec![0, 0, 1, 1, 2]);
    }
}
