use std::{fmt, iter::Map, marker::PhantomData, slice};

use tracing::trace;

use crate::{
    common::Bag,
    core::{
        error::EdgeError,
        marker::{Directed, EdgeType},
        Connect, Create, GraphBase, Neighbors, Reverse, WeightedEdge, WeightedNeighbors,
    },
};

use super::shared::{bag_of, fmt_adjacency};

/// Weighted graph storing the edges leaving every vertex in a [`Bag`].
///
/// An undirected edge is stored twice, once in the bag of each endpoint and
/// oriented away from it. [`WeightedEdge::other`] resolves the opposite
/// endpoint regardless of the orientation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedAdjList<Ty> {
    adj: Vec<Bag<WeightedEdge>>,
    edge_count: usize,
    ty: PhantomData<fn() -> Ty>,
}

impl<Ty: EdgeType> WeightedAdjList<Ty> {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adj: (0..vertex_count).map(|_| Bag::new()).collect(),
            edge_count: 0,
            ty: PhantomData,
        }
    }

    /// Returns the edges leaving `vertex` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    pub fn adjacent(&self, vertex: usize) -> &[WeightedEdge] {
        bag_of(&self.adj, vertex).as_slice()
    }
}

impl<Ty: EdgeType> GraphBase for WeightedAdjList<Ty> {
    type EdgeType = Ty;

    fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<Ty: EdgeType> Neighbors for WeightedAdjList<Ty> {
    type NeighborsIter<'a> = Map<slice::Iter<'a, WeightedEdge>, fn(&WeightedEdge) -> usize>
    where
        Self: 'a;

    fn neighbors(&self, vertex: usize) -> Self::NeighborsIter<'_> {
        bag_of(&self.adj, vertex)
            .iter()
            .map(WeightedEdge::to as fn(&WeightedEdge) -> usize)
    }

    fn degree(&self, vertex: usize) -> usize {
        bag_of(&self.adj, vertex).len()
    }
}

impl<Ty: EdgeType> WeightedNeighbors for WeightedAdjList<Ty> {
    type EdgesIter<'a> = slice::Iter<'a, WeightedEdge>
    where
        Self: 'a;

    fn edges(&self, vertex: usize) -> Self::EdgesIter<'_> {
        bag_of(&self.adj, vertex).iter()
    }
}

impl<Ty: EdgeType> Connect<f64> for WeightedAdjList<Ty> {
    fn try_connect(&mut self, from: usize, to: usize, weight: f64) -> Result<(), EdgeError> {
        EdgeError::check(from, to, self.adj.len())?;

        let edge = WeightedEdge::new(from, to, weight);
        self.adj[from].push(edge);
        if !Ty::is_directed() {
            self.adj[to].push(edge.reversed());
        }
        self.edge_count += 1;

        Ok(())
    }

    fn try_disconnect(&mut self, from: usize, to: usize) -> Result<usize, EdgeError> {
        EdgeError::check(from, to, self.adj.len())?;

        let mut removed = self.adj[from].remove_matching(|edge| edge.to() == to);

        if !Ty::is_directed() {
            if from == to {
                // Both halves of an undirected self-loop live in the same bag.
                removed /= 2;
            } else {
                self.adj[to].remove_matching(|edge| edge.to() == from);
            }
        }

        self.edge_count -= removed;
        trace!(from, to, removed, "disconnected vertices");

        Ok(removed)
    }
}

impl<Ty: EdgeType> Create<f64> for WeightedAdjList<Ty> {
    fn with_vertex_count(vertex_count: usize) -> Self {
        Self::new(vertex_count)
    }
}

impl Reverse for WeightedAdjList<Directed> {
    type Output = Self;

    fn reverse(&self) -> Self::Output {
        let mut reversed = Self::new(self.adj.len());

        for edge in self.adj.iter().flatten() {
            reversed.adj[edge.to()].push(edge.reversed());
        }
        reversed.edge_count = self.edge_count;

        reversed
    }
}

impl<Ty: EdgeType> fmt::Display for WeightedAdjList<Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_adjacency(f, &self.adj, self.edge_count, |f, edge| {
            write!(f, "{edge}")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::marker::Undirected,
        storage::{tests::*, WeightedDigraph, WeightedGraph},
    };

    #[test]
    fn basic_undirected() {
        test_basic::<f64, WeightedAdjList<Undirected>>();
    }

    #[test]
    fn basic_directed() {
        test_basic::<f64, WeightedAdjList<Directed>>();
    }

    #[test]
    fn multi_undirected() {
        test_multi::<f64, WeightedAdjList<Undirected>>();
    }

    #[test]
    fn multi_directed() {
        test_multi::<f64, WeightedAdjList<Directed>>();
    }

    #[test]
    fn self_loop_undirected() {
        test_self_loop::<f64, WeightedAdjList<Undirected>>();
    }

    #[test]
    fn self_loop_directed() {
        test_self_loop::<f64, WeightedAdjList<Directed>>();
    }

    #[test]
    fn connect_disconnect_round_trip_undirected() {
        test_round_trip::<f64, WeightedAdjList<Undirected>>();
    }

    #[test]
    fn connect_disconnect_round_trip_directed() {
        test_round_trip::<f64, WeightedAdjList<Directed>>();
    }

    #[test]
    fn out_of_range_undirected() {
        test_out_of_range::<f64, WeightedAdjList<Undirected>>();
    }

    #[test]
    fn out_of_range_directed() {
        test_out_of_range::<f64, WeightedAdjList<Directed>>();
    }

    #[test]
    fn undirected_edge_stored_for_both_endpoints() {
        let mut graph = WeightedGraph::new(3);
        graph.connect(0, 2, 1.5);

        assert_eq!(graph.adjacent(0), &[WeightedEdge::new(0, 2, 1.5)]);
        assert_eq!(graph.adjacent(2), &[WeightedEdge::new(2, 0, 1.5)]);

        let from_two = graph.edges(2).next().unwrap();
        assert_eq!(from_two.other(2), 0);
        assert_eq!(from_two.other(0), 2);
    }

    #[test]
    fn directed_edges_and_neighbors() {
        let mut graph = WeightedDigraph::new(3);
        graph.extend_with_edges([(0, 1, 0.5), (0, 2, 2.0), (2, 0, 1.0)]);

        assert_eq!(
            graph.edges(0).copied().collect::<Vec<_>>(),
            vec![WeightedEdge::new(0, 1, 0.5), WeightedEdge::new(0, 2, 2.0)]
        );
        assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(graph.edges(1).count(), 0);
    }

    #[test]
    fn reverse_preserves_weights() {
        let mut graph = WeightedDigraph::new(3);
        graph.extend_with_edges([(0, 1, 0.5), (0, 2, 2.0), (1, 2, -1.0)]);

        let reversed = graph.reverse();

        assert_eq!(reversed.edge_count(), 3);
        assert_eq!(reversed.adjacent(0), &[] as &[WeightedEdge]);
        assert_eq!(reversed.adjacent(1), &[WeightedEdge::new(1, 0, 0.5)]);
        assert_eq!(
            reversed.adjacent(2),
            &[WeightedEdge::new(2, 0, 2.0), WeightedEdge::new(2, 1, -1.0)]
        );
    }

    #[test]
    fn disconnect_ignores_weight() {
        let mut graph = WeightedDigraph::new(2);
        graph.extend_with_edges([(0, 1, 0.5), (0, 1, 3.0), (1, 0, 1.0)]);

        assert_eq!(graph.disconnect(0, 1), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.adjacent(1), &[WeightedEdge::new(1, 0, 1.0)]);
    }

    #[test]
    fn display() {
        let mut graph = WeightedDigraph::new(2);
        graph.connect(0, 1, 0.25);

        assert_eq!(graph.to_string(), "2 vertices, 1 edges\n0: 0->1 0.25\n1:\n");
    }
}
