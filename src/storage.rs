//! Adjacency-list graph storages.
//!
//! A storage owns one [`Bag`](crate::common::Bag) per vertex together with a
//! running edge counter. The number of vertices is fixed at construction. The
//! graph changes only by [connecting](crate::core::Connect::connect) and
//! [disconnecting](crate::core::Connect::disconnect) vertices.
//!
//! |                   | unweighted   | weighted          |
//! |-------------------|--------------|-------------------|
//! | **undirected**    | [`Graph`]    | [`WeightedGraph`] |
//! | **directed**      | [`Digraph`]  | [`WeightedDigraph`] |
//!
//! | operation         | complexity   |
//! |-------------------|--------------|
//! | connect           | _O*(1)_      |
//! | disconnect        | _O(d)_       |
//! | get neighbors     | _O(d)_       |
//! | reverse           | _O(V + E)_   |
//! | space             | _O(V + E)_   |
//!
//! * _V_ – vertex count
//! * _E_ – edge count
//! * _d_ – vertex degree
//! * _O*(..)_ – amortized complexity
//!
//! Storages are not synchronized. Mutation must not happen concurrently with
//! any other access; computing an algorithm result or a
//! [reversed](crate::core::Reverse) copy gives an independent snapshot that
//! can be shared between threads.

pub mod adj_list;
mod shared;
pub mod weighted_adj_list;

#[doc(inline)]
pub use self::{adj_list::AdjList, weighted_adj_list::WeightedAdjList};

use crate::core::marker::{Directed, Undirected};

/// Undirected, unweighted graph.
pub type Graph = AdjList<Undirected>;

/// Directed, unweighted graph.
pub type Digraph = AdjList<Directed>;

/// Undirected graph with `f64` edge weights.
pub type WeightedGraph = WeightedAdjList<Undirected>;

/// Directed graph with `f64` edge weights.
pub type WeightedDigraph = WeightedAdjList<Directed>;

#[cfg(test)]
pub(crate) mod tests {
    use assert_matches::assert_matches;

    use crate::{
        core::{
            error::{EdgeError, EdgeErrorKind},
            Create, Neighbors,
        },
        infra::testing::check_consistency,
    };

    pub fn test_basic<E, G>()
    where
        E: Default,
        G: Create<E> + Neighbors,
    {
        let mut graph = G::with_vertex_count(4);

        graph.connect(0, 1, E::default());
        graph.connect(0, 2, E::default());
        graph.connect(0, 3, E::default());
        graph.connect(2, 1, E::default());
        graph.connect(2, 3, E::default());

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 5);

        assert_eq!(graph.disconnect(0, 3), 1);
        assert_eq!(graph.edge_count(), 4);

        for vertex in 0..graph.vertex_count() {
            assert_eq!(graph.neighbors(vertex).count(), graph.degree(vertex));
        }

        let mut out = graph.neighbors(0).collect::<Vec<_>>();
        out.sort_unstable();
        assert_eq!(out, vec![1, 2]);

        if graph.is_directed() {
            assert_eq!(graph.neighbors(1).count(), 0);
            assert_eq!(graph.neighbors(3).count(), 0);
        } else {
            let mut neighbors = graph.neighbors(1).collect::<Vec<_>>();
            neighbors.sort_unstable();
            assert_eq!(neighbors, vec![0, 2]);
            assert_eq!(graph.neighbors(3).collect::<Vec<_>>(), vec![2]);
        }

        check_consistency(&graph).unwrap();
    }

    pub fn test_multi<E, G>()
    where
        E: Default,
        G: Create<E> + Neighbors,
    {
        let mut graph = G::with_vertex_count(3);

        graph.connect(0, 1, E::default());
        graph.connect(0, 1, E::default());
        graph.connect(0, 1, E::default());
        graph.connect(1, 2, E::default());

        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.degree(0), 3);
        check_consistency(&graph).unwrap();

        // All parallel edges are removed at once.
        assert_eq!(graph.disconnect(0, 1), 3);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(0), 0);
        check_consistency(&graph).unwrap();

        assert_eq!(graph.disconnect(0, 1), 0);
        assert_eq!(graph.edge_count(), 1);

        if !graph.is_directed() {
            // Undirected edge is removed regardless of the endpoints order.
            assert_eq!(graph.disconnect(2, 1), 1);
            assert_eq!(graph.edge_count(), 0);
        }
    }

    pub fn test_self_loop<E, G>()
    where
        E: Default,
        G: Create<E> + Neighbors,
    {
        let mut graph = G::with_vertex_count(2);

        graph.connect(0, 0, E::default());
        graph.connect(0, 0, E::default());
        graph.connect(0, 1, E::default());

        assert_eq!(graph.edge_count(), 3);
        if graph.is_directed() {
            assert_eq!(graph.degree(0), 3);
        } else {
            assert_eq!(graph.degree(0), 5);
        }
        check_consistency(&graph).unwrap();

        assert_eq!(graph.disconnect(0, 0), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![1]);
        check_consistency(&graph).unwrap();
    }

    pub fn test_round_trip<E, G>()
    where
        E: Default,
        G: Create<E> + Neighbors,
    {
        let mut graph = G::with_vertex_count(4);

        graph.connect(0, 1, E::default());
        graph.connect(1, 2, E::default());
        graph.connect(2, 0, E::default());

        let before = (0..4)
            .map(|v| graph.neighbors(v).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        graph.connect(3, 1, E::default());
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.disconnect(3, 1), 1);

        let after = (0..4)
            .map(|v| graph.neighbors(v).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(before, after);
    }

    pub fn test_out_of_range<E, G>()
    where
        E: Default,
        G: Create<E> + Neighbors,
    {
        let mut graph = G::with_vertex_count(2);

        assert_matches!(
            graph.try_connect(2, 0, E::default()),
            Err(EdgeError {
                kind: EdgeErrorKind::SourceAbsent,
                ..
            })
        );
        assert_matches!(
            graph.try_connect(0, 5, E::default()),
            Err(EdgeError {
                kind: EdgeErrorKind::DestinationAbsent,
                ..
            })
        );
        assert_matches!(
            graph.try_disconnect(0, 2),
            Err(EdgeError {
                kind: EdgeErrorKind::DestinationAbsent,
                ..
            })
        );
        assert_eq!(graph.edge_count(), 0);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            graph.neighbors(2).count()
        }));
        assert!(result.is_err());
    }
}
