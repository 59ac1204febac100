//! Traits describing what a graph can do.
//!
//! Algorithms are generic over these capabilities rather than over concrete
//! storages, so the same traversal runs on every [storage](crate::storage) as
//! well as on graph-like results such as
//! [`TransitiveClosure`](crate::algo::TransitiveClosure).
//!
//! Vertices are identified by their position in `0..vertex_count`. There is no
//! vertex object.

pub mod edge;
pub mod error;
pub mod marker;

pub use edge::WeightedEdge;

use self::{
    error::{EdgeError, VertexOutOfRange},
    marker::{Directed, EdgeType},
};

pub trait GraphBase {
    type EdgeType: EdgeType;

    /// Returns the number of vertices. It never changes over the lifetime of
    /// the graph.
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges.
    ///
    /// Parallel edges and self-loops are counted individually. An undirected
    /// edge counts once even though it appears in the adjacency of both its
    /// endpoints.
    fn edge_count(&self) -> usize;

    fn is_directed(&self) -> bool {
        Self::EdgeType::is_directed()
    }

    fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns `Err` if the vertex does not exist in the graph.
    fn check_vertex(&self, vertex: usize) -> Result<(), VertexOutOfRange> {
        VertexOutOfRange::check(vertex, self.vertex_count())
    }
}

pub trait Neighbors: GraphBase {
    type NeighborsIter<'a>: Iterator<Item = usize>
    where
        Self: 'a;

    /// Returns the vertices adjacent to `vertex` in insertion order.
    ///
    /// A parallel edge yields its endpoint once per edge. An undirected
    /// self-loop yields the vertex twice.
    ///
    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    fn neighbors(&self, vertex: usize) -> Self::NeighborsIter<'_>;

    /// Number of entries in the adjacency of `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    fn degree(&self, vertex: usize) -> usize {
        self.neighbors(vertex).count()
    }
}

pub trait WeightedNeighbors: Neighbors {
    type EdgesIter<'a>: Iterator<Item = &'a WeightedEdge>
    where
        Self: 'a;

    /// Returns the edges leaving `vertex` in insertion order.
    ///
    /// For undirected graphs, the edges are oriented so that
    /// [`from`](WeightedEdge::from) is always `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    fn edges(&self, vertex: usize) -> Self::EdgesIter<'_>;
}

/// Directed graphs that can build a copy of themselves with all edges flipped.
pub trait Reverse: GraphBase<EdgeType = Directed> {
    type Output: GraphBase<EdgeType = Directed>;

    /// Eagerly builds the reversed graph. This is a _O(V + E)_ copy, not a
    /// view.
    fn reverse(&self) -> Self::Output;
}

pub trait Connect<E>: GraphBase {
    /// Adds an edge between `from` and `to`.
    ///
    /// Parallel edges and self-loops are permitted.
    fn try_connect(&mut self, from: usize, to: usize, edge: E) -> Result<(), EdgeError>;

    /// Removes **all** edges between `from` and `to` and returns how many
    /// there were. Does nothing if there are none.
    fn try_disconnect(&mut self, from: usize, to: usize) -> Result<usize, EdgeError>;

    /// # Panics
    ///
    /// Panics if any of the endpoints does not exist.
    fn connect(&mut self, from: usize, to: usize, edge: E) {
        if let Err(error) = self.try_connect(from, to, edge) {
            panic!("{error}");
        }
    }

    /// # Panics
    ///
    /// Panics if any of the endpoints does not exist.
    fn disconnect(&mut self, from: usize, to: usize) -> usize {
        match self.try_disconnect(from, to) {
            Ok(removed) => removed,
            Err(error) => panic!("{error}"),
        }
    }

    fn extend_with_edges<T, I>(&mut self, iter: I)
    where
        T: IntoEdge<E>,
        I: IntoIterator<Item = T>,
    {
        for edge in iter {
            let (from, to, edge) = edge.unpack();
            self.connect(from, to, edge);
        }
    }
}

/// Graphs that can be created with a fixed number of vertices.
pub trait Create<E>: Connect<E> + Sized {
    fn with_vertex_count(vertex_count: usize) -> Self;

    fn from_edges<T, I>(vertex_count: usize, iter: I) -> Self
    where
        T: IntoEdge<E>,
        I: IntoIterator<Item = T>,
    {
        let mut graph = Self::with_vertex_count(vertex_count);
        graph.extend_with_edges(iter);
        graph
    }
}

pub trait IntoEdge<E> {
    fn unpack(self) -> (usize, usize, E);
}

impl<E> IntoEdge<E> for (usize, usize, E) {
    fn unpack(self) -> (usize, usize, E) {
        self
    }
}

impl<E: Default> IntoEdge<E> for (usize, usize) {
    fn unpack(self) -> (usize, usize, E) {
        (self.0, self.1, E::default())
    }
}

impl<E: Clone> IntoEdge<E> for &(usize, usize, E) {
    fn unpack(self) -> (usize, usize, E) {
        (self.0, self.1, self.2.clone())
    }
}

impl<E: Default> IntoEdge<E> for &(usize, usize) {
    fn unpack(self) -> (usize, usize, E) {
        (self.0, self.1, E::default())
    }
}

macro_rules! deref_graph_base {
    ($($ref_kind:tt)*) => {
        impl<G> GraphBase for $($ref_kind)* G
        where
            G: GraphBase,
        {
            type EdgeType = G::EdgeType;

            fn vertex_count(&self) -> usize {
                (**self).vertex_count()
            }

            fn edge_count(&self) -> usize {
                (**self).edge_count()
            }
        }
    };
}

deref_graph_base!(&);
deref_graph_base!(&mut);

macro_rules! deref_neighbors {
    ($($ref_kind:tt)*) => {
        impl<G> Neighbors for $($ref_kind)* G
        where
            G: Neighbors,
        {
            type NeighborsIter<'a> = G::NeighborsIter<'a>
            where
                Self: 'a;

            fn neighbors(&self, vertex: usize) -> Self::NeighborsIter<'_> {
                (**self).neighbors(vertex)
            }

            fn degree(&self, vertex: usize) -> usize {
                (**self).degree(vertex)
            }
        }
    };
}

deref_neighbors!(&);
deref_neighbors!(&mut);

macro_rules! deref_weighted_neighbors {
    ($($ref_kind:tt)*) => {
        impl<G> WeightedNeighbors for $($ref_kind)* G
        where
            G: WeightedNeighbors,
        {
            type EdgesIter<'a> = G::EdgesIter<'a>
            where
                Self: 'a;

            fn edges(&self, vertex: usize) -> Self::EdgesIter<'_> {
                (**self).edges(vertex)
            }
        }
    };
}

deref_weighted_neighbors!(&);
deref_weighted_neighbors!(&mut);
