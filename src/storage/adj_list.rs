use std::{fmt, iter::Copied, marker::PhantomData, slice};

use tracing::trace;

use crate::{
    common::Bag,
    core::{
        error::EdgeError,
        marker::{Directed, EdgeType},
        Connect, Create, GraphBase, Neighbors, Reverse,
    },
};

use super::shared::{bag_of, fmt_adjacency};

/// Unweighted graph storing the adjacent vertices of every vertex in a
/// [`Bag`].
///
/// An undirected edge `{v, w}` is recorded in the bags of both `v` and `w`, so
/// an undirected self-loop appears twice in the bag of its vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjList<Ty> {
    adj: Vec<Bag<usize>>,
    edge_count: usize,
    ty: PhantomData<fn() -> Ty>,
}

impl<Ty: EdgeType> AdjList<Ty> {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adj: (0..vertex_count).map(|_| Bag::new()).collect(),
            edge_count: 0,
            ty: PhantomData,
        }
    }

    /// Returns the adjacency of `vertex` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    pub fn adjacent(&self, vertex: usize) -> &[usize] {
        bag_of(&self.adj, vertex).as_slice()
    }
}

impl<Ty: EdgeType> GraphBase for AdjList<Ty> {
    type EdgeType = Ty;

    fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<Ty: EdgeType> Neighbors for AdjList<Ty> {
    type NeighborsIter<'a> = Copied<slice::Iter<'a, usize>>
    where
        Self: 'a;

    fn neighbors(&self, vertex: usize) -> Self::NeighborsIter<'_> {
        bag_of(&self.adj, vertex).iter().copied()
    }

    fn degree(&self, vertex: usize) -> usize {
        bag_of(&self.adj, vertex).len()
    }
}

impl<Ty: EdgeType> Connect<()> for AdjList<Ty> {
    fn try_connect(&mut self, from: usize, to: usize, _edge: ()) -> Result<(), EdgeError> {
        EdgeError::check(from, to, self.adj.len())?;

        self.adj[from].push(to);
        if !Ty::is_directed() {
            self.adj[to].push(from);
        }
        self.edge_count += 1;

        Ok(())
    }

    fn try_disconnect(&mut self, from: usize, to: usize) -> Result<usize, EdgeError> {
        EdgeError::check(from, to, self.adj.len())?;

        let mut removed = self.adj[from].remove_matching(|&w| w == to);

        if !Ty::is_directed() {
            if from == to {
                // Both halves of an undirected self-loop live in the same bag.
                removed /= 2;
            } else {
                self.adj[to].remove_matching(|&w| w == from);
            }
        }

        self.edge_count -= removed;
        trace!(from, to, removed, "disconnected vertices");

        Ok(removed)
    }
}

impl<Ty: EdgeType> Create<()> for AdjList<Ty> {
    fn with_vertex_count(vertex_count: usize) -> Self {
        Self::new(vertex_count)
    }
}

impl Reverse for AdjList<Directed> {
    type Output = Self;

    fn reverse(&self) -> Self::Output {
        let mut reversed = Self::new(self.adj.len());

        for (from, bag) in self.adj.iter().enumerate() {
            for &to in bag {
                reversed.adj[to].push(from);
            }
        }
        reversed.edge_count = self.edge_count;

        reversed
    }
}

impl<Ty: EdgeType> fmt::Display for AdjList<Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_adjacency(f, &self.adj, self.edge_count, |f, to| write!(f, "{to}"))
    }
}
