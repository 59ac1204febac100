use std::{
    collections::{BTreeSet, HashSet},
    hash::BuildHasher,
};

use fixedbitset::FixedBitSet;

/// A set of visited vertices.
pub trait VisitSet {
    /// Marks the vertex as visited.
    ///
    /// Returns `true` when this is the first time the vertex is visited.
    fn visit(&mut self, vertex: usize) -> bool;

    /// Returns `true` if the vertex is marked as visited.
    fn is_visited(&self, vertex: usize) -> bool;

    /// Returns the number of visited vertices.
    fn visited_count(&self) -> usize;

    /// Resets the set of visited vertices to be empty.
    fn reset_visited(&mut self);
}

impl VisitSet for BTreeSet<usize> {
    fn visit(&mut self, vertex: usize) -> bool {
        self.insert(vertex)
    }

    fn is_visited(&self, vertex: usize) -> bool {
        self.contains(&vertex)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear();
    }
}

impl<S: BuildHasher> VisitSet for HashSet<usize, S> {
    fn visit(&mut self, vertex: usize) -> bool {
        self.insert(vertex)
    }

    fn is_visited(&self, vertex: usize) -> bool {
        self.contains(&vertex)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}

impl VisitSet for FixedBitSet {
    fn visit(&mut self, vertex: usize) -> bool {
        if self.len() <= vertex {
            self.grow(vertex + 1);
        }
        !self.put(vertex)
    }

    fn is_visited(&self, vertex: usize) -> bool {
        self.contains(vertex)
    }

    fn visited_count(&self) -> usize {
        self.count_ones(..)
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}
