use std::{cmp::Ordering, fmt};

/// An edge carrying a weight.
///
/// Equality and ordering compare `(from, to, weight)` lexicographically. The
/// weights are compared by [`f64::total_cmp`] after mapping `-0.0` to `0.0`,
/// so the two zeros are equal and the ordering is total even for NaN (which
/// is equal to itself).
#[derive(Debug, Clone, Copy)]
pub struct WeightedEdge {
    from: usize,
    to: usize,
    weight: f64,
}

impl WeightedEdge {
    pub fn new(from: usize, to: usize, weight: f64) -> Self {
        Self { from, to, weight }
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the endpoint which is not `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not an endpoint of the edge.
    pub fn other(&self, vertex: usize) -> usize {
        if vertex == self.from {
            self.to
        } else if vertex == self.to {
            self.from
        } else {
            panic!("vertex {vertex} is not an endpoint of edge {self}")
        }
    }

    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.to, self.from, self.weight)
    }
}

impl PartialEq for WeightedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for WeightedEdge {}

impl PartialOrd for WeightedEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WeightedEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.from
            .cmp(&other.from)
            .then(self.to.cmp(&other.to))
            .then(weight_key(self.weight).total_cmp(&weight_key(other.weight)))
    }
}

// Adding positive zero turns negative zero into positive zero and keeps every
// other value.
fn weight_key(weight: f64) -> f64 {
    weight + 0.0
}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {:.2}", self.from, self.to, self.weight)
    }
}
