use std::{fmt, marker::PhantomData};

use proptest::{
    prelude::Rng,
    strategy::{Just, NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};
use rustc_hash::FxHashSet;

use crate::{
    core::{marker::EdgeType, Create},
    storage::{Digraph, Graph, WeightedDigraph, WeightedGraph},
};

pub fn graph_undirected() -> GraphStrategy<Just<()>, Graph> {
    GraphStrategy::new(Just(()))
}

pub fn graph_directed() -> GraphStrategy<Just<()>, Digraph> {
    GraphStrategy::new(Just(()))
}

pub fn weighted_graph_undirected<E: Strategy<Value = f64>>(
    weight: E,
) -> GraphStrategy<E, WeightedGraph> {
    GraphStrategy::new(weight)
}

pub fn weighted_graph_directed<E: Strategy<Value = f64>>(
    weight: E,
) -> GraphStrategy<E, WeightedDigraph> {
    GraphStrategy::new(weight)
}

pub struct GraphStrategy<E: Strategy, G> {
    edge: E,
    graph: PhantomData<fn() -> G>,
    params: StrategyParams,
}

// G is phantom data, we should not require Debug bound on it.
impl<E: Strategy, G> fmt::Debug for GraphStrategy<E, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStrategy")
            .field("edge", &self.edge)
            .field("params", &self.params)
            .finish()
    }
}

macro_rules! delegate_builder_fn {
    ($name:ident$(, $param:ident: $param_type:ty)*) => {
        #[doc = concat!("See [StrategyParams::", stringify!($name), "](StrategyParams::", stringify!($name), ") for details.")]
        pub fn $name(self, $($param: $param_type),*) -> Self {
            Self {
                params: self.params.$name($($param,)*),
                ..self
            }
        }
    }
}

impl<E: Strategy, G> GraphStrategy<E, G> {
    pub fn new(edge: E) -> Self {
        Self::with_params(edge, StrategyParams::default())
    }

    pub fn with_params(edge: E, params: StrategyParams) -> Self {
        Self {
            edge,
            graph: PhantomData,
            params,
        }
    }

    // Builder pattern on the strategy itself to allow usage as in
    // `graph_directed().max_size(100).acyclic()`.
    delegate_builder_fn!(max_size, max_size: usize);
    delegate_builder_fn!(acyclic);
    delegate_builder_fn!(bipartite);
    delegate_builder_fn!(allow_loops);
    delegate_builder_fn!(multi_edge_prob, multi_edge_prob: f32);
    delegate_builder_fn!(density, density: f32);
    delegate_builder_fn!(sparse);
}

#[derive(Debug, Clone, Copy)]
pub struct StrategyParams {
    max_size: usize,
    acyclic: bool,
    bipartite: bool,
    allow_loops: bool,
    multi_edge_prob: f32,
    // (0, 1] - 1 means no limitation in choosing p, lower values artificially decrease chosen p
    density: f32,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 512,
            acyclic: false,
            bipartite: false,
            allow_loops: false,
            multi_edge_prob: 0.0,
            density: 1.0,
        }
    }
}

impl StrategyParams {
    pub fn max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    /// Only directed graphs are supported. All edges go from a lower vertex to
    /// a higher one.
    pub fn acyclic(self) -> Self {
        Self {
            acyclic: true,
            ..self
        }
    }

    /// Edges only connect an even vertex with an odd one.
    pub fn bipartite(self) -> Self {
        Self {
            bipartite: true,
            ..self
        }
    }

    pub fn allow_loops(self) -> Self {
        Self {
            allow_loops: true,
            ..self
        }
    }

    pub fn multi_edge_prob(self, multi_edge_prob: f32) -> Self {
        assert!(
            (0.0..=0.1).contains(&multi_edge_prob),
            "multi edge probability must be in [0, 0.1] range"
        );
        Self {
            multi_edge_prob,
            ..self
        }
    }

    pub fn density(self, density: f32) -> Self {
        assert!(
            density > 0.0 && density <= 1.0,
            "density must be in (0, 1] range"
        );
        Self { density, ..self }
    }

    pub fn sparse(self) -> Self {
        self.density(0.05)
    }
}

impl<E: Strategy, G> Strategy for GraphStrategy<E, G>
where
    G: Create<E::Value> + fmt::Debug,
{
    type Tree = GraphValueTree<E::Tree, G>;
    type Value = G;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        assert!(
            !self.params.acyclic || G::EdgeType::is_directed(),
            "acyclic undirected graphs are not supported"
        );

        let n = runner.rng().gen_range(0..=self.params.max_size);
        let p = runner.rng().gen::<f32>() * self.params.density;

        let mut edges = Vec::new();

        if 1.0 - p >= 1.0 {
            return Ok(GraphValueTree::new(n, edges));
        }

        // Efficient generation of large random networks
        // http://vlado.fmf.uni-lj.si/pub/networks/doc/ms/rndgen.pdf

        let mut v = 1;
        let mut w = usize::MAX; // -1

        while v < n {
            let r: f32 = runner.rng().gen();
            let skip = ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;
            w = w.wrapping_add(1).saturating_add(skip);

            if self.params.allow_loops {
                // Using `w > v` instead of `w >= v` to allow loops.
                while w > v && v < n {
                    w -= v;
                    v += 1;
                }
            } else {
                while w >= v && v < n {
                    w -= v;
                    v += 1;
                }
            }

            if v < n {
                if self.params.bipartite && v % 2 == w % 2 {
                    continue;
                }

                // For directed acyclic graph or in half of the cases, pick the
                // vertices such that the edge goes from the lower vertex.
                // Otherwise a directed cycle is possible.
                let (s, t) = if self.params.acyclic || runner.rng().gen_bool(0.5) {
                    (w, v)
                } else {
                    (v, w)
                };

                edges.push((s, t, self.edge.new_tree(runner)?));

                while runner.rng().gen_bool(self.params.multi_edge_prob as f64) {
                    edges.push((s, t, self.edge.new_tree(runner)?));
                }
            }
        }

        Ok(GraphValueTree::new(n, edges))
    }
}

/// Shrinks by removing edges one at a time. The vertex count is kept because
/// removing a vertex would renumber the others.
pub struct GraphValueTree<E: ValueTree, G> {
    vertex_count: usize,
    edges: Vec<(usize, usize, E)>,
    removed: FxHashSet<usize>,
    next: usize,
    last: Option<usize>,
    graph: PhantomData<fn() -> G>,
}

impl<E: ValueTree, G> GraphValueTree<E, G> {
    fn new(vertex_count: usize, edges: Vec<(usize, usize, E)>) -> Self {
        Self {
            vertex_count,
            edges,
            removed: FxHashSet::default(),
            next: 0,
            last: None,
            graph: PhantomData,
        }
    }
}

impl<E: ValueTree, G> ValueTree for GraphValueTree<E, G>
where
    G: Create<E::Value> + fmt::Debug,
{
    type Value = G;

    fn current(&self) -> Self::Value {
        let mut graph = G::with_vertex_count(self.vertex_count);

        for (e, (from, to, edge)) in self.edges.iter().enumerate() {
            if !self.removed.contains(&e) {
                graph.connect(*from, *to, edge.current());
            }
        }

        graph
    }

    fn simplify(&mut self) -> bool {
        if self.next >= self.edges.len() {
            return false;
        }

        self.removed.insert(self.next);
        self.last = Some(self.next);
        self.next += 1;
        true
    }

    fn complicate(&mut self) -> bool {
        match self.last.take() {
            Some(e) => {
                self.removed.remove(&e);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::test_runner::TestRunner;

    use super::*;
    use crate::{
        core::{GraphBase, Neighbors},
        infra::testing::check_consistency,
    };

    #[test]
    fn generated_graphs_are_consistent() {
        let mut runner = TestRunner::deterministic();
        let strategy = graph_undirected().max_size(32).multi_edge_prob(0.1);

        for _ in 0..16 {
            let graph = strategy.new_tree(&mut runner).unwrap().current();
            check_consistency(&graph).unwrap();
        }
    }

    #[test]
    fn acyclic_goes_upwards() {
        let mut runner = TestRunner::deterministic();
        let strategy = graph_directed().max_size(32).acyclic();

        for _ in 0..16 {
            let graph = strategy.new_tree(&mut runner).unwrap().current();
            for v in 0..graph.vertex_count() {
                assert!(graph.neighbors(v).all(|w| w > v));
            }
        }
    }

    #[test]
    fn bipartite_connects_parities() {
        let mut runner = TestRunner::deterministic();
        let strategy = graph_undirected().max_size(32).bipartite();

        for _ in 0..16 {
            let graph = strategy.new_tree(&mut runner).unwrap().current();
            for v in 0..graph.vertex_count() {
                assert!(graph.neighbors(v).all(|w| w % 2 != v % 2));
            }
        }
    }

    #[test]
    fn shrinking_removes_edges() {
        let mut runner = TestRunner::deterministic();
        let mut tree = graph_directed()
            .max_size(16)
            .new_tree(&mut runner)
            .unwrap();

        let vertex_count = tree.current().vertex_count();
        while tree.simplify() {}

        let graph = tree.current();
        assert_eq!(graph.vertex_count(), vertex_count);
        assert_eq!(graph.edge_count(), 0);
    }
}
