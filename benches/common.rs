#![allow(dead_code)]

use adjgraph::{
    core::{Connect, Create},
    storage::{Digraph, Graph, WeightedDigraph},
};
use fastrand::Rng;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_count,
            p,
        }
    }

    /// Generates pairs `(v, w)` with `w < v`.
    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        // Based on the implementation in adjgraph::infra::proptest.

        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        let skip = ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;
        *w = w.wrapping_add(1).saturating_add(skip);

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n {
            Some((*v, *w))
        } else {
            None
        }
    }
}

fn random<G: Create<()>>(vertex_count: usize, density: f32, rng: &mut Rng) -> G {
    let mut graph = G::with_vertex_count(vertex_count);
    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.connect(u, v, ());
    }

    graph
}

pub fn adjgraph_random_undirected(vertex_count: usize, density: f32, rng: &mut Rng) -> Graph {
    random(vertex_count, density, rng)
}

pub fn adjgraph_random_directed(vertex_count: usize, density: f32, rng: &mut Rng) -> Digraph {
    random(vertex_count, density, rng)
}

/// Edges go from the lower vertex to the higher one.
pub fn adjgraph_random_dag(vertex_count: usize, density: f32, rng: &mut Rng) -> WeightedDigraph {
    let mut graph = WeightedDigraph::new(vertex_count);
    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.connect(v.min(u), v.max(u), rng.f64());
    }

    graph
}

pub fn petgraph_random<Ty: petgraph::EdgeType>(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<(), (), Ty> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for _ in 0..vertex_count {
        graph.add_node(());
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }

    graph
}

pub fn petgraph_random_undirected(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<(), (), petgraph::Undirected> {
    petgraph_random(vertex_count, density, rng)
}

pub fn petgraph_random_directed(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<(), (), petgraph::Directed> {
    petgraph_random(vertex_count, density, rng)
}
