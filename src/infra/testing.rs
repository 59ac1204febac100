use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::{marker::EdgeType, Create, Neighbors};

pub fn create_path<G: Create<()>>(vertex_count: usize) -> G {
    let mut graph = G::with_vertex_count(vertex_count);

    for v in 1..vertex_count {
        graph.connect(v - 1, v, ());
    }

    graph
}

pub fn create_cycle<G: Create<()>>(vertex_count: usize) -> G {
    let mut graph = create_path::<G>(vertex_count);

    if vertex_count > 0 {
        graph.connect(vertex_count - 1, 0, ());
    }

    graph
}

pub fn create_complete<G: Create<()>>(vertex_count: usize) -> G {
    let mut graph = G::with_vertex_count(vertex_count);

    for u in 0..vertex_count {
        for v in 0..vertex_count {
            if u == v {
                continue;
            }

            if !G::EdgeType::is_directed() && v > u {
                break;
            }

            graph.connect(u, v, ());
        }
    }

    graph
}

/// Vertices `0..lhs` form the left partition, vertices `lhs..lhs + rhs` the
/// right one.
pub fn create_bipartite<G, F>(vertex_count_lhs: usize, vertex_count_rhs: usize, connect: F) -> G
where
    G: Create<()>,
    F: Fn(usize, usize) -> bool,
{
    let mut graph = G::with_vertex_count(vertex_count_lhs + vertex_count_rhs);

    for i in 0..vertex_count_lhs {
        for j in vertex_count_lhs..vertex_count_lhs + vertex_count_rhs {
            if connect(i, j) {
                graph.connect(i, j, ());
            }
        }
    }

    graph
}

/// Distances from `source` computed by a plain queue-based search over the
/// neighbors. Used as a reference for the algorithms under test.
pub fn distances_naive<G: Neighbors>(graph: &G, source: usize) -> Vec<Option<usize>> {
    let mut dist = vec![None; graph.vertex_count()];
    let mut queue = VecDeque::new();

    dist[source] = Some(0);
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        let d = dist[v].unwrap_or_default();
        for w in graph.neighbors(v) {
            if dist[w].is_none() {
                dist[w] = Some(d + 1);
                queue.push_back(w);
            }
        }
    }

    dist
}

/// Reachability matrix computed by repeated relaxation until a fixed point.
pub fn reachability_naive<G: Neighbors>(graph: &G) -> Vec<Vec<bool>> {
    let n = graph.vertex_count();
    let mut reach = vec![vec![false; n]; n];

    for (v, row) in reach.iter_mut().enumerate() {
        row[v] = true;
    }

    loop {
        let mut changed = false;

        for v in 0..n {
            for w in 0..n {
                if !reach[v][w] {
                    continue;
                }

                for x in graph.neighbors(w) {
                    if !reach[v][x] {
                        reach[v][x] = true;
                        changed = true;
                    }
                }
            }
        }

        if !changed {
            return reach;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("neighbors count of vertex {0} ({1}) is not equal to its degree ({2})")]
    DegreeMismatch(usize, usize, usize),
    #[error("vertex {0} has neighbor {1} which does not exist")]
    NeighborOutOfRange(usize, usize),
    #[error("edge {0} -> {1} appears {2} times but edge {1} -> {0} appears {3} times")]
    AsymmetricAdjacency(usize, usize, usize, usize),
    #[error("sum of degrees ({0}) is not equal to doubled edge count ({1})")]
    HandshakingLemma(usize, usize),
    #[error("sum of out degrees ({0}) is not equal to edge count ({1})")]
    HandshakingLemmaDirected(usize, usize),
}

pub fn check_consistency<G: Neighbors>(graph: &G) -> Result<(), ConsistencyCheckError> {
    let vertex_count = graph.vertex_count();
    let mut deg_sum = 0;
    let mut pairs = FxHashMap::<(usize, usize), usize>::default();

    for v in 0..vertex_count {
        let mut count = 0;

        for w in graph.neighbors(v) {
            if w >= vertex_count {
                return Err(ConsistencyCheckError::NeighborOutOfRange(v, w));
            }

            *pairs.entry((v, w)).or_default() += 1;
            count += 1;
        }

        let degree = graph.degree(v);
        if count != degree {
            return Err(ConsistencyCheckError::DegreeMismatch(v, count, degree));
        }

        deg_sum += degree;
    }

    let edge_count = graph.edge_count();

    // https://en.wikipedia.org/wiki/Handshaking_lemma
    if G::EdgeType::is_directed() {
        if deg_sum != edge_count {
            return Err(ConsistencyCheckError::HandshakingLemmaDirected(
                deg_sum, edge_count,
            ));
        }
    } else {
        for (&(v, w), &count) in pairs.iter() {
            let opposite = pairs.get(&(w, v)).copied().unwrap_or_default();
            if count != opposite {
                return Err(ConsistencyCheckError::AsymmetricAdjacency(
                    v, w, count, opposite,
                ));
            }
        }

        if deg_sum != 2 * edge_count {
            return Err(ConsistencyCheckError::HandshakingLemma(
                deg_sum,
                2 * edge_count,
            ));
        }
    }

    Ok(())
}
