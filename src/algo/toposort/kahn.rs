use crate::{algo::DepthFirstSearch, core::Neighbors};

use super::Error;

/// Orders the vertices of `subset`, or all vertices if there is no subset.
/// The subset must be closed under successors.
pub fn kahn<G>(graph: &G, subset: Option<&DepthFirstSearch>) -> Result<Vec<usize>, Error>
where
    G: Neighbors,
{
    let vertex_count = graph.vertex_count();
    let included = |v: usize| subset.map_or(true, |subset| subset.is_reachable(v));
    let expected = subset.map_or(vertex_count, DepthFirstSearch::count);

    let mut in_deg = vec![0usize; vertex_count];
    for v in (0..vertex_count).filter(|&v| included(v)) {
        for w in graph.neighbors(v) {
            in_deg[w] += 1;
        }
    }

    // Does not need to be FIFO as the order of reported vertices with in degree
    // 0 does not matter.
    let mut queue = (0..vertex_count)
        .rev()
        .filter(|&v| included(v) && in_deg[v] == 0)
        .collect::<Vec<_>>();
    let mut order = Vec::with_capacity(expected);

    while let Some(v) = queue.pop() {
        order.push(v);

        for w in graph.neighbors(v) {
            in_deg[w] -= 1;
            if in_deg[w] == 0 {
                queue.push(w);
            }
        }
    }

    if order.len() == expected {
        Ok(order)
    } else {
        Err(Error::Cycle {
            vertex: find_cycle_vertex(graph, &in_deg, included),
        })
    }
}

// Every vertex left with a nonzero in degree has a predecessor that is also
// left. Following such predecessors long enough must enter a cycle.
fn find_cycle_vertex<G, F>(graph: &G, in_deg: &[usize], included: F) -> usize
where
    G: Neighbors,
    F: Fn(usize) -> bool,
{
    let vertex_count = graph.vertex_count();
    let left = |v: usize| included(v) && in_deg[v] > 0;

    let mut pred = vec![usize::MAX; vertex_count];
    let mut start = usize::MAX;
    let mut left_count = 0;

    for v in (0..vertex_count).filter(|&v| left(v)) {
        start = start.min(v);
        left_count += 1;

        for w in graph.neighbors(v) {
            if left(w) {
                pred[w] = v;
            }
        }
    }

    let mut vertex = start;
    for _ in 0..left_count {
        vertex = pred[vertex];
    }

    vertex
}
