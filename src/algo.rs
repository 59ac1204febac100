//! Analyses computed over a borrowed graph.
//!
//! Every algorithm follows the same shape: `Algorithm::on(&graph)` returns a
//! builder, the builder is optionally configured and finally executed by
//! `run`. The result is an immutable value owning everything it needs. It does
//! not borrow the graph, so it stays valid (as a snapshot) after the graph is
//! mutated.
//!
//! | algorithm                        | graphs               | complexity      |
//! |----------------------------------|----------------------|-----------------|
//! | [`DepthFirstSearch`]             | any                  | _O(V + E)_      |
//! | [`BreadthFirstPaths`]            | any                  | _O(V + E)_      |
//! | [`ConnectedComponents`]          | any                  | _O(V + E)_      |
//! | [`Bipartite`]                    | any                  | _O(V + E)_      |
//! | [`Degrees`]                      | directed             | _O(V + E)_      |
//! | [`TopoSort`]                     | directed             | _O(V + E)_      |
//! | [`AcyclicShortestPaths`]         | weighted, directed   | _O(V + E)_      |
//! | [`TransitiveClosure`]            | directed             | _O(V (V + E))_  |
//! | [`GraphProperties`]              | any                  | _O(V (V + E))_  |

use crate::core::error::VertexOutOfRange;

pub mod acyclic_shortest_paths;
pub mod bipartite;
pub mod breadth_first_paths;
pub mod connected_components;
pub mod degrees;
pub mod depth_first_search;
pub mod properties;
pub mod toposort;
pub mod transitive_closure;

pub use acyclic_shortest_paths::AcyclicShortestPaths;
pub use bipartite::{is_bipartite, Bipartite};
pub use breadth_first_paths::BreadthFirstPaths;
pub use connected_components::ConnectedComponents;
pub use degrees::Degrees;
pub use depth_first_search::{is_reachable, DepthFirstSearch};
pub use properties::GraphProperties;
pub use toposort::{topological_order, TopoSort};
pub use transitive_closure::TransitiveClosure;

fn assert_vertex(vertex: usize, vertex_count: usize) {
    if let Err(error) = VertexOutOfRange::check(vertex, vertex_count) {
        panic!("{error}");
    }
}
