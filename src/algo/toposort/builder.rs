use tracing::debug;

use crate::{
    algo::DepthFirstSearch,
    core::{marker::Directed, Neighbors},
};

use super::{kahn::kahn, Error, TopoSort};

pub struct TopoSortBuilder<'a, G> {
    graph: &'a G,
    source: Option<usize>,
}

impl TopoSort {
    pub fn on<G>(graph: &G) -> TopoSortBuilder<'_, G>
    where
        G: Neighbors<EdgeType = Directed>,
    {
        TopoSortBuilder {
            graph,
            source: None,
        }
    }
}

impl<'a, G> TopoSortBuilder<'a, G>
where
    G: Neighbors<EdgeType = Directed>,
{
    /// Restricts the order to the vertices reachable from `source`. Cycles
    /// elsewhere in the graph are then not reported.
    pub fn from(self, source: usize) -> Self {
        Self {
            source: Some(source),
            ..self
        }
    }

    pub fn run(self) -> Result<TopoSort, Error> {
        let subset = match self.source {
            Some(source) => {
                self.graph.check_vertex(source)?;
                Some(DepthFirstSearch::search(self.graph, [source]))
            }
            None => None,
        };

        let order = kahn(self.graph, subset.as_ref());

        match &order {
            Ok(order) => debug!(
                vertex_count = self.graph.vertex_count(),
                ordered = order.len(),
                "topological order found"
            ),
            Err(error) => debug!(%error, "topological order does not exist"),
        }

        order.map(|order| TopoSort { order })
    }
}
