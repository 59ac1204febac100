use tracing::debug;

use crate::core::{marker::Directed, WeightedNeighbors};

use super::{AcyclicShortestPaths, Error, TopoSort};

pub struct AcyclicShortestPathsBuilder<'a, G> {
    graph: &'a G,
    order: Option<Vec<usize>>,
}

impl AcyclicShortestPaths {
    pub fn on<G>(graph: &G) -> AcyclicShortestPathsBuilder<'_, G>
    where
        G: WeightedNeighbors<EdgeType = Directed>,
    {
        AcyclicShortestPathsBuilder { graph, order: None }
    }
}

impl<'a, G> AcyclicShortestPathsBuilder<'a, G>
where
    G: WeightedNeighbors<EdgeType = Directed>,
{
    /// Uses the given vertex order instead of computing a topological one.
    ///
    /// The order is not validated beyond the existence of its vertices.
    /// Vertices missing in the order are never relaxed.
    pub fn order<I>(self, order: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self {
            order: Some(order.into_iter().collect()),
            ..self
        }
    }

    pub fn run(self, source: usize) -> Result<AcyclicShortestPaths, Error> {
        let graph = self.graph;
        graph.check_vertex(source).map_err(Error::SourceAbsent)?;

        let order = match self.order {
            Some(order) => {
                for &vertex in order.iter() {
                    graph.check_vertex(vertex).map_err(Error::OrderVertexAbsent)?;
                }
                order
            }
            None => TopoSort::on(graph).from(source).run()?.into_vec(),
        };

        let vertex_count = graph.vertex_count();
        let mut dist_to = vec![f64::INFINITY; vertex_count];
        let mut edge_to = vec![None; vertex_count];
        dist_to[source] = 0.0;

        for v in order {
            for edge in graph.edges(v) {
                let w = edge.to();
                let dist = dist_to[v] + edge.weight();

                if dist < dist_to[w] {
                    dist_to[w] = dist;
                    edge_to[w] = Some(*edge);
                }
            }
        }

        debug!(
            vertex_count,
            source,
            reachable = dist_to.iter().filter(|dist| dist.is_finite()).count(),
            "acyclic shortest paths computed"
        );

        Ok(AcyclicShortestPaths {
            source,
            dist_to,
            edge_to,
        })
    }
}
