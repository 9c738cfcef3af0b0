use crate::graph::digraph::SimpleDigraph;
use crate::graph::edge::Edge;
use crate::graph::Vertex;
use crate::maximum_flow::augmenting_path::{breadth_first_search, compute_delta, path_to};
use crate::maximum_flow::error::MaxFlowError;
use crate::maximum_flow::network::{amount, FlowMap, FlowNetwork, FlowValue};
use crate::maximum_flow::residual::{ResidualArc, ResidualNetwork, ResidualScan};
use crate::maximum_flow::MaxFlowAlgorithm;
use log::{debug, trace};

/// Edmonds-Karp: augment along shortest paths of the residual network until
/// the sink is unreachable.
///
/// https://en.wikipedia.org/wiki/Edmonds-Karp_algorithm
///
/// The solver holds only configuration, so one instance can serve any
/// number of computations, also from several threads.
#[derive(Default, PartialEq, Eq, Debug, Clone, Copy)]
pub struct EdmondsKarp {
    scan: ResidualScan,
}

impl EdmondsKarp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn residual_scan(mut self, scan: ResidualScan) -> Self {
        self.scan = scan;
        self
    }

    /// Pushes `delta` along `path` in the original network. A residual edge
    /// that merges forward capacity with cancellable reverse flow first
    /// fills the forward edge and cancels the rest on the reverse edge.
    ///
    /// Fails on the first edge of `path` that is not an edge of the
    /// residual network of `flow`; edges before it are already augmented.
    fn augment<V, Flow, G>(network: &FlowNetwork<V, Flow, G>, flow: &mut FlowMap<V, Flow>, path: &[Edge<V>], delta: Flow) -> Result<(), MaxFlowError<V>>
    where
        V: Vertex,
        Flow: FlowValue,
        G: SimpleDigraph<V>,
    {
        for edge in path {
            match ResidualArc::classify(network, flow, edge.source(), edge.target()) {
                Some(ResidualArc::Forward(uv)) => increase(flow, uv, delta),
                Some(ResidualArc::Cancel(vu)) => decrease(flow, vu, delta),
                Some(ResidualArc::Merged { forward: uv, backward: vu }) => {
                    let slack = network.capacity_of(&uv) - amount(flow, &uv);
                    if delta > slack {
                        decrease(flow, vu, delta - slack);
                        increase(flow, uv, slack);
                    } else {
                        increase(flow, uv, delta);
                    }
                }
                None => return Err(MaxFlowError::NotResidual(edge.clone())),
            }
        }
        Ok(())
    }
}

#[inline]
fn increase<V: Vertex, Flow: FlowValue>(flow: &mut FlowMap<V, Flow>, edge: Edge<V>, delta: Flow) {
    *flow.entry(edge).or_insert_with(Flow::zero) += delta;
}

#[inline]
fn decrease<V: Vertex, Flow: FlowValue>(flow: &mut FlowMap<V, Flow>, edge: Edge<V>, delta: Flow) {
    *flow.entry(edge).or_insert_with(Flow::zero) -= delta;
}

impl<V, Flow> MaxFlowAlgorithm<V, Flow> for EdmondsKarp
where
    V: Vertex,
    Flow: FlowValue,
{
    fn compute_max_flow<G>(&self, network: &FlowNetwork<V, Flow, G>) -> Result<FlowMap<V, Flow>, MaxFlowError<V>>
    where
        G: SimpleDigraph<V>,
    {
        network.validate()?;
        debug!(
            "edmonds-karp: {} vertices, {} edges, source {:?}, sink {:?}, {:?} residual scan",
            network.digraph.num_vertices(),
            network.digraph.num_edges(),
            network.source,
            network.sink,
            self.scan
        );

        let mut flow = network.flow.clone();
        let mut augmentations = 0usize;
        loop {
            let residual = ResidualNetwork::build(network, &flow, self.scan)?;
            let predecessors = breadth_first_search(residual.digraph(), &network.source, &network.sink);
            if !predecessors.contains_key(&network.sink) {
                break;
            }

            let path = path_to(&predecessors, &network.sink);
            let delta = compute_delta(&path, &residual);
            trace!("augmenting path of {} edges, delta {:?}", path.len(), delta);

            Self::augment(network, &mut flow, &path, delta)?;
            augmentations += 1;
        }

        debug!("edmonds-karp: no augmenting path left after {} augmentations", augmentations);
        Ok(flow)
    }
}
