pub mod augmenting_path;
pub mod edmonds_karp;
pub mod error;
pub mod network;
pub mod residual;

use crate::graph::digraph::SimpleDigraph;
use crate::graph::Vertex;
use crate::maximum_flow::error::MaxFlowError;
use crate::maximum_flow::network::{FlowMap, FlowNetwork, FlowValue};

/// https://en.wikipedia.org/wiki/Maximum_flow_problem
///
/// Implementations never mutate the network.
pub trait MaxFlowAlgorithm<V: Vertex, Flow: FlowValue> {
    /// Maximum flow of `network`, reached by augmenting `network.flow`.
    ///
    /// If the sink cannot be reached from the source in the residual
    /// network, the returned flow equals `network.flow`.
    fn compute_max_flow<G>(&self, network: &FlowNetwork<V, Flow, G>) -> Result<FlowMap<V, Flow>, MaxFlowError<V>>
    where
        G: SimpleDigraph<V>;
}
