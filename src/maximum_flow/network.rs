use crate::collection::set::{MapSet, Set};
use crate::graph::adjacency_list::AdjacencyListDigraph;
use crate::graph::digraph::{Digraph, SimpleDigraph};
use crate::graph::edge::Edge;
use crate::graph::Vertex;
use crate::maximum_flow::augmenting_path::reachable_from;
use crate::maximum_flow::error::MaxFlowError;
use crate::maximum_flow::residual::{ResidualNetwork, ResidualScan};
use num_traits::{NumAssign, PrimInt, Unsigned};
use std::collections::HashMap;
use std::fmt::Debug;

/// Unsigned bounded integer usable as capacity and flow.
pub trait FlowValue: PrimInt + Unsigned + NumAssign + Debug {}

impl<T> FlowValue for T where T: PrimInt + Unsigned + NumAssign + Debug {}

pub type CapacityMap<V, Flow> = HashMap<Edge<V>, Flow>;

pub type FlowMap<V, Flow> = HashMap<Edge<V>, Flow>;

#[inline]
pub(crate) fn amount<V: Vertex, Flow: FlowValue>(map: &HashMap<Edge<V>, Flow>, edge: &Edge<V>) -> Flow {
    map.get(edge).copied().unwrap_or_else(Flow::zero)
}

/// https://en.wikipedia.org/wiki/Flow_network
///
/// `capacity` and `flow` must have an entry for every edge of `digraph`
/// and `0 <= flow <= capacity` must hold on every edge. Conservation is
/// not required. See [`FlowNetwork::validate`].
#[derive(Debug, Clone)]
pub struct FlowNetwork<V: Vertex, Flow, G = AdjacencyListDigraph<V>> {
    pub digraph: G,
    pub source: V,
    pub sink: V,
    pub capacity: CapacityMap<V, Flow>,
    pub flow: FlowMap<V, Flow>,
}

impl<V, Flow, G> FlowNetwork<V, Flow, G>
where
    V: Vertex,
    Flow: FlowValue,
    G: SimpleDigraph<V>,
{
    pub fn new(digraph: G, source: V, sink: V, capacity: CapacityMap<V, Flow>, flow: FlowMap<V, Flow>) -> Self {
        Self { digraph, source, sink, capacity, flow }
    }

    pub fn with_zero_flow(digraph: G, source: V, sink: V, capacity: CapacityMap<V, Flow>) -> Self {
        let flow = digraph.edges().into_iter().map(|edge| (edge, Flow::zero())).collect();
        Self { digraph, source, sink, capacity, flow }
    }

    pub fn validate(&self) -> Result<(), MaxFlowError<V>> {
        if !self.digraph.contains_vertex(&self.source) {
            return Err(MaxFlowError::SourceNotInGraph(self.source.clone()));
        }
        if !self.digraph.contains_vertex(&self.sink) {
            return Err(MaxFlowError::SinkNotInGraph(self.sink.clone()));
        }
        if self.source == self.sink {
            return Err(MaxFlowError::SourceIsSink(self.source.clone()));
        }

        for edge in self.digraph.edges() {
            let Some(&upper) = self.capacity.get(&edge) else {
                return Err(MaxFlowError::MissingCapacity(edge));
            };
            let Some(&flow) = self.flow.get(&edge) else {
                return Err(MaxFlowError::MissingFlow(edge));
            };
            if flow > upper {
                return Err(MaxFlowError::FlowExceedsCapacity(edge));
            }
        }

        let is_known = |edge: &Edge<V>| self.digraph.edge(edge.source(), edge.target()).is_some();
        if let Some(edge) = self.capacity.keys().find(|edge| !is_known(edge)) {
            return Err(MaxFlowError::UnknownCapacityEdge(edge.clone()));
        }
        if let Some(edge) = self.flow.keys().find(|edge| !is_known(edge)) {
            return Err(MaxFlowError::UnknownFlowEdge(edge.clone()));
        }

        Ok(())
    }

    #[inline]
    pub fn capacity_of(&self, edge: &Edge<V>) -> Flow {
        amount(&self.capacity, edge)
    }

    /// Flow leaving the source minus flow entering it, `None` if more flow
    /// enters the source than leaves it.
    pub fn flow_value(&self, flow: &FlowMap<V, Flow>) -> Option<Flow> {
        let s = &self.source;
        let outflow = self.digraph.successors(s).iter().fold(Flow::zero(), |sum, v| sum + amount(flow, &Edge::new(s.clone(), v.clone())));
        let inflow = self.digraph.predecessors(s).iter().fold(Flow::zero(), |sum, u| sum + amount(flow, &Edge::new(u.clone(), s.clone())));
        outflow.checked_sub(&inflow)
    }

    /// Source side of a cut: every vertex reachable from the source in the
    /// residual network of `flow`. The sink is never on this side when
    /// `flow` admits no augmenting path. If `flow` is also conserved at every
    /// vertex other than source and sink, this is a minimum cut and its
    /// capacity equals the flow value.
    pub fn minimum_cut(&self, flow: &FlowMap<V, Flow>) -> Result<MapSet<V>, MaxFlowError<V>> {
        let residual = ResidualNetwork::build(self, flow, ResidualScan::Edges)?;
        Ok(reachable_from(residual.digraph(), &self.source))
    }

    /// Total capacity of the edges leaving `side`.
    pub fn cut_capacity(&self, side: &MapSet<V>) -> Flow {
        side.iter().fold(Flow::zero(), |sum, u| {
            self.digraph.successors(u).iter().filter(|v| !side.contains(v)).fold(sum, |sum, v| sum + self.capacity_of(&Edge::new(u.clone(), v.clone())))
        })
    }
}
