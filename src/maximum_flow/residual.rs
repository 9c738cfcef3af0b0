use crate::collection::set::{MapSet, Set};
use crate::graph::adjacency_list::AdjacencyListDigraph;
use crate::graph::digraph::{Digraph, SimpleDigraph};
use crate::graph::edge::Edge;
use crate::graph::Vertex;
use crate::maximum_flow::error::MaxFlowError;
use crate::maximum_flow::network::{amount, CapacityMap, FlowMap, FlowNetwork, FlowValue};

/// Which ordered vertex pairs are examined when the residual network is
/// built. Both variants produce the same residual network.
#[derive(Default, PartialEq, Eq, Debug, Clone, Copy)]
pub enum ResidualScan {
    /// Every ordered pair of distinct vertices, O(V^2).
    #[default]
    AllPairs,
    /// Only pairs joined by an edge in either direction, O(E).
    Edges,
}

/// How the ordered pair (u, v) shows up in the residual network.
#[derive(PartialEq, Eq, Debug, Clone)]
pub(crate) enum ResidualArc<V> {
    /// uv is not saturated, vu is absent or carries no flow.
    Forward(Edge<V>),
    /// vu carries flow, uv is absent or saturated.
    Cancel(Edge<V>),
    /// Both of the above; the residual capacity is the sum, saturating at
    /// `Flow::max_value()`.
    Merged { forward: Edge<V>, backward: Edge<V> },
}

impl<V: Vertex> ResidualArc<V> {
    pub(crate) fn classify<Flow, G>(network: &FlowNetwork<V, Flow, G>, flow: &FlowMap<V, Flow>, u: &V, v: &V) -> Option<Self>
    where
        Flow: FlowValue,
        G: SimpleDigraph<V>,
    {
        let uv = network.digraph.edge(u, v).filter(|uv| amount(flow, uv) < network.capacity_of(uv));
        let vu = network.digraph.edge(v, u).filter(|vu| amount(flow, vu) > Flow::zero());

        match (uv, vu) {
            (Some(forward), Some(backward)) => Some(ResidualArc::Merged { forward, backward }),
            (Some(forward), None) => Some(ResidualArc::Forward(forward)),
            (None, Some(backward)) => Some(ResidualArc::Cancel(backward)),
            (None, None) => None,
        }
    }

    pub(crate) fn residual_capacity<Flow, G>(&self, network: &FlowNetwork<V, Flow, G>, flow: &FlowMap<V, Flow>) -> Flow
    where
        Flow: FlowValue,
        G: SimpleDigraph<V>,
    {
        let forward = |uv: &Edge<V>| network.capacity_of(uv) - amount(flow, uv);
        match self {
            ResidualArc::Forward(uv) => forward(uv),
            ResidualArc::Cancel(vu) => amount(flow, vu),
            ResidualArc::Merged { forward: uv, backward: vu } => forward(uv).saturating_add(amount(flow, vu)),
        }
    }
}

/// Residual network of a flow network under some flow. Vertices are those
/// of the original network.
#[derive(Debug, Clone)]
pub struct ResidualNetwork<V: Vertex, Flow> {
    digraph: AdjacencyListDigraph<V>,
    capacity: CapacityMap<V, Flow>,
}

impl<V, Flow> ResidualNetwork<V, Flow>
where
    V: Vertex,
    Flow: FlowValue,
{
    pub fn build<G>(network: &FlowNetwork<V, Flow, G>, flow: &FlowMap<V, Flow>, scan: ResidualScan) -> Result<Self, MaxFlowError<V>>
    where
        G: SimpleDigraph<V>,
    {
        let vertices = network.digraph.vertices();
        let mut capacity = CapacityMap::new();

        for (u, v) in Self::pairs(network, &vertices, scan) {
            if let Some(arc) = ResidualArc::classify(network, flow, &u, &v) {
                capacity.insert(Edge::new(u, v), arc.residual_capacity(network, flow));
            }
        }

        let digraph = AdjacencyListDigraph::new(vertices, capacity.keys().cloned()).map_err(MaxFlowError::Residual)?;
        Ok(Self { digraph, capacity })
    }

    fn pairs<G>(network: &FlowNetwork<V, Flow, G>, vertices: &MapSet<V>, scan: ResidualScan) -> Vec<(V, V)>
    where
        G: SimpleDigraph<V>,
    {
        match scan {
            ResidualScan::AllPairs => {
                let vertices = vertices.elements();
                let mut pairs = Vec::with_capacity(vertices.len() * vertices.len());
                for (i, u) in vertices.iter().enumerate() {
                    for (j, v) in vertices.iter().enumerate() {
                        // no loops in a simple network
                        if i != j {
                            pairs.push((u.clone(), v.clone()));
                        }
                    }
                }
                pairs
            }
            ResidualScan::Edges => {
                let mut pairs = MapSet::with_capacity(2 * network.digraph.num_edges());
                for edge in network.digraph.edges() {
                    pairs.add(edge.reversed());
                    pairs.add(edge);
                }
                pairs.into_iter().map(Edge::into_parts).collect()
            }
        }
    }

    #[inline]
    pub fn digraph(&self) -> &AdjacencyListDigraph<V> {
        &self.digraph
    }

    #[inline]
    pub fn capacity(&self) -> &CapacityMap<V, Flow> {
        &self.capacity
    }

    /// Zero if there is no residual edge (u, v).
    #[inline]
    pub fn residual_capacity(&self, u: &V, v: &V) -> Flow {
        amount(&self.capacity, &Edge::new(u.clone(), v.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    type Network = FlowNetwork<char, u32>;

    // a <-> b with flow in both directions, b -> a and b -> c saturated
    #[fixture]
    fn network() -> Network {
        let (ab, ba, bc) = (Edge::new('a', 'b'), Edge::new('b', 'a'), Edge::new('b', 'c'));
        let digraph = AdjacencyListDigraph::new(['a', 'b', 'c'], [ab, ba, bc]).unwrap();
        let capacity = CapacityMap::from([(ab, 5), (ba, 2), (bc, 3)]);
        let flow = FlowMap::from([(ab, 1), (ba, 2), (bc, 3)]);
        FlowNetwork::new(digraph, 'a', 'c', capacity, flow)
    }

    #[rstest]
    #[case('a', 'b', Some(ResidualArc::Merged { forward: Edge::new('a', 'b'), backward: Edge::new('b', 'a') }))]
    #[case('b', 'a', Some(ResidualArc::Cancel(Edge::new('a', 'b'))))]
    #[case('b', 'c', None)]
    #[case('c', 'b', Some(ResidualArc::Cancel(Edge::new('b', 'c'))))]
    #[case('a', 'c', None)]
    fn classify(network: Network, #[case] u: char, #[case] v: char, #[case] expected: Option<ResidualArc<char>>) {
        assert_eq!(ResidualArc::classify(&network, &network.flow, &u, &v), expected);
    }

    #[rstest]
    fn forward_only_and_saturated_pairs(mut network: Network) {
        network.flow.insert(Edge::new('a', 'b'), 0);
        network.flow.insert(Edge::new('b', 'a'), 0);
        assert_eq!(ResidualArc::classify(&network, &network.flow, &'a', &'b'), Some(ResidualArc::Forward(Edge::new('a', 'b'))));
        assert_eq!(ResidualArc::classify(&network, &network.flow, &'b', &'a'), Some(ResidualArc::Forward(Edge::new('b', 'a'))));

        network.flow.insert(Edge::new('a', 'b'), 5);
        assert_eq!(ResidualArc::classify(&network, &network.flow, &'a', &'b'), None);
        assert_eq!(ResidualArc::classify(&network, &network.flow, &'b', &'a'), Some(ResidualArc::Merged { forward: Edge::new('b', 'a'), backward: Edge::new('a', 'b') }));
    }

    #[rstest]
    #[case(ResidualScan::AllPairs)]
    #[case(ResidualScan::Edges)]
    fn merged_capacities(network: Network, #[case] scan: ResidualScan) {
        let residual = ResidualNetwork::build(&network, &network.flow, scan).unwrap();

        // a -> b merges 5 - 1 with 2, the other two only cancel
        let expected = CapacityMap::from([(Edge::new('a', 'b'), 6), (Edge::new('b', 'a'), 1), (Edge::new('c', 'b'), 3)]);
        assert_eq!(residual.capacity(), &expected);
        assert_eq!(residual.digraph().num_edges(), 3);
        assert_eq!(residual.digraph().vertices(), network.digraph.vertices());
        assert_eq!(residual.residual_capacity(&'a', &'b'), 6);
        assert_eq!(residual.residual_capacity(&'b', &'c'), 0);
    }

    #[test]
    fn merged_capacity_saturates() {
        let (ab, ba) = (Edge::new(0u8, 1u8), Edge::new(1u8, 0u8));
        let digraph = AdjacencyListDigraph::new([0, 1], [ab, ba]).unwrap();
        let capacity = CapacityMap::from([(ab, u8::MAX), (ba, 5)]);
        let flow = FlowMap::from([(ab, 0), (ba, 5)]);
        let network = FlowNetwork::new(digraph, 0, 1, capacity, flow);

        let residual = ResidualNetwork::build(&network, &network.flow, ResidualScan::AllPairs).unwrap();
        assert_eq!(residual.residual_capacity(&0, &1), u8::MAX);
        assert_eq!(residual.residual_capacity(&1, &0), 0);
    }
}
