//! Maximum flow on simple directed graphs with the Edmonds-Karp algorithm.
//!
//! ```
//! use network_flow::graph::adjacency_list::AdjacencyListDigraph;
//! use network_flow::graph::edge::Edge;
//! use network_flow::maximum_flow::edmonds_karp::EdmondsKarp;
//! use network_flow::maximum_flow::network::{CapacityMap, FlowNetwork};
//! use network_flow::maximum_flow::MaxFlowAlgorithm;
//!
//! let (sa, ab, bt) = (Edge::new('s', 'a'), Edge::new('a', 'b'), Edge::new('b', 't'));
//! let digraph = AdjacencyListDigraph::new(['s', 'a', 'b', 't'], [sa, ab, bt]).unwrap();
//! let capacity = CapacityMap::from([(sa, 4u32), (ab, 2), (bt, 3)]);
//! let network = FlowNetwork::with_zero_flow(digraph, 's', 't', capacity);
//!
//! let flow = EdmondsKarp::default().compute_max_flow(&network).unwrap();
//! assert_eq!(network.flow_value(&flow), Some(2));
//! ```

pub mod collection;
pub mod graph;
pub mod maximum_flow;
