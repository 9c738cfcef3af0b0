use crate::collection::queue::{Queue, SliceQueue};
use crate::collection::set::{MapSet, Set};
use crate::graph::digraph::Digraph;
use crate::graph::edge::Edge;
use crate::graph::Vertex;
use crate::maximum_flow::network::FlowValue;
use crate::maximum_flow::residual::ResidualNetwork;
use std::collections::HashMap;

/// Maps every vertex reached by a search to the vertex it was reached from.
pub type PredecessorMap<V> = HashMap<V, V>;

/// Breadth-first search from `source` that stops as soon as `sink` is
/// reached. The sink has no entry in the returned map iff it is not
/// reachable; otherwise following predecessors from the sink gives a
/// shortest path (by number of edges).
pub fn breadth_first_search<V, G>(digraph: &G, source: &V, sink: &V) -> PredecessorMap<V>
where
    V: Vertex,
    G: Digraph<V>,
{
    let mut que = SliceQueue::new();
    let mut visited = MapSet::new();
    let mut predecessors = PredecessorMap::new();

    que.push(source.clone());
    visited.add(source.clone());

    while let Some(u) = que.pop() {
        for v in digraph.successors(&u) {
            if visited.contains(&v) {
                continue;
            }

            predecessors.insert(v.clone(), u.clone());
            if &v == sink {
                return predecessors;
            }

            visited.add(v.clone());
            que.push(v);
        }
    }

    predecessors
}

/// All vertices reachable from `source`, `source` included.
pub fn reachable_from<V, G>(digraph: &G, source: &V) -> MapSet<V>
where
    V: Vertex,
    G: Digraph<V>,
{
    let mut que = SliceQueue::new();
    let mut visited = MapSet::new();

    que.push(source.clone());
    visited.add(source.clone());

    while let Some(u) = que.pop() {
        for v in digraph.successors(&u) {
            if !visited.contains(&v) {
                visited.add(v.clone());
                que.push(v);
            }
        }
    }

    visited
}

/// Edges of the path ending at `sink`, listed from the sink back to the
/// start of the search. Empty if `sink` was not reached.
pub fn path_to<V: Vertex>(predecessors: &PredecessorMap<V>, sink: &V) -> Vec<Edge<V>> {
    let mut path = Vec::new();
    let mut v = sink;
    while let Some(u) = predecessors.get(v) {
        path.push(Edge::new(u.clone(), v.clone()));
        v = u;
    }
    path
}

/// Bottleneck residual capacity along `path`. `Flow::max_value()` for an
/// empty path.
pub fn compute_delta<V, Flow>(path: &[Edge<V>], residual: &ResidualNetwork<V, Flow>) -> Flow
where
    V: Vertex,
    Flow: FlowValue,
{
    path.iter().fold(Flow::max_value(), |delta, edge| delta.min(residual.residual_capacity(edge.source(), edge.target())))
}
