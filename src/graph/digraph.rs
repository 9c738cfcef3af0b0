use crate::collection::set::MapSet;
use crate::graph::edge::Edge;
use crate::graph::Vertex;

/// Immutable directed graph.
///
/// Every query returns an owned snapshot; nothing done with a returned set
/// can affect the graph.
pub trait Digraph<V: Vertex> {
    fn vertices(&self) -> MapSet<V>;

    fn edges(&self) -> MapSet<Edge<V>>;

    /// Targets of all edges leaving `vertex`. Empty for an unknown vertex.
    fn successors(&self, vertex: &V) -> MapSet<V>;

    /// Sources of all edges entering `vertex`. Empty for an unknown vertex.
    fn predecessors(&self, vertex: &V) -> MapSet<V>;
}

/// Digraph without loops and without parallel edges.
pub trait SimpleDigraph<V: Vertex>: Digraph<V> {
    /// `Some` iff the edge `(source, target)` exists.
    fn edge(&self, source: &V, target: &V) -> Option<Edge<V>>;

    fn contains_vertex(&self, vertex: &V) -> bool;

    fn num_vertices(&self) -> usize;

    fn num_edges(&self) -> usize;
}
