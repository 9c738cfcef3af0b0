use crate::collection::set::{MapSet, Set};
use crate::graph::digraph::{Digraph, SimpleDigraph};
use crate::graph::edge::Edge;
use crate::graph::error::GraphError;
use crate::graph::Vertex;
use std::collections::HashMap;

/// Immutable simple digraph stored as two adjacency lists.
///
/// Both the successor and the predecessor index are built once in
/// [`AdjacencyListDigraph::new`], so neighbour and edge queries are O(1)
/// amortized. The graph is never mutated afterwards and can be shared
/// between threads.
#[derive(Debug, Clone)]
pub struct AdjacencyListDigraph<V: Vertex> {
    successors: HashMap<V, MapSet<V>>,
    predecessors: HashMap<V, MapSet<V>>,
    num_edges: usize,
}

impl<V: Vertex> AdjacencyListDigraph<V> {
    pub fn new<VI, EI>(vertices: VI, edges: EI) -> Result<Self, GraphError<V>>
    where
        VI: IntoIterator<Item = V>,
        EI: IntoIterator<Item = Edge<V>>,
    {
        let mut successors: HashMap<V, MapSet<V>> = HashMap::new();
        let mut predecessors: HashMap<V, MapSet<V>> = HashMap::new();
        for vertex in vertices {
            successors.entry(vertex.clone()).or_default();
            predecessors.entry(vertex).or_default();
        }

        let mut num_edges = 0;
        for edge in edges {
            if edge.is_loop() {
                return Err(GraphError::SelfLoop(edge));
            }

            if !successors.contains_key(edge.source()) || !successors.contains_key(edge.target()) {
                return Err(GraphError::UnknownVertex(edge));
            }

            let (u, v) = edge.into_parts();
            if let Some(targets) = successors.get_mut(&u) {
                // same (source, target) pair given twice
                if targets.contains(&v) {
                    continue;
                }
                targets.add(v.clone());
            }
            if let Some(sources) = predecessors.get_mut(&v) {
                sources.add(u);
            }
            num_edges += 1;
        }

        Ok(Self { successors, predecessors, num_edges })
    }

    fn neighbors(index: &HashMap<V, MapSet<V>>, vertex: &V) -> MapSet<V> {
        index.get(vertex).cloned().unwrap_or_default()
    }
}

impl<V: Vertex> Digraph<V> for AdjacencyListDigraph<V> {
    fn vertices(&self) -> MapSet<V> {
        self.successors.keys().cloned().collect()
    }

    fn edges(&self) -> MapSet<Edge<V>> {
        self.successors.iter().flat_map(|(u, targets)| targets.iter().map(move |v| Edge::new(u.clone(), v.clone()))).collect()
    }

    fn successors(&self, vertex: &V) -> MapSet<V> {
        Self::neighbors(&self.successors, vertex)
    }

    fn predecessors(&self, vertex: &V) -> MapSet<V> {
        Self::neighbors(&self.predecessors, vertex)
    }
}

impl<V: Vertex> SimpleDigraph<V> for AdjacencyListDigraph<V> {
    fn edge(&self, source: &V, target: &V) -> Option<Edge<V>> {
        self.successors
            .get(source)
            .filter(|targets| targets.contains(target))
            .map(|_| Edge::new(source.clone(), target.clone()))
    }

    #[inline]
    fn contains_vertex(&self, vertex: &V) -> bool {
        self.successors.contains_key(vertex)
    }

    #[inline]
    fn num_vertices(&self) -> usize {
        self.successors.len()
    }

    #[inline]
    fn num_edges(&self) -> usize {
        self.num_edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn triangle() -> AdjacencyListDigraph<&'static str> {
        let edges = [Edge::new("a", "b"), Edge::new("b", "c"), Edge::new("c", "a"), Edge::new("a", "c")];
        AdjacencyListDigraph::new(["a", "b", "c", "d"], edges).unwrap()
    }

    #[test]
    fn empty_graph() {
        let graph = AdjacencyListDigraph::<u32>::new([], []).unwrap();
        assert!(graph.vertices().is_empty());
        assert!(graph.edges().is_empty());
        assert_eq!(graph.num_vertices(), 0);
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn self_loop_is_rejected() {
        let result = AdjacencyListDigraph::new([1, 2], [Edge::new(1, 2), Edge::new(2, 2)]);
        assert_eq!(result.unwrap_err(), GraphError::SelfLoop(Edge::new(2, 2)));
    }

    #[rstest]
    #[case(Edge::new(1, 3))]
    #[case(Edge::new(3, 1))]
    #[case(Edge::new(3, 4))]
    fn edge_with_unknown_vertex_is_rejected(#[case] edge: Edge<i32>) {
        let result = AdjacencyListDigraph::new([1, 2], [Edge::new(1, 2), edge]);
        assert_eq!(result.unwrap_err(), GraphError::UnknownVertex(edge));
    }

    #[test]
    fn duplicate_edges_are_merged() {
        let graph = AdjacencyListDigraph::new([1, 2], [Edge::new(1, 2), Edge::new(1, 2)]).unwrap();
        assert_eq!(graph.num_edges(), 1);
        assert_eq!(graph.edges().size(), 1);
    }

    #[rstest]
    fn sizes(triangle: AdjacencyListDigraph<&'static str>) {
        assert_eq!(triangle.num_vertices(), 4);
        assert_eq!(triangle.num_edges(), 4);
        assert_eq!(triangle.vertices(), MapSet::from(["a", "b", "c", "d"]));
        assert_eq!(triangle.edges(), MapSet::from([Edge::new("a", "b"), Edge::new("b", "c"), Edge::new("c", "a"), Edge::new("a", "c")]));
    }

    #[rstest]
    #[case("a", MapSet::from(["b", "c"]), MapSet::from(["c"]))]
    #[case("b", MapSet::from(["c"]), MapSet::from(["a"]))]
    #[case("c", MapSet::from(["a"]), MapSet::from(["a", "b"]))]
    #[case("d", MapSet::new(), MapSet::new())]
    #[case("z", MapSet::new(), MapSet::new())]
    fn neighbors(
        triangle: AdjacencyListDigraph<&'static str>,
        #[case] vertex: &'static str,
        #[case] successors: MapSet<&'static str>,
        #[case] predecessors: MapSet<&'static str>,
    ) {
        assert_eq!(triangle.successors(&vertex), successors);
        assert_eq!(triangle.predecessors(&vertex), predecessors);
    }

    #[rstest]
    #[case("a", "b", true)]
    #[case("b", "a", false)]
    #[case("a", "c", true)]
    #[case("c", "a", true)]
    #[case("a", "a", false)]
    #[case("a", "d", false)]
    #[case("z", "a", false)]
    fn edge_lookup(triangle: AdjacencyListDigraph<&'static str>, #[case] u: &'static str, #[case] v: &'static str, #[case] present: bool) {
        assert_eq!(triangle.edge(&u, &v), present.then(|| Edge::new(u, v)));
    }

    #[rstest]
    fn snapshots_do_not_alias(triangle: AdjacencyListDigraph<&'static str>) {
        let mut vertices = triangle.vertices();
        vertices.add("x");
        let mut successors = triangle.successors(&"a");
        successors.add("d");

        assert!(!triangle.contains_vertex(&"x"));
        assert_eq!(triangle.edge(&"a", &"d"), None);
    }
}
