pub mod adjacency_list;
pub mod digraph;
pub mod edge;
pub mod error;

use std::fmt::Debug;
use std::hash::Hash;

/// Anything comparable and hashable can be a vertex.
pub trait Vertex: Eq + Hash + Clone + Debug {}

impl<T> Vertex for T where T: Eq + Hash + Clone + Debug {}
