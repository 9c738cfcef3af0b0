use crate::graph::edge::Edge;
use std::fmt::Debug;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError<V: Debug> {
    #[error("loop edges are not allowed ({0:?})")]
    SelfLoop(Edge<V>),

    #[error("source or target vertex of {0:?} is not present in vertices")]
    UnknownVertex(Edge<V>),
}
