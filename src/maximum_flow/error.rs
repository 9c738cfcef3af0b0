use crate::graph::edge::Edge;
use crate::graph::error::GraphError;
use std::fmt::Debug;
use thiserror::Error;

/// Violated preconditions of a maximum flow computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaxFlowError<V: Debug> {
    #[error("source {0:?} is not a vertex of the network")]
    SourceNotInGraph(V),

    #[error("sink {0:?} is not a vertex of the network")]
    SinkNotInGraph(V),

    #[error("source and sink are the same vertex {0:?}")]
    SourceIsSink(V),

    #[error("no capacity given for {0:?}")]
    MissingCapacity(Edge<V>),

    #[error("no flow given for {0:?}")]
    MissingFlow(Edge<V>),

    #[error("capacity given for {0:?}, which is not an edge of the network")]
    UnknownCapacityEdge(Edge<V>),

    #[error("flow given for {0:?}, which is not an edge of the network")]
    UnknownFlowEdge(Edge<V>),

    #[error("flow on {0:?} exceeds its capacity")]
    FlowExceedsCapacity(Edge<V>),

    #[error("{0:?} is not an edge of the residual network")]
    NotResidual(Edge<V>),

    #[error("residual network is malformed: {0}")]
    Residual(GraphError<V>),
}
