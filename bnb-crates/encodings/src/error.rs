use thiserror::Error;

/// Errors which are raised when an encoding is constructed from invalid input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodingError {
    #[error("vertex {vertex} does not exist in a graph with {num_vertices} vertices")]
    VertexOutOfRange { vertex: usize, num_vertices: usize },
    #[error("the edge ({0}, {0}) is a self-loop")]
    SelfLoop(usize),
    #[error("the edge ({u}, {v}) has negative weight {weight}")]
    NegativeEdgeWeight { u: usize, v: usize, weight: f64 },
    #[error("item {index} has a negative value or weight ({value}, {weight})")]
    NegativeItem { index: usize, value: f64, weight: f64 },
    #[error("the capacity {0} is negative")]
    NegativeCapacity(f64),
    #[error("a graph with {0} vertices cannot be coloured without any colours")]
    NoColours(usize),
}
