use crate::graph::Edge;

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    MissingNode(usize),
    MissingEdge(Edge),
    Empty,
    NotSquare { row: usize, len: usize, size: usize },
    NegativeWeight(Edge),
    NonZeroDiagonal(usize),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingNode(id) => write!(f, "City {} is not in the cost matrix.", id),
            Self::MissingEdge((from, to)) => {
                write!(f, "No cost is defined from city {} to city {}.", from, to)
            }
            Self::Empty => write!(f, "The cost matrix has no cities."),
            Self::NotSquare { row, len, size } => write!(
                f,
                "Row {} has {} entries, but the matrix has {} cities.",
                row, len, size
            ),
            Self::NegativeWeight((from, to)) => {
                write!(f, "The cost from city {} to city {} is negative.", from, to)
            }
            Self::NonZeroDiagonal(id) => {
                write!(f, "The cost from city {} to itself is not zero.", id)
            }
        }
    }
}

impl Error for GraphError {}
