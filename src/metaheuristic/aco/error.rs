use crate::graph::GraphError;

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum AcoError {
    Graph(GraphError),
    /// No unvisited city was left to choose while the tour was still incomplete.
    SelectionExhausted { from: usize },
    /// The colony finished without constructing a single tour.
    NoSolution,
    InvalidParams(String),
}

impl fmt::Display for AcoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Graph(error) => write!(f, "{}", error),
            Self::SelectionExhausted { from } => write!(
                f,
                "Could not select a next city from city {}, none is left unvisited.",
                from
            ),
            Self::NoSolution => write!(f, "No ant has constructed a tour."),
            Self::InvalidParams(msg) => write!(f, "Invalid ACO parameters: {}.", msg),
        }
    }
}

impl Error for AcoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Graph(error) => Some(error),
            _ => None,
        }
    }
}

impl From<GraphError> for AcoError {
    fn from(error: GraphError) -> Self {
        AcoError::Graph(error)
    }
}
