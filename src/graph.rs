mod cost_matrix;
mod error;

pub use cost_matrix::CostMatrix;
pub use error::GraphError;

/// A directed edge between two city indices in the form (from, to).
pub type Edge = (usize, usize);
