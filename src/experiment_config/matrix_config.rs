use crate::graph::CostMatrix;

use serde::{Deserialize, Serialize};

/// Cost matrix given inline in the config. Integer costs stay integers, so the
/// reported tour cost is exact.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum MatrixConfig {
    Integer(CostMatrix<i64>),
    Real(CostMatrix<f64>),
}

impl MatrixConfig {
    pub fn size(&self) -> usize {
        match self {
            Self::Integer(matrix) => matrix.size(),
            Self::Real(matrix) => matrix.size(),
        }
    }
}
