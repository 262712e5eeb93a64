use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Deserialize, Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GreedyStrategy {
    NearestNeighbor,
}

#[derive(Copy, Clone, Deserialize, Serialize, Debug, PartialEq, Eq)]
pub struct GreedyExperiment {
    pub strategy: GreedyStrategy,
}
