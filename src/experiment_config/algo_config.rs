mod aco_experiment;
mod greedy_experiment;

use serde::{Deserialize, Serialize};

use crate::experiment_config::{ExperimentConfigError, Fix};
pub use aco_experiment::{AcoExperiment, UnseededAcoExperiment};
pub use greedy_experiment::{GreedyExperiment, GreedyStrategy};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum AlgoConfig {
    Aco(AcoExperiment),
    UnseededAco(UnseededAcoExperiment),
    Greedy(GreedyExperiment),
}

impl AlgoConfig {
    pub fn aco(&self) -> Result<AcoExperiment, ExperimentConfigError> {
        match self {
            AlgoConfig::Aco(aco) => Ok(*aco),
            AlgoConfig::UnseededAco(usaco) => Ok(usaco.to_fixed()),
            _ => Err(ExperimentConfigError::NotAco),
        }
    }

    pub fn greedy(&self) -> Result<GreedyExperiment, ExperimentConfigError> {
        match self {
            AlgoConfig::Greedy(greedy) => Ok(*greedy),
            _ => Err(ExperimentConfigError::NotGreedy),
        }
    }
}
