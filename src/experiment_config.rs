mod algo_config;
mod general_experiment_config;
mod matrix_config;

pub use algo_config::{
    AcoExperiment, AlgoConfig, GreedyExperiment, GreedyStrategy, UnseededAcoExperiment,
};
pub use general_experiment_config::GeneralExperimentConfig;
pub use matrix_config::MatrixConfig;

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

pub trait Fix<CorrectType> {
    fn to_fixed(&self) -> CorrectType;
}

/// A complete experiment: general settings, the solver to use and the cost matrix.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ExperimentConfig {
    #[serde(default)]
    pub experiment: GeneralExperimentConfig,
    pub algorithm: AlgoConfig,
    pub matrix: MatrixConfig,
}

impl ExperimentConfig {
    /// Reads a config file, choosing the format by extension: `.ron` or `.yaml`/`.yml`.
    pub fn from_file(path: &Path) -> Result<Self, ExperimentConfigError> {
        let parse: fn(&str) -> Result<Self, ExperimentConfigError> =
            match path.extension().and_then(|ext| ext.to_str()) {
                Some("ron") => Self::from_ron_str,
                Some("yaml") | Some("yml") => Self::from_yaml_str,
                _ => {
                    return Err(ExperimentConfigError::UnsupportedFormat(
                        path.display().to_string(),
                    ))
                }
            };

        let content = fs::read_to_string(path).map_err(|error| {
            ExperimentConfigError::Io(format!("{}: {}", path.display(), error))
        })?;
        parse(&content)
    }

    pub fn from_ron_str(content: &str) -> Result<Self, ExperimentConfigError> {
        ron::de::from_str(content).map_err(|error| ExperimentConfigError::Parse(error.to_string()))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ExperimentConfigError> {
        serde_yaml::from_str(content)
            .map_err(|error| ExperimentConfigError::Parse(error.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExperimentConfigError {
    NotAco,
    NotGreedy,
    Io(String),
    Parse(String),
    UnsupportedFormat(String),
}

impl fmt::Display for ExperimentConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAco => write!(f, "Config is not a valid ACO config."),
            Self::NotGreedy => write!(f, "Config is not a valid greedy config."),
            Self::Io(msg) => write!(f, "Could not read config: {}", msg),
            Self::Parse(msg) => write!(f, "Could not parse config: {}", msg),
            Self::UnsupportedFormat(file) => {
                write!(f, "Config {} is neither .ron nor .yaml/.yml.", file)
            }
        }
    }
}

impl Error for ExperimentConfigError {}
