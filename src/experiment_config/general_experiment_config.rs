use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GeneralExperimentConfig {
    /// Number of ACO iterations summed up into one statistics row.
    #[serde(default = "default_aggregation_rate")]
    pub aggregation_rate: usize,
    /// Path of the CSV file receiving ACO statistics. Nothing is written if absent.
    #[serde(default)]
    pub statistics: Option<String>,
    /// Check the cost matrix preconditions before solving.
    #[serde(default)]
    pub validate_matrix: bool,
}

fn default_aggregation_rate() -> usize {
    1
}

impl Default for GeneralExperimentConfig {
    fn default() -> Self {
        GeneralExperimentConfig {
            aggregation_rate: default_aggregation_rate(),
            statistics: None,
            validate_matrix: false,
        }
    }
}
