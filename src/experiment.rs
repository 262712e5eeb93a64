use csv::Writer;
use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::io::{Sink, Write};

use crate::experiment_config::{
    AcoExperiment, AlgoConfig, ExperimentConfig, ExperimentConfigError, Fix, GreedyStrategy,
    MatrixConfig,
};
use crate::graph::{CostMatrix, GraphError};
use crate::metaheuristic::aco::{AcoError, Params, Supervisor};
use crate::metaheuristic::{Aco, Greedy, Metaheuristic, Solution, SolutionError, Tour};
use crate::util::Weight;

#[derive(Debug)]
pub enum ExperimentError {
    Config(ExperimentConfigError),
    Graph(GraphError),
    Solution(SolutionError),
    Aco(AcoError),
    Io(String),
}

impl fmt::Display for ExperimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(error) => write!(f, "{}", error),
            Self::Graph(error) => write!(f, "{}", error),
            Self::Solution(error) => write!(f, "Solver returned an invalid tour: {}", error),
            Self::Aco(error) => write!(f, "{}", error),
            Self::Io(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for ExperimentError {}

impl From<ExperimentConfigError> for ExperimentError {
    fn from(error: ExperimentConfigError) -> Self {
        ExperimentError::Config(error)
    }
}

impl From<GraphError> for ExperimentError {
    fn from(error: GraphError) -> Self {
        ExperimentError::Graph(error)
    }
}

impl From<SolutionError> for ExperimentError {
    fn from(error: SolutionError) -> Self {
        ExperimentError::Solution(error)
    }
}

impl From<AcoError> for ExperimentError {
    fn from(error: AcoError) -> Self {
        ExperimentError::Aco(error)
    }
}

/// The solution of an experiment in the cost domain of its matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Integer(Solution<i64>),
    Real(Solution<f64>),
}

impl Outcome {
    pub fn tour(&self) -> &Tour {
        match self {
            Self::Integer(solution) => solution.tour(),
            Self::Real(solution) => solution.tour(),
        }
    }

    /// Returns the total cost formatted in its own domain.
    pub fn total_cost(&self) -> String {
        match self {
            Self::Integer(solution) => solution.total_cost().to_string(),
            Self::Real(solution) => solution.total_cost().to_string(),
        }
    }
}

pub struct Experiment {}

impl Experiment {
    /// Runs the configured solver on the configured matrix.
    /// `on_iteration` receives the finished and the total number of ACO iterations.
    pub fn run(
        config: &ExperimentConfig,
        mut on_iteration: impl FnMut(usize, usize),
    ) -> Result<Outcome, ExperimentError> {
        match &config.matrix {
            MatrixConfig::Integer(matrix) => {
                Self::run_with_matrix(config, matrix, &mut on_iteration).map(Outcome::Integer)
            }
            MatrixConfig::Real(matrix) => {
                Self::run_with_matrix(config, matrix, &mut on_iteration).map(Outcome::Real)
            }
        }
    }

    fn run_with_matrix<Ew: Weight + Serialize>(
        config: &ExperimentConfig,
        matrix: &CostMatrix<Ew>,
        on_iteration: &mut impl FnMut(usize, usize),
    ) -> Result<Solution<Ew>, ExperimentError> {
        let experiment_cfg = &config.experiment;
        if experiment_cfg.validate_matrix {
            matrix.validate()?;
        }

        let solution = match &config.algorithm {
            AlgoConfig::Aco(aco_cfg) => {
                Self::run_aco_experiment(config, matrix, aco_cfg, on_iteration)?
            }
            AlgoConfig::UnseededAco(unseeded_cfg) => {
                let aco_cfg = unseeded_cfg.to_fixed();
                Self::run_aco_experiment(config, matrix, &aco_cfg, on_iteration)?
            }
            AlgoConfig::Greedy(greedy_cfg) => match greedy_cfg.strategy {
                GreedyStrategy::NearestNeighbor => {
                    log::info!("experiment.run: greedy n={}", matrix.size());
                    Greedy::solve(matrix)?
                }
            },
        };

        solution.tour().validate(matrix.size())?;
        log::info!("experiment.run: done cost={}", solution.total_cost());
        Ok(solution)
    }

    fn run_aco_experiment<Ew: Weight + Serialize>(
        config: &ExperimentConfig,
        matrix: &CostMatrix<Ew>,
        aco_cfg: &AcoExperiment,
        on_iteration: &mut impl FnMut(usize, usize),
    ) -> Result<Solution<Ew>, ExperimentError> {
        let experiment_cfg = &config.experiment;
        let params = aco_cfg.params();
        params.validate()?;
        log::info!(
            "experiment.run: aco n={} ants={} iterations={} seed={}",
            matrix.size(),
            params.ant_count,
            params.iterations,
            aco_cfg.seed
        );

        let solution = match &experiment_cfg.statistics {
            Some(path) => {
                let writer = Writer::from_path(path).map_err(|error| {
                    ExperimentError::Io(format!("Could not create {}: {}", path, error))
                })?;
                let supervisor = Supervisor::new(experiment_cfg.aggregation_rate, writer);
                Self::run_aco(matrix, params, supervisor, on_iteration)?
            }
            None => {
                let supervisor = Supervisor::<Sink, Ew>::default();
                Self::run_aco(matrix, params, supervisor, on_iteration)?
            }
        };
        Ok(solution)
    }

    fn run_aco<Ew: Weight + Serialize, W: Write>(
        matrix: &CostMatrix<Ew>,
        params: Params,
        supervisor: Supervisor<W, Ew>,
        on_iteration: &mut impl FnMut(usize, usize),
    ) -> Result<Solution<Ew>, AcoError> {
        let mut aco: Aco<Ew, W> = Aco::new(matrix, params, supervisor);
        while !aco.finished() {
            aco.single_iteration()?;
            on_iteration(aco.iteration(), aco.iterations());
        }

        aco.solve()
    }
}
