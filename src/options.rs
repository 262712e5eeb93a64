use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Solves the tours of YAML or RON experiment configs.
#[derive(Parser, Clone, Debug, PartialEq)]
#[command(name = "tsp_with_aco", version, about)]
pub struct CliOptions {
    /// Print the cost matrix of every config before solving
    #[arg(long = "matrix")]
    pub print_matrix: bool,

    /// Hide the progress bar over the ACO iterations
    #[arg(long)]
    pub no_progress: bool,

    /// One of off, error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,

    /// Experiment configs (.yaml, .yml or .ron)
    #[arg(required = true)]
    pub configs: Vec<PathBuf>,
}
