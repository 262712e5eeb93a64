use std::process;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};

use tsp_with_aco::experiment::{Experiment, Outcome};
use tsp_with_aco::experiment_config::{ExperimentConfig, MatrixConfig};
use tsp_with_aco::logging;
use tsp_with_aco::options::CliOptions;
use tsp_with_aco::util::route_labels;

fn main() {
    let options = CliOptions::parse();
    if let Err(err) = logging::init_logger(options.log_level) {
        eprintln!("Could not set up logging: {}", err);
    }

    let mut failed = false;
    for path in &options.configs {
        info!("main: config={}", path.display());

        let config = match ExperimentConfig::from_file(path) {
            Ok(config) => config,
            Err(err) => {
                error!("main: {}", err);
                failed = true;
                continue;
            }
        };

        if options.print_matrix {
            match &config.matrix {
                MatrixConfig::Integer(matrix) => print!("{}", matrix),
                MatrixConfig::Real(matrix) => print!("{}", matrix),
            }
        }

        let bar = if options.no_progress {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(0)
        };
        bar.set_style(ProgressStyle::default_bar().template("{bar:40} {pos}/{len} iterations"));

        let result = Experiment::run(&config, |done, total| {
            bar.set_length(total as u64);
            bar.set_position(done as u64);
        });
        bar.finish_and_clear();

        match result {
            Ok(outcome) => print_outcome(&outcome),
            Err(err) => {
                error!("main: {}", err);
                failed = true;
            }
        }
    }

    if failed {
        process::exit(1);
    }
}

fn print_outcome(outcome: &Outcome) {
    println!("Route: {}", route_labels(outcome.tour()).join(" -> "));
    println!("Total cost: {}", outcome.total_cost());
}
