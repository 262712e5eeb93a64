pub mod experiment;
pub mod experiment_config;
pub mod graph;
pub mod logging;
pub mod metaheuristic;
pub mod options;
pub mod rng;
pub mod util;
