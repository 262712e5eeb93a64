use serde::{Deserialize, Serialize};

use crate::experiment_config::Fix;
use crate::metaheuristic::aco::Params;
use crate::rng::os_random_seed;

fn default_alpha() -> f64 {
    Params::DEFAULT_ALPHA
}

fn default_beta() -> f64 {
    Params::DEFAULT_BETA
}

fn default_rho() -> f64 {
    Params::DEFAULT_RHO
}

#[derive(Copy, Clone, Deserialize, Serialize, Debug, PartialEq)]
pub struct AcoExperiment {
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default = "default_beta")]
    pub beta: f64,
    #[serde(default = "default_rho")]
    pub rho: f64,
    pub seed: u64,
    pub ant_count: usize,
    pub iterations: usize,
}

impl AcoExperiment {
    pub fn params(&self) -> Params {
        Params::new(self.ant_count, self.iterations, Some(self.seed as u128))
            .with_alpha(self.alpha)
            .with_beta(self.beta)
            .with_rho(self.rho)
    }
}

#[derive(Copy, Clone, Deserialize, Serialize, Debug, PartialEq)]
pub struct UnseededAcoExperiment {
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default = "default_beta")]
    pub beta: f64,
    #[serde(default = "default_rho")]
    pub rho: f64,
    pub ant_count: usize,
    pub iterations: usize,
}

impl Fix<AcoExperiment> for UnseededAcoExperiment {
    fn to_fixed(&self) -> AcoExperiment {
        AcoExperiment {
            alpha: self.alpha,
            beta: self.beta,
            rho: self.rho,
            seed: (os_random_seed() >> 64) as u64,
            ant_count: self.ant_count,
            iterations: self.iterations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_works() {
        let experiment = AcoExperiment {
            alpha: 0.5,
            beta: 3.0,
            rho: 0.25,
            seed: 7,
            ant_count: 4,
            iterations: 9,
        };
        let params = experiment.params();

        assert_eq!((params.alpha, params.beta, params.rho), (0.5, 3.0, 0.25));
        assert_eq!((params.seed, params.ant_count, params.iterations), (7, 4, 9));
    }

    #[test]
    fn to_fixed_keeps_parameters() {
        let unseeded = UnseededAcoExperiment {
            alpha: 1.0,
            beta: 2.0,
            rho: 0.5,
            ant_count: 10,
            iterations: 50,
        };
        let fixed = unseeded.to_fixed();

        assert_eq!((fixed.ant_count, fixed.iterations), (10, 50));
        assert_eq!((fixed.alpha, fixed.beta, fixed.rho), (1.0, 2.0, 0.5));
    }
}
