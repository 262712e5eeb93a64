use crate::metaheuristic::aco::AcoError;
use crate::rng::os_random_seed;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    /// Influence of the pheromone level on the choice of the next city.
    pub alpha: f64,
    /// Influence of the inverse distance on the choice of the next city.
    pub beta: f64,
    /// Evaporation rate, the share of pheromone lost every iteration.
    pub rho: f64,
    pub seed: u128,
    pub ant_count: usize,
    pub iterations: usize,
}

impl Params {
    pub const DEFAULT_ALPHA: f64 = 1.0;
    pub const DEFAULT_BETA: f64 = 2.0;
    pub const DEFAULT_RHO: f64 = 0.5;

    /// Creates parameters with the default weights. Without a seed one is drawn from the OS.
    pub fn new(ant_count: usize, iterations: usize, seed: Option<u128>) -> Self {
        Params {
            alpha: Self::DEFAULT_ALPHA,
            beta: Self::DEFAULT_BETA,
            rho: Self::DEFAULT_RHO,
            seed: seed.unwrap_or_else(os_random_seed),
            ant_count,
            iterations,
        }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    /// Rejects parameters the colony can't run with: no ants, no iterations,
    /// an evaporation rate outside of [0, 1) or negative or non-finite weights.
    pub fn validate(&self) -> Result<(), AcoError> {
        if self.ant_count == 0 {
            return Err(AcoError::InvalidParams("ant_count must be at least 1".to_string()));
        }
        if self.iterations == 0 {
            return Err(AcoError::InvalidParams("iterations must be at least 1".to_string()));
        }
        if !(0.0..1.0).contains(&self.rho) {
            return Err(AcoError::InvalidParams(format!(
                "rho must be in [0, 1), got {}",
                self.rho
            )));
        }
        for (name, value) in [("alpha", self.alpha), ("beta", self.beta)] {
            if !value.is_finite() || value < 0.0 {
                return Err(AcoError::InvalidParams(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
