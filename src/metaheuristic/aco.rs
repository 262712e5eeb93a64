mod ant;
mod error;
mod message;
mod params;
mod pheromones;
mod supervisor;

pub use ant::{Ant, AntSolution, Selection};
pub use error::AcoError;
pub use message::{Message, MessageInfo};
pub use params::Params;
pub use pheromones::PheromoneMatrix;
pub use supervisor::Supervisor;

use crate::graph::CostMatrix;
use crate::metaheuristic::{Metaheuristic, Solution};
use crate::rng::{rng64, RandomSource};
use crate::util::Weight;

use oorandom::Rand64;
use serde::Serialize;
use std::io::Write;
use std::time::Instant;

/// Ant colony optimization for the closed tour over all cities of a cost matrix.
///
/// Every iteration lets `ant_count` ants build a tour each, using the pheromone levels of
/// the previous iteration only. Afterwards all levels evaporate by `rho` and every ant
/// deposits `1 / cost` of its tour on the edges it used. The best tour over all
/// iterations is kept; a later tour only replaces it if it is strictly cheaper.
///
/// All randomness comes from the injected [`RandomSource`], so equal seeds and
/// parameters reproduce equal runs.
pub struct Aco<'a, Ew, W, R = Rand64>
where
    W: Write,
{
    matrix: &'a CostMatrix<Ew>,
    pheromone_matrix: PheromoneMatrix,
    alpha: f64,
    beta: f64,
    rho: f64,
    ant_count: usize,
    iterations: usize,
    iteration: usize,
    best_solution: Option<Solution<Ew>>,
    pub supervisor: Supervisor<W, Ew>,
    rng: R,
}

impl<'a, Ew, W, R> Aco<'a, Ew, W, R>
where
    Ew: Weight + Serialize,
    W: Write,
    R: RandomSource,
{
    /// Creates a colony drawing from the given random source instead of one seeded by
    /// `params.seed`.
    pub fn with_rng(
        matrix: &'a CostMatrix<Ew>,
        params: Params,
        rng: R,
        supervisor: Supervisor<W, Ew>,
    ) -> Self {
        Aco {
            matrix,
            pheromone_matrix: PheromoneMatrix::new(matrix.size()),
            alpha: params.alpha,
            beta: params.beta,
            rho: params.rho,
            ant_count: params.ant_count,
            iterations: params.iterations,
            iteration: 0,
            best_solution: None,
            supervisor,
            rng,
        }
    }

    pub fn best(&self) -> Option<&Solution<Ew>> {
        self.best_solution.as_ref()
    }

    /// Returns the number of finished iterations.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns true once the configured number of iterations has run.
    pub fn finished(&self) -> bool {
        self.iteration >= self.iterations
    }

    /// Runs the remaining iterations and returns the best solution found.
    pub fn solve(&mut self) -> Result<Solution<Ew>, AcoError> {
        log::debug!(
            "aco.solve: start n={} ants={} iterations={}",
            self.matrix.size(),
            self.ant_count,
            self.iterations
        );

        while !self.finished() {
            self.run_iteration()?;
        }
        self.supervisor.finish();

        let best = self.best_solution.clone().ok_or(AcoError::NoSolution)?;
        log::debug!("aco.solve: done cost={}", best.total_cost());
        Ok(best)
    }

    fn construct_solutions(&mut self) -> Result<Vec<AntSolution<Ew>>, AcoError> {
        let mut solutions = Vec::with_capacity(self.ant_count);
        for _ in 0..self.ant_count {
            let (sender, id) = self.supervisor.new_ant();
            let ant = Ant::new(
                self.matrix,
                &self.pheromone_matrix,
                self.alpha,
                self.beta,
                sender,
                id,
                self.iteration,
            );
            solutions.push(ant.get_solution(&mut self.rng)?);
        }

        Ok(solutions)
    }

    /// Evaporates all levels, then lets every ant of the iteration deposit on its tour.
    fn pheromone_update(&mut self, solutions: &[AntSolution<Ew>]) {
        self.pheromone_matrix.evaporate(self.rho);

        for ant_solution in solutions {
            let deposit = 1.0 / ant_solution.solution.total_cost().as_f64();
            self.pheromone_matrix
                .deposit(ant_solution.solution.tour(), deposit);
        }
    }

    /// Runs one iteration. Returns true if the best solution improved.
    fn run_iteration(&mut self) -> Result<bool, AcoError> {
        let start_time = Instant::now();
        let solutions = self.construct_solutions()?;
        self.pheromone_update(&solutions);

        let mut improvements = 0;
        let mut evaluations = 0;
        let mut fallbacks = 0;
        for ant_solution in solutions.into_iter() {
            evaluations += ant_solution.evaluations;
            fallbacks += ant_solution.fallbacks;

            let improves = match &self.best_solution {
                Some(best) => ant_solution.solution.total_cost() < best.total_cost(),
                None => true,
            };
            if improves {
                improvements += 1;
                self.best_solution = Some(ant_solution.solution);
            }
        }

        if let Some(best) = &self.best_solution {
            log::trace!(
                "aco.iteration: i={} improvements={} fallbacks={} best={}",
                self.iteration,
                improvements,
                fallbacks,
                best.total_cost()
            );
            // Ant 0 is always the colony.
            let _res = self.supervisor.sender.send(Message::new(
                0,
                self.iteration,
                evaluations,
                fallbacks,
                improvements,
                start_time.elapsed(),
                best.total_cost(),
            ));
        }
        self.supervisor.prepare_next();
        self.iteration += 1;

        Ok(improvements > 0)
    }
}

impl<'a, Ew, W> Metaheuristic<'a, Ew> for Aco<'a, Ew, W, Rand64>
where
    Ew: Weight + Serialize,
    W: Write,
{
    type Params = Params;
    type SupervisorType = Supervisor<W, Ew>;
    type Error = AcoError;

    fn new(matrix: &'a CostMatrix<Ew>, params: Params, supervisor: Supervisor<W, Ew>) -> Self {
        Aco::with_rng(matrix, params, rng64(params.seed), supervisor)
    }

    fn single_iteration(&mut self) -> Result<Option<&Solution<Ew>>, AcoError> {
        if self.run_iteration()? {
            return Ok(self.best_solution.as_ref());
        }
        Ok(None)
    }
}
