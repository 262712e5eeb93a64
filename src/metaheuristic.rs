pub mod aco;
mod greedy;
mod solution;

use crate::graph::CostMatrix;
pub use aco::Aco;
pub use greedy::Greedy;
pub use solution::{tour_cost, Solution, SolutionError, Tour};

/// An iterative solver that improves its best solution one iteration at a time.
pub trait Metaheuristic<'a, Ew> {
    type Params;
    type SupervisorType;
    type Error;

    fn new(
        matrix: &'a CostMatrix<Ew>,
        params: Self::Params,
        supervisor: Self::SupervisorType,
    ) -> Self;

    /// Runs a single iteration. Returns the best solution if it improved, or None otherwise.
    fn single_iteration(&mut self) -> Result<Option<&Solution<Ew>>, Self::Error>;
}
