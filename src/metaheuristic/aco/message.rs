use serde::Serialize;
use std::ops::AddAssign;
use std::time::Duration;

/// Report sent to the [`Supervisor`](super::Supervisor).
///
/// Ants report with ids starting at 1 and carry the cost of the tour they built.
/// The colony itself reports as ant 0 once per iteration, carrying the best cost so far.
#[derive(Debug, Clone)]
pub struct Message<Ew> {
    pub ant_id: usize,
    pub iteration: usize,
    pub evaluations: usize,
    pub fallbacks: usize,
    pub n_improvements: usize,
    pub cpu_time: Duration,
    pub cost: Ew,
}

impl<Ew: Copy> Message<Ew> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ant_id: usize,
        iteration: usize,
        evaluations: usize,
        fallbacks: usize,
        n_improvements: usize,
        cpu_time: Duration,
        cost: Ew,
    ) -> Self {
        Self {
            ant_id,
            iteration,
            evaluations,
            fallbacks,
            n_improvements,
            cpu_time,
            cost,
        }
    }

    pub fn id(&self) -> usize {
        self.ant_id
    }

    pub fn is_colony(&self) -> bool {
        self.ant_id == 0
    }

    pub fn get_info(&self) -> MessageInfo<Ew> {
        MessageInfo {
            iteration: self.iteration,
            evaluations: self.evaluations,
            fallbacks: self.fallbacks,
            n_improvements: self.n_improvements,
            cpu_time_us: self.cpu_time.as_micros() as u64,
            cost: self.cost,
        }
    }
}

/// Aggregated colony statistics, one CSV row each.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MessageInfo<Ew> {
    pub iteration: usize,
    pub evaluations: usize,
    pub fallbacks: usize,
    pub n_improvements: usize,
    pub cpu_time_us: u64,
    pub cost: Ew,
}

impl<Ew: Copy> AddAssign for MessageInfo<Ew> {
    fn add_assign(&mut self, other: Self) {
        *self = Self {
            iteration: other.iteration,
            evaluations: self.evaluations + other.evaluations,
            fallbacks: self.fallbacks + other.fallbacks,
            n_improvements: self.n_improvements + other.n_improvements,
            cpu_time_us: self.cpu_time_us + other.cpu_time_us,
            cost: other.cost,
        };
    }
}
