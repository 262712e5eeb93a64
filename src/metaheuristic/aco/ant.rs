use crate::graph::CostMatrix;
use crate::metaheuristic::aco::{AcoError, Message, PheromoneMatrix};
use crate::metaheuristic::{Solution, Tour};
use crate::rng::RandomSource;
use crate::util::Weight;

use std::sync::mpsc::Sender;
use std::time::Instant;

/// Outcome of a single city selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection {
    /// Picked by walking the cumulative probabilities.
    Sampled(usize),
    /// The cumulative probabilities never passed the drawn value, e.g. because
    /// rounding kept their sum below it or a weight was not a number. The lowest
    /// unvisited index is taken instead.
    Fallback(usize),
}

impl Selection {
    pub fn city(self) -> usize {
        match self {
            Selection::Sampled(city) | Selection::Fallback(city) => city,
        }
    }
}

/// An ant constructs one closed tour from city 0, reading but never changing the
/// pheromone levels.
pub struct Ant<'a, Ew> {
    matrix: &'a CostMatrix<Ew>,
    pheromone_matrix: &'a PheromoneMatrix,
    alpha: f64,
    beta: f64,
    sender: Sender<Message<Ew>>,
    id: usize,
    iteration: usize,
}

impl<'a, Ew: Weight> Ant<'a, Ew> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        matrix: &'a CostMatrix<Ew>,
        pheromone_matrix: &'a PheromoneMatrix,
        alpha: f64,
        beta: f64,
        sender: Sender<Message<Ew>>,
        id: usize,
        iteration: usize,
    ) -> Self {
        Ant {
            matrix,
            pheromone_matrix,
            alpha,
            beta,
            sender,
            id,
            iteration,
        }
    }

    /// Desirability of moving from one city to another:
    /// `pheromone ^ alpha * (1 / distance) ^ beta`.
    fn weighted_heuristic(&self, from: usize, to: usize) -> Result<f64, AcoError> {
        let distance = self.matrix.distance(from, to)?.as_f64();
        let pheromone = self.pheromone_matrix.level(from, to);

        Ok(pheromone.powf(self.alpha) * (1.0 / distance).powf(self.beta))
    }

    /// Chooses the next city among the unvisited ones with probability proportional to
    /// its weighted heuristic.
    pub fn choose_next_city<R: RandomSource>(
        &self,
        current: usize,
        visited: &[bool],
        rng: &mut R,
    ) -> Result<Selection, AcoError> {
        let mut probabilities = vec![0.0; visited.len()];
        let mut total = 0.0;
        for city in unvisited(visited) {
            probabilities[city] = self.weighted_heuristic(current, city)?;
            total += probabilities[city];
        }

        let rand = rng.rand_float();
        let mut cumulative = 0.0;
        for city in unvisited(visited) {
            cumulative += probabilities[city] / total;
            if rand < cumulative {
                return Ok(Selection::Sampled(city));
            }
        }

        unvisited(visited)
            .next()
            .map(Selection::Fallback)
            .ok_or(AcoError::SelectionExhausted { from: current })
    }

    /// Builds a closed tour over all cities, starting and ending at city 0.
    pub fn get_solution<R: RandomSource>(&self, rng: &mut R) -> Result<AntSolution<Ew>, AcoError> {
        let start_time = Instant::now();
        let size = self.matrix.size();
        let mut visited = vec![false; size];
        let mut tour = Tour::with_capacity(size + 1);
        let mut total_cost = Ew::zero();
        let mut evaluations = 0;
        let mut fallbacks = 0;

        let mut current = 0;
        tour.push_city(current);
        if let Some(start) = visited.first_mut() {
            *start = true;
        }

        for step in 1..size {
            evaluations += size - step;
            let selection = self.choose_next_city(current, &visited, rng)?;
            if let Selection::Fallback(city) = selection {
                fallbacks += 1;
                log::trace!(
                    "ant.select: fallback ant={} iteration={} from={} to={}",
                    self.id,
                    self.iteration,
                    current,
                    city
                );
            }

            let next = selection.city();
            total_cost = total_cost + self.matrix.distance(current, next)?;
            visited[next] = true;
            tour.push_city(next);
            current = next;
        }

        total_cost = total_cost + self.matrix.distance(current, 0)?;
        tour.push_city(0);

        let _res = self.sender.send(Message::new(
            self.id,
            self.iteration,
            evaluations,
            fallbacks,
            0,
            start_time.elapsed(),
            total_cost,
        ));

        Ok(AntSolution {
            solution: Solution::new(tour, total_cost),
            evaluations,
            fallbacks,
        })
    }
}

fn unvisited(visited: &[bool]) -> impl Iterator<Item = usize> + '_ {
    visited
        .iter()
        .enumerate()
        .filter(|(_, seen)| !**seen)
        .map(|(city, _)| city)
}

pub struct AntSolution<Ew> {
    pub solution: Solution<Ew>,
    pub evaluations: usize,
    pub fallbacks: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metaheuristic::tour_cost;
    use crate::rng::rng64;
    use std::sync::mpsc;

    /// Replays a fixed list of draws.
    struct Scripted {
        draws: Vec<f64>,
        next: usize,
    }

    impl Scripted {
        fn new(draws: Vec<f64>) -> Self {
            Scripted { draws, next: 0 }
        }
    }

    impl RandomSource for Scripted {
        fn rand_float(&mut self) -> f64 {
            let draw = self.draws[self.next % self.draws.len()];
            self.next += 1;
            draw
        }
    }

    fn uniform_matrix(size: usize) -> CostMatrix<i64> {
        CostMatrix::new(
            (0..size)
                .map(|i| (0..size).map(|j| if i == j { 0 } else { 1 }).collect())
                .collect(),
        )
    }

    fn ant<'a>(
        matrix: &'a CostMatrix<i64>,
        pheromones: &'a PheromoneMatrix,
        sender: Sender<Message<i64>>,
    ) -> Ant<'a, i64> {
        Ant::new(matrix, pheromones, 1.0, 2.0, sender, 1, 0)
    }

    #[test]
    fn get_solution_follows_cumulative_probabilities() {
        let matrix = uniform_matrix(4);
        let pheromones = PheromoneMatrix::new(4);
        let (sender, receiver) = mpsc::channel();
        let ant = ant(&matrix, &pheromones, sender);

        // From 0 each city has probability 1/3, so 0.5 lands in city 2. From 2 the
        // cities 1 and 3 have 1/2 each and 0.5 does not pass the first half.
        let result = ant.get_solution(&mut Scripted::new(vec![0.5])).unwrap();

        assert_eq!(result.solution.tour().cities(), &[0, 2, 3, 1, 0]);
        assert_eq!(result.solution.total_cost(), 4);
        assert_eq!(result.fallbacks, 0);
        assert_eq!(result.evaluations, 6);

        let message = receiver.try_recv().unwrap();
        assert_eq!((message.ant_id, message.cost), (1, 4));
    }

    #[test]
    fn choose_next_city_falls_back_to_first_unvisited() {
        let matrix = uniform_matrix(4);
        let pheromones = PheromoneMatrix::new(4);
        let (sender, _receiver) = mpsc::channel();
        let ant = ant(&matrix, &pheromones, sender);
        let visited = [true, false, true, false];

        // A draw no cumulative probability can exceed.
        let selection = ant
            .choose_next_city(0, &visited, &mut Scripted::new(vec![2.0]))
            .unwrap();

        assert_eq!(selection, Selection::Fallback(1));
    }

    #[test]
    fn choose_next_city_falls_back_on_zero_distance() {
        // The zero distance to city 2 gives an infinite weight and NaN probabilities.
        let matrix = CostMatrix::new(vec![
            vec![0, 4, 0, 4],
            vec![4, 0, 4, 4],
            vec![0, 4, 0, 4],
            vec![4, 4, 4, 0],
        ]);
        let pheromones = PheromoneMatrix::new(4);
        let (sender, _receiver) = mpsc::channel();
        let ant = ant(&matrix, &pheromones, sender);
        let visited = [true, false, false, false];

        for draw in [0.0, 0.5, 0.99] {
            let selection = ant
                .choose_next_city(0, &visited, &mut Scripted::new(vec![draw]))
                .unwrap();
            assert_eq!(selection, Selection::Fallback(1), "Draw {} did not fall back.", draw);
        }
    }

    #[test]
    fn choose_next_city_errors_when_all_visited() {
        let matrix = uniform_matrix(3);
        let pheromones = PheromoneMatrix::new(3);
        let (sender, _receiver) = mpsc::channel();
        let ant = ant(&matrix, &pheromones, sender);

        assert_eq!(
            ant.choose_next_city(2, &[true, true, true], &mut Scripted::new(vec![0.1])),
            Err(AcoError::SelectionExhausted { from: 2 })
        );
    }

    #[test]
    fn get_solution_counts_fallbacks() {
        let matrix = uniform_matrix(5);
        let pheromones = PheromoneMatrix::new(5);
        let (sender, _receiver) = mpsc::channel();
        let ant = ant(&matrix, &pheromones, sender);

        let result = ant.get_solution(&mut Scripted::new(vec![2.0])).unwrap();

        assert_eq!(result.solution.tour().cities(), &[0, 1, 2, 3, 4, 0]);
        assert_eq!(result.fallbacks, 4);
    }

    #[test]
    fn get_solution_always_builds_valid_tours() {
        let matrix = CostMatrix::new(vec![
            vec![0.0, 3.0, 4.5, 2.0, 7.0, 1.5],
            vec![3.0, 0.0, 2.5, 6.0, 1.0, 8.0],
            vec![4.5, 2.5, 0.0, 3.5, 9.0, 2.0],
            vec![2.0, 6.0, 3.5, 0.0, 4.0, 5.0],
            vec![7.0, 1.0, 9.0, 4.0, 0.0, 6.5],
            vec![1.5, 8.0, 2.0, 5.0, 6.5, 0.0],
        ]);
        let mut pheromones = PheromoneMatrix::new(6);
        pheromones.deposit(&Tour::from_cities(vec![0, 5, 2, 1, 4, 3, 0]), 40.0);
        let (sender, _receiver) = mpsc::channel();
        let ant = Ant::new(&matrix, &pheromones, 1.0, 2.0, sender, 1, 0);
        let mut rng = rng64(11);

        for _ in 0..200 {
            let solution = ant.get_solution(&mut rng).unwrap().solution;
            assert_eq!(solution.tour().validate(6), Ok(()));
            assert_eq!(tour_cost(solution.tour(), &matrix), Ok(solution.total_cost()));
        }
    }

    #[test]
    fn get_solution_works_for_single_city() {
        let matrix = uniform_matrix(1);
        let pheromones = PheromoneMatrix::new(1);
        let (sender, _receiver) = mpsc::channel();
        let ant = ant(&matrix, &pheromones, sender);

        let result = ant.get_solution(&mut Scripted::new(vec![0.3])).unwrap();

        assert_eq!(result.solution.tour().cities(), &[0, 0]);
        assert_eq!(result.solution.total_cost(), 0);
    }
}
