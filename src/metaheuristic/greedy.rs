use crate::graph::{CostMatrix, GraphError};
use crate::metaheuristic::{Solution, Tour};
use crate::util::Weight;

/// Nearest neighbor construction starting and ending at city 0.
///
/// From the current city the solver always moves to the cheapest unvisited city. Ties
/// go to the lowest index. Runs in O(n²) time and never uses randomness, so equal
/// matrices always give equal solutions.
pub struct Greedy;

impl Greedy {
    pub fn solve<Ew: Weight>(matrix: &CostMatrix<Ew>) -> Result<Solution<Ew>, GraphError> {
        let size = matrix.size();
        let mut visited = vec![false; size];
        let mut tour = Tour::with_capacity(size + 1);
        let mut total_cost = Ew::zero();

        let mut current = 0;
        tour.push_city(current);
        if let Some(start) = visited.first_mut() {
            *start = true;
        }

        for _ in 1..size {
            let next = Self::nearest_unvisited(matrix, current, &visited)?;
            total_cost = total_cost + matrix.distance(current, next)?;
            visited[next] = true;
            tour.push_city(next);
            current = next;
        }

        total_cost = total_cost + matrix.distance(current, 0)?;
        tour.push_city(0);

        log::debug!("greedy.solve: done n={} cost={}", size, total_cost);
        Ok(Solution::new(tour, total_cost))
    }

    /// Returns the unvisited city with the strictly smallest cost from `current`.
    /// Scans in ascending order, so the earliest of several equal minima wins.
    fn nearest_unvisited<Ew: Weight>(
        matrix: &CostMatrix<Ew>,
        current: usize,
        visited: &[bool],
    ) -> Result<usize, GraphError> {
        let mut nearest: Option<(usize, Ew)> = None;
        for (city, _) in visited.iter().enumerate().filter(|(_, seen)| !**seen) {
            let distance = matrix.distance(current, city)?;
            let closer = match nearest {
                Some((_, best)) => distance < best,
                None => true,
            };
            if closer {
                nearest = Some((city, distance));
            }
        }

        // Only called while at least one city is unvisited.
        nearest
            .map(|(city, _)| city)
            .ok_or(GraphError::MissingNode(visited.len()))
    }
}
