use crate::graph::{CostMatrix, Edge, GraphError};
use crate::util::Weight;

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Sums the cost of every edge of the tour as given by the matrix.
pub fn tour_cost<Ew: Weight>(tour: &Tour, matrix: &CostMatrix<Ew>) -> Result<Ew, GraphError> {
    tour.iter_edges()
        .try_fold(Ew::zero(), |acc, edge| Ok(acc + matrix.edge_weight(edge)?))
}

#[derive(Debug, Clone, PartialEq)]
pub enum SolutionError {
    Empty,
    NotClosed { start: usize, end: usize },
    WrongLength { expected: usize, found: usize },
    CityOutOfRange(usize),
    DuplicateCity(usize),
}

impl fmt::Display for SolutionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "The tour visits no city."),
            Self::NotClosed { start, end } => write!(
                f,
                "The tour starts at city {} but ends at city {}.",
                start, end
            ),
            Self::WrongLength { expected, found } => write!(
                f,
                "The tour should list {} cities but lists {}.",
                expected, found
            ),
            Self::CityOutOfRange(id) => write!(f, "City {} is not in the cost matrix.", id),
            Self::DuplicateCity(id) => write!(f, "City {} is visited more than once.", id),
        }
    }
}

impl Error for SolutionError {}

/// Ordered list of visited cities. A complete tour returns to its first city, so over
/// `n` cities it lists `n + 1` entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tour {
    cities: Vec<usize>,
}

impl Tour {
    pub fn new() -> Self {
        Tour { cities: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Tour {
            cities: Vec::with_capacity(capacity),
        }
    }

    pub fn from_cities(cities: Vec<usize>) -> Self {
        Tour { cities }
    }

    pub fn push_city(&mut self, city: usize) {
        self.cities.push(city);
    }

    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    pub fn start(&self) -> Option<usize> {
        self.cities.first().copied()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Returns true if the tour ends where it started, or false otherwise.
    pub fn is_closed(&self) -> bool {
        !self.cities.is_empty() && self.cities.first() == self.cities.last()
    }

    pub fn iter_cities(&self) -> impl Iterator<Item = &usize> + '_ {
        self.cities.iter()
    }

    /// Iterates the traversed edges in order, including the closing edge.
    pub fn iter_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.cities.windows(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn edges(&self) -> Vec<Edge> {
        self.iter_edges().collect()
    }

    /// Checks that this is a closed circuit visiting each of the cities `0..size`
    /// exactly once before returning to its start.
    pub fn validate(&self, size: usize) -> Result<(), SolutionError> {
        let (first, last) = match (self.cities.first(), self.cities.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(SolutionError::Empty),
        };

        if self.cities.len() != size + 1 {
            return Err(SolutionError::WrongLength {
                expected: size + 1,
                found: self.cities.len(),
            });
        }
        if first != last {
            return Err(SolutionError::NotClosed {
                start: first,
                end: last,
            });
        }

        let mut seen = vec![false; size];
        for &city in &self.cities[..size] {
            match seen.get_mut(city) {
                None => return Err(SolutionError::CityOutOfRange(city)),
                Some(true) => return Err(SolutionError::DuplicateCity(city)),
                Some(flag) => *flag = true,
            }
        }

        Ok(())
    }
}

impl Display for Tour {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.cities
                .iter()
                .map(|x| format!("{}", x))
                .collect::<Vec<String>>()
                .join(" -> ")
        )
    }
}

/// A closed tour together with its total cost, as returned by every solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution<Ew> {
    tour: Tour,
    total_cost: Ew,
}

impl<Ew: Weight> Solution<Ew> {
    /// Pairs a tour with its already known cost.
    pub fn new(tour: Tour, total_cost: Ew) -> Self {
        Solution { tour, total_cost }
    }

    /// Builds a solution by summing the tour's edge costs in the matrix.
    pub fn from_tour(tour: Tour, matrix: &CostMatrix<Ew>) -> Result<Self, GraphError> {
        let total_cost = tour_cost(&tour, matrix)?;
        Ok(Solution { tour, total_cost })
    }

    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    pub fn total_cost(&self) -> Ew {
        self.total_cost
    }

    pub fn into_parts(self) -> (Tour, Ew) {
        (self.tour, self.total_cost)
    }
}

impl<Ew: Display> Display for Solution<Ew> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} (cost {})", self.tour, self.total_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city_list() -> Vec<usize> {
        vec![0, 3, 1, 2, 0]
    }

    fn valid_tour() -> Tour {
        Tour::from_cities(city_list())
    }

    fn matrix() -> CostMatrix<i64> {
        CostMatrix::new(vec![
            vec![0, 10, 15, 20],
            vec![10, 0, 35, 25],
            vec![15, 35, 0, 30],
            vec![20, 25, 30, 0],
        ])
    }

    #[test]
    fn iter_edges_works() {
        let cities = city_list();
        let edges: Vec<Edge> = cities
            .iter()
            .zip(cities.iter().skip(1))
            .map(|(a, b)| (*a, *b))
            .collect();

        assert_eq!(valid_tour().edges(), edges);
        assert_eq!(valid_tour().iter_edges().count(), 4);
    }

    #[test]
    fn push_city_works() {
        let mut tour = Tour::new();
        for city in city_list() {
            tour.push_city(city);
        }

        assert_eq!(tour, valid_tour());
        assert_eq!(tour.start(), Some(0));
        assert!(tour.is_closed(), "Tour should end where it started.");
    }

    #[test]
    fn validate_works() {
        assert_eq!(valid_tour().validate(4), Ok(()));
        assert_eq!(Tour::from_cities(vec![0, 0]).validate(1), Ok(()));
    }

    #[test]
    fn validate_errors_on_broken_tours() {
        assert_eq!(Tour::new().validate(3), Err(SolutionError::Empty));
        assert_eq!(
            Tour::from_cities(vec![0, 1, 2]).validate(3),
            Err(SolutionError::WrongLength {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            Tour::from_cities(vec![0, 1, 2, 1]).validate(3),
            Err(SolutionError::NotClosed { start: 0, end: 1 })
        );
        assert_eq!(
            Tour::from_cities(vec![0, 1, 1, 0]).validate(3),
            Err(SolutionError::DuplicateCity(1))
        );
        assert_eq!(
            Tour::from_cities(vec![0, 5, 1, 0]).validate(3),
            Err(SolutionError::CityOutOfRange(5))
        );
    }

    #[test]
    fn tour_cost_works() {
        // 20 + 25 + 35 + 15
        assert_eq!(tour_cost(&valid_tour(), &matrix()), Ok(95));
        assert_eq!(tour_cost(&Tour::from_cities(vec![0]), &matrix()), Ok(0));
    }

    #[test]
    fn tour_cost_errors_for_missing_city() {
        let tour = Tour::from_cities(vec![0, 4, 0]);

        assert_eq!(
            tour_cost(&tour, &matrix()),
            Err(GraphError::MissingNode(4)),
            "City 4 is not part of the matrix."
        );
    }

    #[test]
    fn from_tour_works() {
        let solution = Solution::from_tour(valid_tour(), &matrix()).unwrap();

        assert_eq!(solution.total_cost(), 95);
        assert_eq!(solution.tour(), &valid_tour());
    }

    #[test]
    fn display_works() {
        let solution = Solution::new(valid_tour(), 95);

        assert_eq!(format!("{}", solution), "0 -> 3 -> 1 -> 2 -> 0 (cost 95)");
    }
}
