use crate::graph::{Edge, GraphError};
use crate::util::Weight;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Square matrix of travel costs between cities `0..size`.
///
/// The matrix is immutable after construction and is never checked implicitly.
/// Callers are expected to supply
///
/// * a square matrix with at least one city,
/// * non-negative costs,
/// * a zero diagonal.
///
/// [`CostMatrix::validate`] checks these preconditions on request. Symmetry is not
/// required; use [`CostMatrix::is_symmetric`] to test for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostMatrix<Ew> {
    rows: Vec<Vec<Ew>>,
}

impl<Ew: Weight> CostMatrix<Ew> {
    /// Takes ownership of the given rows. The amount of cities is the amount of rows.
    pub fn new(rows: Vec<Vec<Ew>>) -> Self {
        CostMatrix { rows }
    }

    /// Returns the number of cities.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no cities, or false otherwise.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the cost of travelling from one city to another.
    /// Returns MissingNode if either index is out of range and MissingEdge if the row of
    /// `from` is too short to hold `to`.
    pub fn distance(&self, from: usize, to: usize) -> Result<Ew, GraphError> {
        let row = self.rows.get(from).ok_or(GraphError::MissingNode(from))?;
        match row.get(to) {
            Some(cost) => Ok(*cost),
            None if to >= self.size() => Err(GraphError::MissingNode(to)),
            None => Err(GraphError::MissingEdge((from, to))),
        }
    }

    /// Shorthand for [`CostMatrix::distance`] on an edge tuple.
    pub fn edge_weight(&self, edge: Edge) -> Result<Ew, GraphError> {
        self.distance(edge.0, edge.1)
    }

    pub fn rows(&self) -> &[Vec<Ew>] {
        &self.rows
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Ew]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Returns true if `cost[i][j] == cost[j][i]` holds for every pair, or false otherwise.
    /// A matrix that is not square is never symmetric.
    pub fn is_symmetric(&self) -> bool {
        let size = self.size();
        self.rows.iter().all(|row| row.len() == size)
            && (0..size).all(|i| (i + 1..size).all(|j| self.rows[i][j] == self.rows[j][i]))
    }

    /// Checks the documented preconditions: at least one city, square shape,
    /// non-negative costs and a zero diagonal.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.is_empty() {
            return Err(GraphError::Empty);
        }

        let size = self.size();
        for (from, row) in self.rows.iter().enumerate() {
            if row.len() != size {
                return Err(GraphError::NotSquare {
                    row: from,
                    len: row.len(),
                    size,
                });
            }

            for (to, cost) in row.iter().enumerate() {
                if *cost < Ew::zero() {
                    return Err(GraphError::NegativeWeight((from, to)));
                }
                if from == to && !cost.is_zero() {
                    return Err(GraphError::NonZeroDiagonal(from));
                }
            }
        }

        Ok(())
    }
}

impl<Ew: Display> Display for CostMatrix<Ew> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.rows.iter() {
            for cost in row.iter() {
                write!(f, "{:>4} ", cost)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_matrix() -> CostMatrix<i64> {
        CostMatrix::new(vec![
            vec![0, 10, 15, 20],
            vec![10, 0, 35, 25],
            vec![15, 35, 0, 30],
            vec![20, 25, 30, 0],
        ])
    }

    #[test]
    fn size_works() {
        let matrix = valid_matrix();
        let empty = CostMatrix::<i64>::new(Vec::new());

        assert_eq!(matrix.size(), 4, "Matrix should have four cities.");
        assert_eq!(empty.size(), 0, "Matrix should be empty.");
        assert!(empty.is_empty(), "Matrix should be empty.");
    }

    #[test]
    fn distance_works() {
        let matrix = valid_matrix();

        assert_eq!(matrix.distance(1, 3), Ok(25), "Wrong cost from 1 to 3.");
        assert_eq!(matrix.distance(3, 1), Ok(25), "Wrong cost from 3 to 1.");
        assert_eq!(matrix.edge_weight((2, 0)), Ok(15), "Wrong cost from 2 to 0.");
    }

    #[test]
    fn distance_errors_for_missing_node() {
        let matrix = valid_matrix();

        assert_eq!(
            matrix.distance(4, 0),
            Err(GraphError::MissingNode(4)),
            "City 4 should not be in the matrix."
        );
        assert_eq!(
            matrix.distance(0, 7),
            Err(GraphError::MissingNode(7)),
            "City 7 should not be in the matrix."
        );
    }

    #[test]
    fn distance_errors_for_short_row() {
        let matrix = CostMatrix::new(vec![vec![0, 1], vec![1]]);

        assert_eq!(
            matrix.distance(1, 1),
            Err(GraphError::MissingEdge((1, 1))),
            "Row 1 has no entry for city 1."
        );
    }

    #[test]
    fn is_symmetric_works() {
        let asymmetric = CostMatrix::new(vec![vec![0.0, 1.5], vec![2.5, 0.0]]);
        let ragged = CostMatrix::new(vec![vec![0, 1], vec![1]]);

        assert!(valid_matrix().is_symmetric(), "Matrix should be symmetric.");
        assert!(!asymmetric.is_symmetric(), "Matrix should not be symmetric.");
        assert!(!ragged.is_symmetric(), "Ragged matrix can't be symmetric.");
    }

    #[test]
    fn validate_works() {
        assert_eq!(valid_matrix().validate(), Ok(()));
    }

    #[test]
    fn validate_errors_on_broken_preconditions() {
        let empty = CostMatrix::<i64>::new(Vec::new());
        let ragged = CostMatrix::new(vec![vec![0, 1], vec![1]]);
        let negative = CostMatrix::new(vec![vec![0, -1], vec![1, 0]]);
        let diagonal = CostMatrix::new(vec![vec![0.0, 1.0], vec![1.0, 0.5]]);

        assert_eq!(empty.validate(), Err(GraphError::Empty));
        assert_eq!(
            ragged.validate(),
            Err(GraphError::NotSquare {
                row: 1,
                len: 1,
                size: 2
            })
        );
        assert_eq!(negative.validate(), Err(GraphError::NegativeWeight((0, 1))));
        assert_eq!(diagonal.validate(), Err(GraphError::NonZeroDiagonal(1)));
    }

    #[test]
    fn display_works() {
        let matrix = CostMatrix::new(vec![vec![0, 12], vec![7, 0]]);

        assert_eq!(format!("{}", matrix), "   0   12 \n   7    0 \n");
    }
}
