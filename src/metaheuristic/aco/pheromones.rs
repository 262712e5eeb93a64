use crate::metaheuristic::Tour;

/// Pheromone levels of all edges between `size` cities.
///
/// Levels are treated as undirected: every deposit raises both `(i, j)` and `(j, i)`,
/// so a matrix that starts symmetric stays symmetric.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    levels: Vec<Vec<f64>>,
}

impl PheromoneMatrix {
    pub const INITIAL_LEVEL: f64 = 1.0;

    pub fn new(size: usize) -> Self {
        PheromoneMatrix {
            levels: vec![vec![Self::INITIAL_LEVEL; size]; size],
        }
    }

    pub fn size(&self) -> usize {
        self.levels.len()
    }

    /// Returns the pheromone level on the edge from one city to another.
    /// Both cities must be below `size`.
    pub fn level(&self, from: usize, to: usize) -> f64 {
        self.levels[from][to]
    }

    pub fn iter_levels(&self) -> impl Iterator<Item = f64> + '_ {
        self.levels.iter().flat_map(|row| row.iter().copied())
    }

    /// Scales every level by `1 - rho`.
    pub fn evaporate(&mut self, rho: f64) {
        let remaining = 1.0 - rho;
        for level in self.levels.iter_mut().flat_map(|row| row.iter_mut()) {
            *level *= remaining;
        }
    }

    /// Adds `amount` to both directions of every edge the tour traverses.
    pub fn deposit(&mut self, tour: &Tour, amount: f64) {
        for (from, to) in tour.iter_edges() {
            self.levels[from][to] += amount;
            self.levels[to][from] += amount;
        }
    }

    /// Returns true if every level equals its reverse, or false otherwise.
    pub fn is_symmetric(&self) -> bool {
        let size = self.size();
        (0..size).all(|i| (i + 1..size).all(|j| self.levels[i][j] == self.levels[j][i]))
    }
}
