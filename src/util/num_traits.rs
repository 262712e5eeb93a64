use num_traits::{ToPrimitive, Zero};
use std::fmt::{Debug, Display};

/// Numeric domain of travel costs.
///
/// Integer domains stay integer: solvers only sum costs with `+`, so a tour over `i64`
/// distances reports an exact `i64` total. Conversion to `f64` happens only where a
/// heuristic needs a real number.
pub trait Weight: Copy + PartialOrd + Zero + ToPrimitive + Debug + Display {
    /// Returns the weight as `f64`, or NaN if it has no such representation.
    fn as_f64(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl<T> Weight for T where T: Copy + PartialOrd + Zero + ToPrimitive + Debug + Display {}
