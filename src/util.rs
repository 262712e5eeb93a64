mod label;
mod num_traits;

pub use label::{city_label, route_labels};
pub use crate::util::num_traits::Weight;
