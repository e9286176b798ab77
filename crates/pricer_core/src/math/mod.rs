//! Numerical building blocks shared by every price model.
//!
//! - `finite_difference`: central first/second difference operators over fallible functions
//! - `grid`: evenly spaced sampling grids with exact endpoints

pub mod finite_difference;
pub mod grid;

pub use finite_difference::{central_first, central_second, DifferenceScheme, DEFAULT_STEP};
pub use grid::linspace;
