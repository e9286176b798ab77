//! # pricer_core: Numerical Foundation for the Price/Revenue Model Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - Central finite-difference operators (`math::finite_difference`)
//! - Evenly spaced sampling grids (`math::grid`)
//! - Generic floating-point trait re-export (`traits`)
//! - Error types: `NumericError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::finite_difference::{central_first, DEFAULT_STEP};
//! use pricer_core::math::grid::linspace;
//! use pricer_core::types::NumericError;
//!
//! let square = |x: f64| -> Result<f64, NumericError> { Ok(x * x) };
//! let slope = central_first(square, 3.0, DEFAULT_STEP).unwrap();
//! # assert!((slope - 6.0).abs() < 1e-6);
//!
//! let grid = linspace(1.0_f64, 200.0, 400);
//! assert_eq!(grid.len(), 400);
//! assert_eq!(grid[399], 200.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `NumericError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
