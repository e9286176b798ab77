//! # Pricer Models (L2: Business Logic)
//!
//! Participation-based price models and the engine that explores them.
//!
//! This crate provides:
//! - Parameter sets, identifiers and validity ranges for each model variant
//! - Hyperbolic and exponential-hyperbolic hybrid price functions
//! - Point evaluation with derivatives and model-health condition flags
//! - Curve sampling over a population domain
//!
//! ## Design Principles
//!
//! - **Enum-based models** for static dispatch
//! - **Caller-owned parameters**: the engine holds only immutable configuration
//! - **Degradation as data**: numeric failures become fallback values plus a
//!   reason, never panics
//!
//! ## Example
//!
//! ```
//! use pricer_models::engine::evaluate;
//! use pricer_models::models::ModelParams;
//!
//! let mut params = ModelParams::default();
//! let result = evaluate(&mut params, 50.0);
//! assert!((result.revenue - 2826.53).abs() < 0.1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod engine;
pub mod models;
