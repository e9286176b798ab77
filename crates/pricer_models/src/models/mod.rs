//! Parametric price models.
//!
//! This module provides the price functions explored by the engine:
//! - `PriceFunction` trait: Guarded closed-form price plus derived revenue
//! - `ModelParams`: Static dispatch enum over the variants (caller-owned parameter set)
//! - `HyperbolicParams`: `P_min + K / (1 + N/N0)^q`
//! - `HybridParams`: `P_min + K·exp(-q·N/N0) + C / (1 + (N/N1)^r)`
//! - `ModelKind`, `ParamId`, `ParamRange`: Variant selector, identifiers and validity ranges
//!
//! ## Design Philosophy
//!
//! - Static dispatch via enum (not `Box<dyn Trait>`)
//! - Models never divide by a zero reference population; they report it
//! - Revenue is always `price(N) * N`, never a separate formula
//!
//! ## Example
//!
//! ```
//! use pricer_models::models::{HybridParams, ModelParams, PriceFunction};
//!
//! let params = ModelParams::from(HybridParams::default());
//! let price = params.price(50.0).unwrap();
//! assert_eq!(params.revenue(50.0).unwrap(), price * 50.0);
//! ```

pub mod error;
pub mod hybrid;
pub mod hyperbolic;
pub mod model_enum;
pub mod params;
pub mod price_function;

pub use error::{ModelError, ParameterError};
pub use hybrid::HybridParams;
pub use hyperbolic::HyperbolicParams;
pub use model_enum::ModelParams;
pub use params::{ConvexityPolicy, ModelKind, ParamId, ParamRange};
pub use price_function::{PriceFunction, REFERENCE_POPULATION_RESET};
