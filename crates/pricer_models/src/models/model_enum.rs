//! Static dispatch enum over the price model variants.
//!
//! `ModelParams` is the caller-owned parameter set handed to the engine. It
//! dispatches the closed-form price to the selected variant and offers
//! name-based access (`get`, `set`, `assign`) for collaborators that treat
//! the parameters as a mapping from identifier to value.
//!
//! ## Example
//!
//! ```
//! use pricer_models::models::{ModelKind, ModelParams, ParamId, PriceFunction};
//!
//! let mut params = ModelParams::defaults(ModelKind::Hyperbolic);
//! params.assign("K=120").unwrap();
//! assert_eq!(params.get(ParamId::K), Some(120.0));
//! assert!(params.price(50.0).unwrap() > 50.0);
//! ```

use super::error::{ModelError, ParameterError};
use super::hybrid::HybridParams;
use super::hyperbolic::HyperbolicParams;
use super::params::{ModelKind, ParamId};
use super::price_function::PriceFunction;

/// Parameter set of one model variant.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "model", rename_all = "lowercase"))]
pub enum ModelParams {
    /// Hyperbolic model parameters
    Hyperbolic(HyperbolicParams),
    /// Exponential-hyperbolic hybrid parameters
    Hybrid(HybridParams),
}

impl Default for ModelParams {
    fn default() -> Self {
        ModelParams::Hyperbolic(HyperbolicParams::default())
    }
}

impl From<HyperbolicParams> for ModelParams {
    fn from(params: HyperbolicParams) -> Self {
        ModelParams::Hyperbolic(params)
    }
}

impl From<HybridParams> for ModelParams {
    fn from(params: HybridParams) -> Self {
        ModelParams::Hybrid(params)
    }
}

impl ModelParams {
    /// Default parameter set of a variant.
    pub fn defaults(kind: ModelKind) -> Self {
        match kind {
            ModelKind::Hyperbolic => ModelParams::Hyperbolic(HyperbolicParams::default()),
            ModelKind::Hybrid => ModelParams::Hybrid(HybridParams::default()),
        }
    }

    /// Value of a parameter, or `None` if it is not part of the variant.
    pub fn get(&self, id: ParamId) -> Option<f64> {
        match self {
            ModelParams::Hyperbolic(p) => match id {
                ParamId::PMin => Some(p.p_min),
                ParamId::K => Some(p.k),
                ParamId::N0 => Some(p.n0),
                ParamId::Q => Some(p.q),
                _ => None,
            },
            ModelParams::Hybrid(p) => match id {
                ParamId::PMin => Some(p.p_min),
                ParamId::K => Some(p.k),
                ParamId::Q => Some(p.q),
                ParamId::N0 => Some(p.n0),
                ParamId::C => Some(p.c),
                ParamId::R => Some(p.r),
                ParamId::N1 => Some(p.n1),
                _ => None,
            },
        }
    }

    fn slot(&mut self, id: ParamId) -> Option<&mut f64> {
        match self {
            ModelParams::Hyperbolic(p) => match id {
                ParamId::PMin => Some(&mut p.p_min),
                ParamId::K => Some(&mut p.k),
                ParamId::N0 => Some(&mut p.n0),
                ParamId::Q => Some(&mut p.q),
                _ => None,
            },
            ModelParams::Hybrid(p) => match id {
                ParamId::PMin => Some(&mut p.p_min),
                ParamId::K => Some(&mut p.k),
                ParamId::Q => Some(&mut p.q),
                ParamId::N0 => Some(&mut p.n0),
                ParamId::C => Some(&mut p.c),
                ParamId::R => Some(&mut p.r),
                ParamId::N1 => Some(&mut p.n1),
                _ => None,
            },
        }
    }

    /// Set a parameter.
    ///
    /// Values outside the validity range are accepted as-is; use
    /// [`ModelParams::clamp_to_ranges`] to enforce the ranges.
    ///
    /// # Errors
    /// `NotInModel` if the variant has no such parameter, `NonFiniteValue`
    /// for NaN or infinite values.
    pub fn set(&mut self, id: ParamId, value: f64) -> Result<(), ParameterError> {
        let model = self.kind();
        if !value.is_finite() {
            return Err(ParameterError::NonFiniteValue {
                parameter: id,
                value,
            });
        }
        let slot = self.slot(id).ok_or(ParameterError::NotInModel {
            parameter: id,
            model,
        })?;
        *slot = value;
        Ok(())
    }

    /// Set a parameter by its textual identifier.
    pub fn set_by_name(&mut self, name: &str, value: f64) -> Result<(), ParameterError> {
        let id: ParamId = name.parse()?;
        self.set(id, value)
    }

    /// Apply a `NAME=VALUE` assignment and return the identifier and value set.
    ///
    /// # Errors
    /// `MalformedAssignment` if the text has no `=` or the value does not
    /// parse as a number, plus any error from [`ModelParams::set`].
    pub fn assign(&mut self, assignment: &str) -> Result<(ParamId, f64), ParameterError> {
        let (name, raw) = assignment
            .split_once('=')
            .ok_or_else(|| ParameterError::MalformedAssignment(assignment.to_string()))?;
        let id: ParamId = name.parse()?;
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| ParameterError::MalformedAssignment(assignment.to_string()))?;
        self.set(id, value)?;
        Ok((id, value))
    }

    /// Identifier/value pairs in display order.
    pub fn entries(&self) -> Vec<(ParamId, f64)> {
        self.kind()
            .parameter_ranges()
            .iter()
            .filter_map(|range| self.get(range.id).map(|value| (range.id, value)))
            .collect()
    }

    /// Clamp every parameter into its validity range and snap it to the
    /// input step. Returns the identifiers whose value changed.
    pub fn clamp_to_ranges(&mut self) -> Vec<ParamId> {
        let mut changed = Vec::new();
        for range in self.kind().parameter_ranges() {
            if let Some(slot) = self.slot(range.id) {
                let snapped = range.snap(*slot);
                if snapped != *slot {
                    *slot = snapped;
                    changed.push(range.id);
                }
            }
        }
        changed
    }
}

impl PriceFunction for ModelParams {
    fn kind(&self) -> ModelKind {
        match self {
            ModelParams::Hyperbolic(p) => p.kind(),
            ModelParams::Hybrid(p) => p.kind(),
        }
    }

    fn price(&self, n: f64) -> Result<f64, ModelError> {
        match self {
            ModelParams::Hyperbolic(p) => p.price(n),
            ModelParams::Hybrid(p) => p.price(n),
        }
    }

    fn saturated_price(&self) -> f64 {
        match self {
            ModelParams::Hyperbolic(p) => p.saturated_price(),
            ModelParams::Hybrid(p) => p.saturated_price(),
        }
    }

    fn zero_reference(&self) -> Option<ParamId> {
        match self {
            ModelParams::Hyperbolic(p) => p.zero_reference(),
            ModelParams::Hybrid(p) => p.zero_reference(),
        }
    }

    fn reset_zero_references(&mut self) -> Vec<ParamId> {
        match self {
            ModelParams::Hyperbolic(p) => p.reset_zero_references(),
            ModelParams::Hybrid(p) => p.reset_zero_references(),
        }
    }
}
