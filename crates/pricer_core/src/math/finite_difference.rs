//! Central finite-difference operators.
//!
//! # Mathematical Definition
//! ```text
//! f'(x)  ≈ (f(x + h) - f(x - h)) / (2h)
//! f''(x) ≈ (f(x + h) - 2 f(x) + f(x - h)) / h²
//! ```
//!
//! Both operators take a *fallible* function so the caller's guards
//! (zero denominators, invalid powers) apply to every shifted evaluation.
//! Results are approximations whose accuracy is bounded by the step `h`:
//! truncation error is O(h²) but round-off grows as O(ε·|f| / h) for the
//! first derivative and O(ε·|f| / h²) for the second.
//!
//! All functions use generic type parameter `T: num_traits::Float` for f32/f64 support.

use crate::traits::Float;

use crate::types::NumericError;

/// Default differentiation step.
pub const DEFAULT_STEP: f64 = 1e-5;

#[inline]
fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

#[inline]
fn check_step<T: Float>(h: T) -> Result<(), NumericError> {
    if h.is_finite() && h > T::zero() {
        Ok(())
    } else {
        Err(NumericError::InvalidStep { step: to_f64(h) })
    }
}

#[inline]
fn finite<T: Float>(value: T) -> Result<T, NumericError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NumericError::NonFinite {
            value: to_f64(value),
        })
    }
}

/// First derivative by central difference.
///
/// # Arguments
/// * `f` - Function to differentiate; its errors propagate unchanged
/// * `x` - Evaluation point
/// * `h` - Step (must be finite and positive)
///
/// # Errors
/// Propagates any error from `f`; returns `NumericError::InvalidStep` for a bad
/// step and `NumericError::NonFinite` if the quotient is not finite.
///
/// # Examples
/// ```
/// use pricer_core::math::finite_difference::central_first;
/// use pricer_core::types::NumericError;
///
/// let cube = |x: f64| -> Result<f64, NumericError> { Ok(x * x * x) };
/// let slope = central_first(cube, 2.0, 1e-5).unwrap();
/// assert!((slope - 12.0).abs() < 1e-6);
/// ```
pub fn central_first<T, E, F>(f: F, x: T, h: T) -> Result<T, E>
where
    T: Float,
    E: From<NumericError>,
    F: Fn(T) -> Result<T, E>,
{
    check_step(h)?;
    let forward = f(x + h)?;
    let backward = f(x - h)?;
    let two = T::one() + T::one();
    Ok(finite((forward - backward) / (two * h))?)
}

/// Second derivative by central difference.
///
/// # Arguments
/// * `f` - Function to differentiate; its errors propagate unchanged
/// * `x` - Evaluation point
/// * `h` - Step (must be finite and positive)
///
/// # Errors
/// Same as [`central_first`].
///
/// # Examples
/// ```
/// use pricer_core::math::finite_difference::central_second;
/// use pricer_core::types::NumericError;
///
/// let square = |x: f64| -> Result<f64, NumericError> { Ok(x * x) };
/// let curvature = central_second(square, 1.5, 1e-4).unwrap();
/// assert!((curvature - 2.0).abs() < 1e-4);
/// ```
pub fn central_second<T, E, F>(f: F, x: T, h: T) -> Result<T, E>
where
    T: Float,
    E: From<NumericError>,
    F: Fn(T) -> Result<T, E>,
{
    check_step(h)?;
    let forward = f(x + h)?;
    let centre = f(x)?;
    let backward = f(x - h)?;
    let two = T::one() + T::one();
    Ok(finite((forward - two * centre + backward) / (h * h))?)
}

/// A central-difference scheme with a fixed, validated step.
///
/// # Examples
/// ```
/// use pricer_core::math::finite_difference::DifferenceScheme;
/// use pricer_core::types::NumericError;
///
/// let scheme = DifferenceScheme::<f64>::default();
/// let linear = |x: f64| -> Result<f64, NumericError> { Ok(3.0 * x + 1.0) };
/// assert!((scheme.first(linear, 10.0).unwrap() - 3.0).abs() < 1e-8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifferenceScheme<T: Float> {
    step: T,
}

impl<T: Float> DifferenceScheme<T> {
    /// Create a scheme with the given step.
    ///
    /// # Errors
    /// Returns `NumericError::InvalidStep` if `step` is not finite and positive.
    pub fn new(step: T) -> Result<Self, NumericError> {
        check_step(step)?;
        Ok(Self { step })
    }

    /// The differentiation step `h`.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// First derivative of `f` at `x`.
    #[inline]
    pub fn first<E, F>(&self, f: F, x: T) -> Result<T, E>
    where
        E: From<NumericError>,
        F: Fn(T) -> Result<T, E>,
    {
        central_first(f, x, self.step)
    }

    /// Second derivative of `f` at `x`.
    #[inline]
    pub fn second<E, F>(&self, f: F, x: T) -> Result<T, E>
    where
        E: From<NumericError>,
        F: Fn(T) -> Result<T, E>,
    {
        central_second(f, x, self.step)
    }
}

impl<T: Float> Default for DifferenceScheme<T> {
    fn default() -> Self {
        Self {
            step: T::from(DEFAULT_STEP).unwrap_or_else(T::epsilon),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ok<T>(value: T) -> Result<T, NumericError> {
        Ok(value)
    }

    #[test]
    fn test_first_derivative_of_polynomial() {
        let f = |x: f64| ok(x * x * x - 2.0 * x);
        let slope = central_first(f, 2.0, DEFAULT_STEP).unwrap();
        assert_relative_eq!(slope, 10.0, epsilon = 1e-6);
    }

    #[test]
    fn test_second_derivative_of_polynomial() {
        let f = |x: f64| ok(x * x * x);
        let curvature = central_second(f, 2.0, 1e-4).unwrap();
        assert_relative_eq!(curvature, 12.0, epsilon = 1e-4);
    }

    #[test]
    fn test_first_derivative_of_exponential() {
        let f = |x: f64| ok(x.exp());
        let slope = central_first(f, 1.0, DEFAULT_STEP).unwrap();
        assert_relative_eq!(slope, 1.0_f64.exp(), epsilon = 1e-8);
    }

    #[test]
    fn test_works_with_f32() {
        let f = |x: f32| ok(x * x);
        let slope = central_first(f, 1.0_f32, 1e-2).unwrap();
        assert!((slope - 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_invalid_step_rejected() {
        let f = |x: f64| ok(x);
        for step in [0.0, -1e-5, f64::NAN, f64::INFINITY] {
            let result = central_first(f, 1.0, step);
            assert!(matches!(result, Err(NumericError::InvalidStep { .. })));
            let result = central_second(f, 1.0, step);
            assert!(matches!(result, Err(NumericError::InvalidStep { .. })));
        }
    }

    #[test]
    fn test_non_finite_quotient_rejected() {
        let f = |x: f64| ok(if x > 1.0 { f64::INFINITY } else { 0.0 });
        let result = central_first(f, 1.0, DEFAULT_STEP);
        assert!(matches!(result, Err(NumericError::NonFinite { .. })));
    }

    #[test]
    fn test_function_error_propagates() {
        #[derive(Debug, PartialEq)]
        enum Custom {
            Guard,
            Numeric(NumericError),
        }
        impl From<NumericError> for Custom {
            fn from(err: NumericError) -> Self {
                Custom::Numeric(err)
            }
        }

        let f = |x: f64| if x < 1.0 { Err(Custom::Guard) } else { Ok(x) };
        assert_eq!(central_first(f, 1.0, DEFAULT_STEP), Err(Custom::Guard));
        assert_eq!(central_second(f, 1.0, DEFAULT_STEP), Err(Custom::Guard));
        assert!(central_first(f, 2.0, DEFAULT_STEP).is_ok());
    }

    #[test]
    fn test_scheme_default_step() {
        let scheme = DifferenceScheme::<f64>::default();
        assert_eq!(scheme.step(), DEFAULT_STEP);
    }

    #[test]
    fn test_scheme_new_validates() {
        assert!(DifferenceScheme::new(1e-3_f64).is_ok());
        assert_eq!(
            DifferenceScheme::new(0.0_f64),
            Err(NumericError::InvalidStep { step: 0.0 })
        );
    }

    #[test]
    fn test_scheme_matches_free_functions() {
        let scheme = DifferenceScheme::new(1e-4_f64).unwrap();
        let f = |x: f64| ok(x.sin());
        assert_eq!(
            scheme.first(f, 0.3).unwrap(),
            central_first(f, 0.3, 1e-4).unwrap()
        );
        assert_eq!(
            scheme.second(f, 0.3).unwrap(),
            central_second(f, 0.3, 1e-4).unwrap()
        );
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_linear_function_has_constant_slope(
                a in -100.0_f64..100.0,
                b in -100.0_f64..100.0,
                x in -100.0_f64..100.0,
            ) {
                let f = |t: f64| ok(a * t + b);
                let slope = central_first(f, x, 1e-3).unwrap();
                prop_assert!((slope - a).abs() < 1e-6);
            }

            #[test]
            fn test_first_derivative_is_antisymmetric_in_f(x in -10.0_f64..10.0) {
                let f = |t: f64| ok(t.sin());
                let g = |t: f64| ok(-t.sin());
                let df = central_first(f, x, DEFAULT_STEP).unwrap();
                let dg = central_first(g, x, DEFAULT_STEP).unwrap();
                prop_assert_eq!(df, -dg);
            }
        }
    }
}
