//! Core numeric traits.
//!
//! This module re-exports the generic floating-point abstraction used by the
//! finite-difference and grid operators, so downstream crates can write
//! `T: Float` without depending on `num-traits` directly.

/// Generic floating-point trait for numeric computations.
///
/// # Type Safety
/// All implementing types must support:
/// - Arithmetic operations (+, -, *, /)
/// - Comparisons (PartialOrd)
/// - Mathematical functions (exp, ln, powf, etc.)
/// - Copy and Clone semantics
///
/// # Examples
/// ```
/// use pricer_core::traits::Float;
///
/// fn decay<T: Float>(ratio: T, exponent: T) -> T {
///     (T::one() + ratio).powf(-exponent)
/// }
///
/// let value: f64 = decay(2.5, 2.0);
/// assert!((value - 1.0 / 12.25).abs() < 1e-12);
/// ```
pub use num_traits::Float;
