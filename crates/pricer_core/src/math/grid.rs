//! Evenly spaced sampling grids.

use crate::traits::Float;

/// Evenly spaced points over `[start, end]`.
///
/// The first point is exactly `start` and the last exactly `end`; interior
/// points are `start + i * (end - start) / (count - 1)`. A descending range
/// (`start > end`) yields a descending grid.
///
/// # Edge cases
/// - `count == 0` returns an empty vector
/// - `count == 1` returns `[start]`
///
/// # Examples
/// ```
/// use pricer_core::math::grid::linspace;
///
/// let grid = linspace(0.0_f64, 1.0, 5);
/// assert_eq!(grid, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace<T: Float>(start: T, end: T, count: usize) -> Vec<T> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = count - 1;
            let intervals = T::from(last).unwrap_or_else(T::one);
            let step = (end - start) / intervals;
            (0..count)
                .map(|i| {
                    if i == last {
                        end
                    } else {
                        start + T::from(i).unwrap_or_else(T::zero) * step
                    }
                })
                .collect()
        }
    }
}
