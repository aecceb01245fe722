//! Interpolator trait definition.

use crate::types::InterpolationError;
use num_traits::Float;

/// Generic 1D interpolator over sorted knot points.
///
/// # Contract
///
/// - `interpolate(x)` returns the interpolated value for `x` inside the
///   domain and an `OutOfBounds` error for `x` outside it
/// - `domain()` returns the closed interval of valid query points
pub trait Interpolator<T: Float> {
    /// Interpolate the value at point `x`.
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Return the valid interpolation domain as `(x_min, x_max)`.
    fn domain(&self) -> (T, T);
}
