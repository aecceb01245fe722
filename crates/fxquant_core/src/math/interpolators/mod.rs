//! Interpolation methods for curve construction.
//!
//! All interpolators are generic over `T: num_traits::Float`, so they can be
//! used with `f64` and `f32` alike. 1D interpolators implement the
//! [`Interpolator`] trait:
//! - `interpolate(x) -> Result<T, InterpolationError>`: compute the value
//! - `domain() -> (T, T)`: return the valid interpolation range
//!
//! ## Example
//!
//! ```
//! use fxquant_core::math::interpolators::{Interpolator, LinearInterpolator};
//!
//! let interp = LinearInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 2.0, 4.0]).unwrap();
//! assert_eq!(interp.domain(), (0.0, 2.0));
//!
//! let y: f64 = interp.interpolate(1.5).unwrap();
//! assert!((y - 3.0).abs() < 1e-10);
//! ```

mod linear;
mod traits;

pub use linear::LinearInterpolator;
pub use traits::Interpolator;
