//! Standard normal distribution functions.
//!
//! Deterministic polynomial approximations; no statistics crate is used
//! so that results are bit-stable across platforms and dependency
//! upgrades.

use num_traits::Float;

/// Abramowitz and Stegun 7.1.26 coefficients.
const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Error function via the Abramowitz and Stegun 7.1.26 polynomial.
///
/// ```text
/// erf(x) ≈ 1 - (a₁t + a₂t² + a₃t³ + a₄t⁴ + a₅t⁵)·e^(-x²),  t = 1/(1 + p·x)
/// ```
///
/// Maximum absolute error 1.5e-7 for all x. Odd symmetry is applied for
/// negative arguments: erf(-x) = -erf(x).
#[inline]
fn erf_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let x_abs = x.abs();

    let t = one / (one + T::from(P).unwrap() * x_abs);

    // Horner form of a₁t + a₂t² + ... + a₅t⁵
    let poly = t * (T::from(A1).unwrap()
        + t * (T::from(A2).unwrap()
            + t * (T::from(A3).unwrap()
                + t * (T::from(A4).unwrap() + t * T::from(A5).unwrap()))));

    let erf_abs = one - poly * (-x_abs * x_abs).exp();

    if x < T::zero() {
        -erf_abs
    } else {
        erf_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) for X ~ N(0, 1):
///
/// ```text
/// Φ(x) = (1 + erf(x / √2)) / 2
/// ```
///
/// Accurate to about 1e-7 for all finite x.
///
/// # Examples
/// ```
/// use fxquant_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();
    half * (T::one() + erf_approx(x / sqrt_2))
}

/// Standard normal probability density function.
///
/// ```text
/// φ(x) = e^(-x²/2) / √(2π)
/// ```
///
/// # Examples
/// ```
/// use fxquant_models::analytical::distributions::norm_pdf;
///
/// // φ(0) = 1/√(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();
    frac_1_sqrt_2pi * (-half * x * x).exp()
}
