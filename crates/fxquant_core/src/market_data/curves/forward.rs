//! Interpolated forward curve built from quoted anchors.

use crate::market_data::error::MarketDataError;
use crate::math::interpolators::{Interpolator, LinearInterpolator};
use num_traits::Float;

/// Maturity tolerance (in years) inside which a sample target is treated
/// as hitting an anchor and the quoted value is passed through unmodified.
pub const ANCHOR_TOLERANCE_YEARS: f64 = 0.01;

/// A quoted curve pillar.
///
/// Anchors carry the originating instrument so that sampled output can be
/// traced back to its market quote.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveAnchor<T: Float> {
    /// Time to maturity in years.
    pub maturity_years: T,
    /// Continuously compounded rate as a fraction (0.05 = 5%).
    pub rate: T,
    /// Display label, e.g. "2Y".
    pub label: String,
    /// Identifier of the quoted instrument, e.g. "USSW2 Curncy".
    pub source_ticker: String,
}

impl<T: Float> CurveAnchor<T> {
    /// Creates a new anchor.
    pub fn new(
        maturity_years: T,
        rate: T,
        label: impl Into<String>,
        source_ticker: impl Into<String>,
    ) -> Self {
        Self {
            maturity_years,
            rate,
            label: label.into(),
            source_ticker: source_ticker.into(),
        }
    }
}

/// A sampled point on a curve.
///
/// Either a quoted anchor passed through unmodified (`interpolated ==
/// false`, `source_ticker` present) or a value interpolated between
/// anchors (`interpolated == true`, no source ticker).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint<T: Float> {
    /// Time to maturity in years.
    pub maturity_years: T,
    /// Rate as a fraction.
    pub rate: T,
    /// Display label, e.g. "18M".
    pub label: String,
    /// Originating instrument for anchor points; `None` for interpolated.
    pub source_ticker: Option<String>,
    /// Whether the rate was interpolated rather than quoted.
    pub interpolated: bool,
}

/// Piecewise-linear forward curve over quoted anchors.
///
/// # Sampling semantics
///
/// - Targets outside the anchor domain are dropped from the output, not
///   extrapolated.
/// - Targets within [`ANCHOR_TOLERANCE_YEARS`] of an anchor return that
///   anchor's quoted rate, label and ticker unmodified, preserving
///   bid/ask-sourced values exactly.
/// - All other targets are linearly interpolated.
///
/// # Example
///
/// ```
/// use fxquant_core::market_data::curves::{CurveAnchor, ForwardCurve};
///
/// let curve = ForwardCurve::new(vec![
///     CurveAnchor::new(0.25, 0.0535, "3M", "US0003M Index"),
///     CurveAnchor::new(1.0, 0.0510, "1Y", "US0012M Index"),
///     CurveAnchor::new(2.0, 0.0465, "2Y", "USSW2 Curncy"),
/// ]).unwrap();
///
/// let points = curve.sample(&[0.5, 1.0, 10.0]);
/// assert_eq!(points.len(), 2); // 10Y is outside the domain and dropped
/// assert!(points[0].interpolated);
/// assert!(!points[1].interpolated);
/// ```
#[derive(Debug, Clone)]
pub struct ForwardCurve<T: Float> {
    /// Anchors sorted by maturity
    anchors: Vec<CurveAnchor<T>>,
}

impl<T: Float> ForwardCurve<T> {
    /// Construct a curve from quoted anchors.
    ///
    /// Anchors are sorted by maturity during construction.
    ///
    /// # Errors
    ///
    /// * `MarketDataError::InsufficientData` - fewer than 2 anchors
    /// * `MarketDataError::InvalidMaturity` - non-positive anchor maturity
    /// * `MarketDataError::DuplicateMaturity` - two anchors at one maturity
    pub fn new(mut anchors: Vec<CurveAnchor<T>>) -> Result<Self, MarketDataError> {
        if anchors.len() < 2 {
            return Err(MarketDataError::InsufficientData {
                got: anchors.len(),
                need: 2,
            });
        }

        anchors.sort_by(|a, b| {
            a.maturity_years
                .partial_cmp(&b.maturity_years)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        for i in 0..anchors.len() {
            let t = anchors[i].maturity_years;
            if t <= T::zero() {
                return Err(MarketDataError::InvalidMaturity {
                    t: t.to_f64().unwrap_or(0.0),
                });
            }
            if i > 0 && t == anchors[i - 1].maturity_years {
                return Err(MarketDataError::DuplicateMaturity {
                    t: t.to_f64().unwrap_or(0.0),
                });
            }
        }

        Ok(Self { anchors })
    }

    /// Returns the anchors in maturity order.
    #[inline]
    pub fn anchors(&self) -> &[CurveAnchor<T>] {
        &self.anchors
    }

    /// Returns the anchor maturity domain as `(t_min, t_max)`.
    #[inline]
    pub fn domain(&self) -> (T, T) {
        (
            self.anchors[0].maturity_years,
            self.anchors[self.anchors.len() - 1].maturity_years,
        )
    }

    /// Interpolated rate at maturity `t`.
    ///
    /// # Errors
    ///
    /// * `MarketDataError::OutOfBounds` - `t` outside the anchor domain
    pub fn rate_at(&self, t: T) -> Result<T, MarketDataError> {
        let (t_min, t_max) = self.domain();
        if t < t_min || t > t_max {
            return Err(MarketDataError::OutOfBounds {
                x: t.to_f64().unwrap_or(f64::NAN),
                min: t_min.to_f64().unwrap_or(f64::NAN),
                max: t_max.to_f64().unwrap_or(f64::NAN),
            });
        }

        let tenors: Vec<T> = self.anchors.iter().map(|a| a.maturity_years).collect();
        let rates: Vec<T> = self.anchors.iter().map(|a| a.rate).collect();
        let interp = LinearInterpolator::new(&tenors, &rates)?;
        Ok(interp.interpolate(t)?)
    }

    /// Discount factor `D(t) = exp(-r(t) * t)` at maturity `t`.
    ///
    /// `D(0) = 1` by definition.
    ///
    /// # Errors
    ///
    /// * `MarketDataError::InvalidMaturity` - `t < 0`
    /// * `MarketDataError::OutOfBounds` - `t` beyond the anchor domain
    pub fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        if t == T::zero() {
            return Ok(T::one());
        }
        let rate = self.rate_at(t)?;
        Ok((-rate * t).exp())
    }

    /// Sample the curve at the given target maturities.
    ///
    /// Targets outside the anchor domain yield no output point. Targets
    /// within [`ANCHOR_TOLERANCE_YEARS`] of an anchor pass the quoted
    /// anchor through unmodified; everything else is interpolated.
    pub fn sample(&self, targets: &[T]) -> Vec<CurvePoint<T>> {
        let (t_min, t_max) = self.domain();
        let tolerance = T::from(ANCHOR_TOLERANCE_YEARS).unwrap();

        let mut points = Vec::with_capacity(targets.len());
        for &t in targets {
            if t < t_min || t > t_max {
                continue;
            }

            if let Some(anchor) = self.nearest_anchor_within(t, tolerance) {
                points.push(CurvePoint {
                    maturity_years: anchor.maturity_years,
                    rate: anchor.rate,
                    label: anchor.label.clone(),
                    source_ticker: Some(anchor.source_ticker.clone()),
                    interpolated: false,
                });
                continue;
            }

            // Inside the domain and away from every anchor: interpolation
            // cannot fail here.
            if let Ok(rate) = self.rate_at(t) {
                points.push(CurvePoint {
                    maturity_years: t,
                    rate,
                    label: tenor_label(t.to_f64().unwrap_or(0.0)),
                    source_ticker: None,
                    interpolated: true,
                });
            }
        }
        points
    }

    /// Nearest anchor within `tolerance` of `t`, if any.
    fn nearest_anchor_within(&self, t: T, tolerance: T) -> Option<&CurveAnchor<T>> {
        self.anchors
            .iter()
            .filter(|a| (a.maturity_years - t).abs() <= tolerance)
            .min_by(|a, b| {
                let da = (a.maturity_years - t).abs();
                let db = (b.maturity_years - t).abs();
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
    }
}

/// Human-readable tenor label for a maturity in years.
///
/// Sub-year and broken-date maturities render in months ("6M", "18M"),
/// whole years in years ("2Y").
fn tenor_label(years: f64) -> String {
    let months = (years * 12.0).round() as i64;
    if months >= 12 && months % 12 == 0 {
        format!("{}Y", months / 12)
    } else {
        format!("{}M", months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn usd_anchors() -> Vec<CurveAnchor<f64>> {
        vec![
            CurveAnchor::new(0.25, 0.0535, "3M", "US0003M Index"),
            CurveAnchor::new(1.0, 0.0510, "1Y", "US0012M Index"),
            CurveAnchor::new(2.0, 0.0465, "2Y", "USSW2 Curncy"),
            CurveAnchor::new(5.0, 0.0415, "5Y", "USSW5 Curncy"),
        ]
    }

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_new_valid() {
        let curve = ForwardCurve::new(usd_anchors()).unwrap();
        assert_eq!(curve.domain(), (0.25, 5.0));
        assert_eq!(curve.anchors().len(), 4);
    }

    #[test]
    fn test_new_sorts_anchors() {
        let curve = ForwardCurve::new(vec![
            CurveAnchor::new(2.0, 0.0465, "2Y", "USSW2 Curncy"),
            CurveAnchor::new(0.25, 0.0535, "3M", "US0003M Index"),
        ])
        .unwrap();
        assert_eq!(curve.anchors()[0].label, "3M");
        assert_eq!(curve.domain(), (0.25, 2.0));
    }

    #[test]
    fn test_new_insufficient_data() {
        let result = ForwardCurve::new(vec![CurveAnchor::new(1.0, 0.05, "1Y", "X")]);
        assert!(result.is_err());
        match result.unwrap_err() {
            MarketDataError::InsufficientData { got, need } => {
                assert_eq!(got, 1);
                assert_eq!(need, 2);
            }
            _ => panic!("Expected InsufficientData error"),
        }
    }

    #[test]
    fn test_new_negative_maturity() {
        let result = ForwardCurve::new(vec![
            CurveAnchor::new(-0.5, 0.05, "?", "X"),
            CurveAnchor::new(1.0, 0.05, "1Y", "Y"),
        ]);
        assert!(result.is_err());
        match result.unwrap_err() {
            MarketDataError::InvalidMaturity { .. } => {}
            _ => panic!("Expected InvalidMaturity error"),
        }
    }

    #[test]
    fn test_new_duplicate_maturity() {
        let result = ForwardCurve::new(vec![
            CurveAnchor::new(1.0, 0.05, "1Y", "X"),
            CurveAnchor::new(1.0, 0.051, "1Y", "Y"),
        ]);
        assert!(result.is_err());
        match result.unwrap_err() {
            MarketDataError::DuplicateMaturity { t } => assert_eq!(t, 1.0),
            _ => panic!("Expected DuplicateMaturity error"),
        }
    }

    // ========================================
    // Rate Lookup Tests
    // ========================================

    #[test]
    fn test_rate_at_anchor() {
        let curve = ForwardCurve::new(usd_anchors()).unwrap();
        assert_relative_eq!(curve.rate_at(1.0).unwrap(), 0.0510, epsilon = 1e-12);
    }

    #[test]
    fn test_rate_at_midpoint() {
        let curve = ForwardCurve::new(usd_anchors()).unwrap();
        // Midpoint of 1Y (0.0510) and 2Y (0.0465)
        assert_relative_eq!(curve.rate_at(1.5).unwrap(), 0.04875, epsilon = 1e-12);
    }

    #[test]
    fn test_rate_at_out_of_bounds() {
        let curve = ForwardCurve::new(usd_anchors()).unwrap();
        assert!(curve.rate_at(0.1).is_err());
        assert!(curve.rate_at(10.0).is_err());
    }

    #[test]
    fn test_discount_factor() {
        let curve = ForwardCurve::new(usd_anchors()).unwrap();
        let df = curve.discount_factor(1.0).unwrap();
        assert_relative_eq!(df, (-0.0510_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_discount_factor_at_zero() {
        let curve = ForwardCurve::new(usd_anchors()).unwrap();
        assert_relative_eq!(curve.discount_factor(0.0).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_discount_factor_negative_maturity() {
        let curve = ForwardCurve::new(usd_anchors()).unwrap();
        let result = curve.discount_factor(-1.0);
        assert!(result.is_err());
        match result.unwrap_err() {
            MarketDataError::InvalidMaturity { t } => assert_eq!(t, -1.0),
            _ => panic!("Expected InvalidMaturity error"),
        }
    }

    // ========================================
    // Sampling Tests
    // ========================================

    #[test]
    fn test_sample_passes_anchor_through() {
        let curve = ForwardCurve::new(usd_anchors()).unwrap();
        let points = curve.sample(&[2.0]);

        assert_eq!(points.len(), 1);
        let p = &points[0];
        assert!(!p.interpolated);
        assert_relative_eq!(p.rate, 0.0465, epsilon = 1e-15);
        assert_eq!(p.label, "2Y");
        assert_eq!(p.source_ticker.as_deref(), Some("USSW2 Curncy"));
    }

    #[test]
    fn test_sample_anchor_within_tolerance() {
        let curve = ForwardCurve::new(usd_anchors()).unwrap();
        // 2.005 is within 0.01y of the 2Y anchor
        let points = curve.sample(&[2.005]);

        assert_eq!(points.len(), 1);
        assert!(!points[0].interpolated);
        assert_relative_eq!(points[0].maturity_years, 2.0, epsilon = 1e-15);
        assert_relative_eq!(points[0].rate, 0.0465, epsilon = 1e-15);
    }

    #[test]
    fn test_sample_interpolated_point() {
        let curve = ForwardCurve::new(usd_anchors()).unwrap();
        let points = curve.sample(&[1.5]);

        assert_eq!(points.len(), 1);
        let p = &points[0];
        assert!(p.interpolated);
        assert!(p.source_ticker.is_none());
        assert_eq!(p.label, "18M");
        assert_relative_eq!(p.rate, 0.04875, epsilon = 1e-12);
    }

    #[test]
    fn test_sample_drops_out_of_domain_targets() {
        let curve = ForwardCurve::new(usd_anchors()).unwrap();
        // Below the first anchor and above the last: no output points
        let points = curve.sample(&[0.05, 7.0, 30.0]);
        assert!(points.is_empty());
    }

    #[test]
    fn test_sample_mixed_targets() {
        let curve = ForwardCurve::new(usd_anchors()).unwrap();
        let points = curve.sample(&[0.1, 0.5, 1.0, 3.0, 10.0]);

        // 0.1 and 10.0 dropped; 0.5 and 3.0 interpolated; 1.0 quoted
        assert_eq!(points.len(), 3);
        assert!(points[0].interpolated);
        assert!(!points[1].interpolated);
        assert!(points[2].interpolated);
    }

    #[test]
    fn test_sample_empty_targets() {
        let curve = ForwardCurve::new(usd_anchors()).unwrap();
        assert!(curve.sample(&[]).is_empty());
    }

    // ========================================
    // Label Tests
    // ========================================

    #[test]
    fn test_tenor_label_months() {
        assert_eq!(tenor_label(0.25), "3M");
        assert_eq!(tenor_label(0.5), "6M");
        assert_eq!(tenor_label(1.5), "18M");
    }

    #[test]
    fn test_tenor_label_years() {
        assert_eq!(tenor_label(1.0), "1Y");
        assert_eq!(tenor_label(2.0), "2Y");
        assert_eq!(tenor_label(10.0), "10Y");
    }
}
