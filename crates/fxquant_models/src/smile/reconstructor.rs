//! Risk-reversal/butterfly smile reconstruction.

use std::fmt;

use num_traits::Float;

use super::error::SmileError;

/// Standard delta buckets used in FX smile quoting.
///
/// Quotes arrive for a fixed ladder of out-of-the-money deltas; the ATM
/// level is quoted separately and is not a bucket.
///
/// # Example
///
/// ```
/// use fxquant_models::smile::DeltaBucket;
///
/// assert_eq!(DeltaBucket::D25.label(), "25D");
/// assert!((DeltaBucket::D25.delta() - 0.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeltaBucket {
    /// 5 delta
    D5,
    /// 10 delta
    D10,
    /// 15 delta
    D15,
    /// 25 delta
    D25,
    /// 35 delta
    D35,
}

impl DeltaBucket {
    /// Returns the bucket delta as a fraction.
    #[inline]
    pub fn delta(&self) -> f64 {
        match self {
            DeltaBucket::D5 => 0.05,
            DeltaBucket::D10 => 0.10,
            DeltaBucket::D15 => 0.15,
            DeltaBucket::D25 => 0.25,
            DeltaBucket::D35 => 0.35,
        }
    }

    /// Returns the market label, e.g. "25D".
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            DeltaBucket::D5 => "5D",
            DeltaBucket::D10 => "10D",
            DeltaBucket::D15 => "15D",
            DeltaBucket::D25 => "25D",
            DeltaBucket::D35 => "35D",
        }
    }

    /// Returns all buckets from the far wing inwards.
    #[inline]
    pub fn all() -> [DeltaBucket; 5] {
        [
            DeltaBucket::D5,
            DeltaBucket::D10,
            DeltaBucket::D15,
            DeltaBucket::D25,
            DeltaBucket::D35,
        ]
    }
}

impl fmt::Display for DeltaBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Mid risk-reversal and butterfly quotes for one delta bucket.
///
/// `None` marks a quote the market data service returned as null; it is
/// never silently treated as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BucketQuote<T: Float> {
    /// Delta bucket this quote belongs to.
    pub bucket: DeltaBucket,
    /// Mid risk-reversal quote, if available.
    pub risk_reversal: Option<T>,
    /// Mid butterfly quote, if available.
    pub butterfly: Option<T>,
}

impl<T: Float> BucketQuote<T> {
    /// Creates a quote with possibly missing sides.
    pub fn new(bucket: DeltaBucket, risk_reversal: Option<T>, butterfly: Option<T>) -> Self {
        Self {
            bucket,
            risk_reversal,
            butterfly,
        }
    }

    /// Creates a fully populated quote.
    pub fn complete(bucket: DeltaBucket, risk_reversal: T, butterfly: T) -> Self {
        Self::new(bucket, Some(risk_reversal), Some(butterfly))
    }
}

/// What to do with a bucket whose risk-reversal or butterfly is missing.
///
/// The upstream components disagreed on this: some dropped the bucket,
/// some assumed a flat skew. The choice is an explicit configuration of
/// the reconstructor rather than a per-call-site accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingQuotePolicy {
    /// Skip the bucket and report it as a gap (default).
    #[default]
    Omit,
    /// Substitute zero for the missing quote (flat-skew assumption).
    FlatSkew,
}

/// Which side of a bucket quote was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingQuote {
    /// The risk-reversal quote was null.
    RiskReversal,
    /// The butterfly quote was null.
    Butterfly,
    /// Both quotes were null.
    Both,
}

impl fmt::Display for MissingQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingQuote::RiskReversal => write!(f, "risk reversal"),
            MissingQuote::Butterfly => write!(f, "butterfly"),
            MissingQuote::Both => write!(f, "risk reversal and butterfly"),
        }
    }
}

/// A bucket omitted from reconstruction because of missing market data.
///
/// Gaps are local: they never invalidate the other buckets of the slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteGap {
    /// The affected bucket.
    pub bucket: DeltaBucket,
    /// The missing quote side(s).
    pub missing: MissingQuote,
}

/// Reconstructed put/call implied vols for one delta bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmilePoint<T: Float> {
    /// Delta bucket.
    pub bucket: DeltaBucket,
    /// Implied volatility of the put at this delta.
    pub put_vol: T,
    /// Implied volatility of the call at this delta.
    pub call_vol: T,
}

/// A reconstructed smile for one tenor.
///
/// Derived data only; recomputed on every request and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct SmileSlice<T: Float> {
    atm_vol: T,
    points: Vec<SmilePoint<T>>,
    gaps: Vec<QuoteGap>,
}

impl<T: Float> SmileSlice<T> {
    /// Returns the at-the-money volatility.
    #[inline]
    pub fn atm_vol(&self) -> T {
        self.atm_vol
    }

    /// Returns the reconstructed points in quote order.
    #[inline]
    pub fn points(&self) -> &[SmilePoint<T>] {
        &self.points
    }

    /// Returns the buckets omitted for missing quotes.
    #[inline]
    pub fn gaps(&self) -> &[QuoteGap] {
        &self.gaps
    }

    /// Whether the slice has a proper smile shape.
    ///
    /// A proper smile prices every wing at or above the ATM level: for
    /// each bucket, both the put and the call vol must be >= atm. An
    /// improper shape is surfaced here, never auto-corrected.
    pub fn is_proper(&self) -> bool {
        self.points
            .iter()
            .all(|p| p.put_vol >= self.atm_vol && p.call_vol >= self.atm_vol)
    }
}

/// Reconstructs put/call implied vols from ATM + risk-reversal/butterfly
/// quotes.
///
/// ```text
/// σ_put(δ)  = σ_atm - rr(δ)/2 + bf(δ)
/// σ_call(δ) = σ_atm + rr(δ)/2 + bf(δ)
/// ```
///
/// Buckets with missing quotes are handled per `policy`: omitted and
/// reported as gaps, or completed with a zero flat-skew substitute.
///
/// # Errors
///
/// * `SmileError::InvalidAtmVol` - non-positive or non-finite ATM vol
///
/// # Examples
///
/// ```
/// use fxquant_models::smile::{reconstruct, BucketQuote, DeltaBucket, MissingQuotePolicy};
///
/// let quotes = [
///     BucketQuote::complete(DeltaBucket::D25, -0.0025_f64, 0.0015),
///     BucketQuote::complete(DeltaBucket::D10, -0.0040, 0.0035),
/// ];
///
/// let slice = reconstruct(0.10, &quotes, MissingQuotePolicy::Omit).unwrap();
/// assert_eq!(slice.points().len(), 2);
/// assert!(slice.gaps().is_empty());
/// ```
pub fn reconstruct<T: Float>(
    atm_vol: T,
    quotes: &[BucketQuote<T>],
    policy: MissingQuotePolicy,
) -> Result<SmileSlice<T>, SmileError> {
    if atm_vol <= T::zero() || !atm_vol.is_finite() {
        return Err(SmileError::InvalidAtmVol {
            atm_vol: atm_vol.to_f64().unwrap_or(f64::NAN),
        });
    }

    let half = T::from(0.5).unwrap();
    let mut points = Vec::with_capacity(quotes.len());
    let mut gaps = Vec::new();

    for quote in quotes {
        let missing = match (quote.risk_reversal, quote.butterfly) {
            (Some(_), Some(_)) => None,
            (None, Some(_)) => Some(MissingQuote::RiskReversal),
            (Some(_), None) => Some(MissingQuote::Butterfly),
            (None, None) => Some(MissingQuote::Both),
        };

        let (rr, bf) = match (missing, policy) {
            (Some(m), MissingQuotePolicy::Omit) => {
                gaps.push(QuoteGap {
                    bucket: quote.bucket,
                    missing: m,
                });
                continue;
            }
            _ => (
                quote.risk_reversal.unwrap_or_else(T::zero),
                quote.butterfly.unwrap_or_else(T::zero),
            ),
        };

        points.push(SmilePoint {
            bucket: quote.bucket,
            put_vol: atm_vol - rr * half + bf,
            call_vol: atm_vol + rr * half + bf,
        });
    }

    Ok(SmileSlice {
        atm_vol,
        points,
        gaps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn eurusd_1m_quotes() -> Vec<BucketQuote<f64>> {
        // EURUSD-style 1M quotes: negative rr (puts bid over calls),
        // positive bf
        vec![
            BucketQuote::complete(DeltaBucket::D5, -0.0110, 0.0085),
            BucketQuote::complete(DeltaBucket::D10, -0.0080, 0.0050),
            BucketQuote::complete(DeltaBucket::D15, -0.0060, 0.0035),
            BucketQuote::complete(DeltaBucket::D25, -0.0040, 0.0020),
            BucketQuote::complete(DeltaBucket::D35, -0.0020, 0.0010),
        ]
    }

    // ==========================================================
    // DeltaBucket Tests
    // ==========================================================

    #[test]
    fn test_bucket_deltas() {
        assert_relative_eq!(DeltaBucket::D5.delta(), 0.05);
        assert_relative_eq!(DeltaBucket::D10.delta(), 0.10);
        assert_relative_eq!(DeltaBucket::D15.delta(), 0.15);
        assert_relative_eq!(DeltaBucket::D25.delta(), 0.25);
        assert_relative_eq!(DeltaBucket::D35.delta(), 0.35);
    }

    #[test]
    fn test_bucket_labels() {
        for bucket in DeltaBucket::all() {
            assert_eq!(format!("{}", bucket), bucket.label());
        }
        assert_eq!(DeltaBucket::D10.label(), "10D");
    }

    #[test]
    fn test_bucket_all_ordering() {
        let all = DeltaBucket::all();
        assert_eq!(all.len(), 5);
        for pair in all.windows(2) {
            assert!(pair[0].delta() < pair[1].delta());
        }
    }

    // ==========================================================
    // Reconstruction Tests
    // ==========================================================

    #[test]
    fn test_reconstruct_formulas() {
        let atm = 0.10;
        let slice = reconstruct(
            atm,
            &[BucketQuote::complete(DeltaBucket::D25, -0.0040, 0.0020)],
            MissingQuotePolicy::Omit,
        )
        .unwrap();

        let p = slice.points()[0];
        // put = 0.10 - (-0.004)/2 + 0.002 = 0.104
        assert_relative_eq!(p.put_vol, 0.104, epsilon = 1e-12);
        // call = 0.10 + (-0.004)/2 + 0.002 = 0.100
        assert_relative_eq!(p.call_vol, 0.100, epsilon = 1e-12);
    }

    #[test]
    fn test_call_minus_put_equals_risk_reversal() {
        let slice = reconstruct(0.10, &eurusd_1m_quotes(), MissingQuotePolicy::Omit).unwrap();
        let quotes = eurusd_1m_quotes();

        for (point, quote) in slice.points().iter().zip(quotes.iter()) {
            let rr = quote.risk_reversal.unwrap();
            assert_relative_eq!(point.call_vol - point.put_vol, rr, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_strangle_mid_minus_atm_equals_butterfly() {
        let slice = reconstruct(0.10, &eurusd_1m_quotes(), MissingQuotePolicy::Omit).unwrap();
        let quotes = eurusd_1m_quotes();

        for (point, quote) in slice.points().iter().zip(quotes.iter()) {
            let bf = quote.butterfly.unwrap();
            let strangle_mid = (point.call_vol + point.put_vol) / 2.0;
            assert_relative_eq!(strangle_mid - 0.10, bf, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_reconstruct_invalid_atm() {
        let quotes = eurusd_1m_quotes();

        for bad_atm in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let result = reconstruct(bad_atm, &quotes, MissingQuotePolicy::Omit);
            assert!(result.is_err(), "ATM {} should be rejected", bad_atm);
        }
    }

    #[test]
    fn test_reconstruct_empty_quotes() {
        let slice = reconstruct(0.10_f64, &[], MissingQuotePolicy::Omit).unwrap();
        assert!(slice.points().is_empty());
        assert!(slice.gaps().is_empty());
        assert!(slice.is_proper());
    }

    // ==========================================================
    // Missing Quote Handling
    // ==========================================================

    #[test]
    fn test_omit_policy_skips_bucket_and_records_gap() {
        let quotes = [
            BucketQuote::complete(DeltaBucket::D25, -0.0040, 0.0020),
            BucketQuote::new(DeltaBucket::D10, None, Some(0.0050)),
        ];

        let slice = reconstruct(0.10, &quotes, MissingQuotePolicy::Omit).unwrap();

        assert_eq!(slice.points().len(), 1);
        assert_eq!(slice.points()[0].bucket, DeltaBucket::D25);

        assert_eq!(slice.gaps().len(), 1);
        let gap = slice.gaps()[0];
        assert_eq!(gap.bucket, DeltaBucket::D10);
        assert_eq!(gap.missing, MissingQuote::RiskReversal);
    }

    #[test]
    fn test_omit_policy_reports_which_side_is_missing() {
        let quotes = [
            BucketQuote::new(DeltaBucket::D25, Some(-0.0040), None),
            BucketQuote::new(DeltaBucket::D10, None, None),
        ];

        let slice = reconstruct(0.10, &quotes, MissingQuotePolicy::Omit).unwrap();
        assert!(slice.points().is_empty());
        assert_eq!(slice.gaps()[0].missing, MissingQuote::Butterfly);
        assert_eq!(slice.gaps()[1].missing, MissingQuote::Both);
    }

    #[test]
    fn test_flat_skew_policy_substitutes_zero() {
        let quotes = [BucketQuote::new(DeltaBucket::D25, None, Some(0.0020))];

        let slice = reconstruct(0.10, &quotes, MissingQuotePolicy::FlatSkew).unwrap();

        assert!(slice.gaps().is_empty());
        let p = slice.points()[0];
        // rr defaulted to 0: put == call == atm + bf
        assert_relative_eq!(p.put_vol, 0.102, epsilon = 1e-12);
        assert_relative_eq!(p.call_vol, 0.102, epsilon = 1e-12);
    }

    #[test]
    fn test_gap_does_not_invalidate_other_buckets() {
        let mut quotes = eurusd_1m_quotes();
        quotes[2] = BucketQuote::new(DeltaBucket::D15, None, None);

        let slice = reconstruct(0.10, &quotes, MissingQuotePolicy::Omit).unwrap();
        assert_eq!(slice.points().len(), 4);
        assert_eq!(slice.gaps().len(), 1);
    }

    #[test]
    fn test_default_policy_is_omit() {
        assert_eq!(MissingQuotePolicy::default(), MissingQuotePolicy::Omit);
    }

    // ==========================================================
    // Smile Shape Tests
    // ==========================================================

    #[test]
    fn test_proper_smile() {
        let slice = reconstruct(0.10, &eurusd_1m_quotes(), MissingQuotePolicy::Omit).unwrap();
        assert!(slice.is_proper());
    }

    #[test]
    fn test_improper_smile_flagged_not_corrected() {
        // rr larger than twice the bf pushes the call wing below ATM
        let quotes = [BucketQuote::complete(DeltaBucket::D25, -0.0100, 0.0010)];
        let slice = reconstruct(0.10, &quotes, MissingQuotePolicy::Omit).unwrap();

        assert!(!slice.is_proper());
        // The offending point is still returned untouched
        let p = slice.points()[0];
        assert_relative_eq!(p.call_vol, 0.0960, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_butterfly_is_still_proper() {
        // bf = 0 and rr = 0 puts both wings exactly at ATM
        let quotes = [BucketQuote::complete(DeltaBucket::D25, 0.0, 0.0)];
        let slice = reconstruct(0.10, &quotes, MissingQuotePolicy::Omit).unwrap();
        assert!(slice.is_proper());
    }

    // ==========================================================
    // Property Tests
    // ==========================================================

    proptest! {
        #[test]
        fn prop_reconstruction_identities(
            atm in 0.01_f64..0.50,
            rr in -0.05_f64..0.05,
            bf in -0.01_f64..0.05,
        ) {
            let quotes = [BucketQuote::complete(DeltaBucket::D25, rr, bf)];
            let slice = reconstruct(atm, &quotes, MissingQuotePolicy::Omit).unwrap();
            let p = slice.points()[0];

            // call - put == rr and (call + put)/2 - atm == bf, exactly up
            // to floating-point rounding
            prop_assert!((p.call_vol - p.put_vol - rr).abs() < 1e-12);
            prop_assert!(((p.call_vol + p.put_vol) / 2.0 - atm - bf).abs() < 1e-12);
        }

        #[test]
        fn prop_flat_skew_never_produces_gaps(
            atm in 0.01_f64..0.50,
            bf in proptest::option::of(-0.01_f64..0.05),
            rr in proptest::option::of(-0.05_f64..0.05),
        ) {
            let quotes = [BucketQuote::new(DeltaBucket::D10, rr, bf)];
            let slice = reconstruct(atm, &quotes, MissingQuotePolicy::FlatSkew).unwrap();
            prop_assert!(slice.gaps().is_empty());
            prop_assert_eq!(slice.points().len(), 1);
        }
    }
}
