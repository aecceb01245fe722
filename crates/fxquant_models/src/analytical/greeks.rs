//! Black-Scholes pricing and Greeks for the option panel.
//!
//! # Mathematical background
//!
//! With spot S, strike K, rate r, volatility σ and expiry T:
//!
//! ```text
//! d₁ = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)
//! d₂ = d₁ - σ·√T
//! ```
//!
//! Greeks follow the panel conventions: vega is quoted per one
//! percentage point of volatility and theta as per-day decay.
//!
//! # Examples
//!
//! ```
//! use fxquant_models::analytical::greeks::{
//!     BlackScholesGreeks, OptionInputs, OptionKind,
//! };
//!
//! let inputs = OptionInputs::new(100.0, 100.0, 0.2, 0.05, 1.0).unwrap();
//! let model = BlackScholesGreeks::new(inputs);
//!
//! let greeks = model.greeks(OptionKind::Call);
//! assert!(greeks.delta > 0.5 && greeks.delta < 1.0);
//! assert!(greeks.gamma > 0.0);
//! ```

use num_traits::Float;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;

/// Option payoff direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionKind {
    /// Call option
    Call,
    /// Put option
    Put,
}

impl OptionKind {
    /// Returns true for calls.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionKind::Call)
    }
}

/// Validated inputs for a single Greeks evaluation.
///
/// Construction rejects the degenerate parameter regions where the
/// closed form divides by zero, so a constructed value always yields
/// finite Greeks.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionInputs<T: Float> {
    /// Spot price (S).
    pub spot: T,
    /// Strike price (K).
    pub strike: T,
    /// Annualised volatility as a fraction (σ).
    pub volatility: T,
    /// Risk-free rate, continuous compounding (r).
    pub rate: T,
    /// Time to expiry in years (T).
    pub expiry: T,
}

impl<T: Float> OptionInputs<T> {
    /// Creates validated inputs.
    ///
    /// # Arguments
    ///
    /// * `spot` - Spot price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `volatility` - Annualised volatility (must be positive)
    /// * `rate` - Risk-free rate (can be negative)
    /// * `expiry` - Time to expiry in years (must be positive)
    ///
    /// # Errors
    ///
    /// Returns `AnalyticalError` naming the offending parameter. Zero
    /// volatility and zero expiry are rejected here; they would divide
    /// by zero in d₁.
    pub fn new(spot: T, strike: T, volatility: T, rate: T, expiry: T) -> Result<Self, AnalyticalError> {
        if spot <= T::zero() {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(0.0),
            });
        }
        if strike <= T::zero() {
            return Err(AnalyticalError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(0.0),
            });
        }
        if volatility <= T::zero() {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(0.0),
            });
        }
        if expiry <= T::zero() {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(0.0),
            });
        }

        Ok(Self {
            spot,
            strike,
            volatility,
            rate,
            expiry,
        })
    }
}

/// Computed sensitivities for one option.
///
/// Vega is per one percentage point of volatility; theta is per-day
/// decay (annual theta divided by 365).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksResult<T: Float> {
    /// ∂V/∂S
    pub delta: T,
    /// ∂²V/∂S²
    pub gamma: T,
    /// ∂V/∂σ per 1% volatility move
    pub vega: T,
    /// ∂V/∂t per calendar day
    pub theta: T,
}

/// Black-Scholes Greeks evaluator.
///
/// Pre-computes d₁, d₂, √T and the discount factor from validated
/// inputs; each greek is then a cheap closed-form lookup.
#[derive(Debug, Clone)]
pub struct BlackScholesGreeks<T: Float> {
    inputs: OptionInputs<T>,
    /// d₁ term.
    d1: T,
    /// d₂ term.
    d2: T,
    /// √T
    sqrt_t: T,
    /// e^(-r·T)
    discount: T,
}

impl<T: Float> BlackScholesGreeks<T> {
    /// Creates an evaluator from validated inputs.
    pub fn new(inputs: OptionInputs<T>) -> Self {
        let half = T::from(0.5).unwrap();

        let sqrt_t = inputs.expiry.sqrt();
        let vol_sqrt_t = inputs.volatility * sqrt_t;

        // d₁ = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)
        let log_moneyness = (inputs.spot / inputs.strike).ln();
        let drift = (inputs.rate + half * inputs.volatility * inputs.volatility) * inputs.expiry;
        let d1 = (log_moneyness + drift) / vol_sqrt_t;

        // d₂ = d₁ - σ·√T
        let d2 = d1 - vol_sqrt_t;

        let discount = (-inputs.rate * inputs.expiry).exp();

        Self {
            inputs,
            d1,
            d2,
            sqrt_t,
            discount,
        }
    }

    /// Returns the inputs.
    #[inline]
    pub fn inputs(&self) -> &OptionInputs<T> {
        &self.inputs
    }

    /// Returns d₁.
    #[inline]
    pub fn d1(&self) -> T {
        self.d1
    }

    /// Returns d₂.
    #[inline]
    pub fn d2(&self) -> T {
        self.d2
    }

    /// Option premium.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂);  P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    pub fn price(&self, kind: OptionKind) -> T {
        match kind {
            OptionKind::Call => {
                self.inputs.spot * norm_cdf(self.d1)
                    - self.inputs.strike * self.discount * norm_cdf(self.d2)
            }
            OptionKind::Put => {
                self.inputs.strike * self.discount * norm_cdf(-self.d2)
                    - self.inputs.spot * norm_cdf(-self.d1)
            }
        }
    }

    /// Delta: N(d₁) for calls, N(d₁) - 1 for puts.
    pub fn delta(&self, kind: OptionKind) -> T {
        let n_d1 = norm_cdf(self.d1);
        match kind {
            OptionKind::Call => n_d1,
            OptionKind::Put => n_d1 - T::one(),
        }
    }

    /// Gamma: φ(d₁) / (S·σ·√T). Identical for calls and puts.
    pub fn gamma(&self) -> T {
        norm_pdf(self.d1) / (self.inputs.spot * self.inputs.volatility * self.sqrt_t)
    }

    /// Vega per 1% volatility move: S·φ(d₁)·√T / 100.
    pub fn vega(&self) -> T {
        let hundred = T::from(100.0).unwrap();
        self.inputs.spot * norm_pdf(self.d1) * self.sqrt_t / hundred
    }

    /// Theta as per-day decay.
    ///
    /// ```text
    /// θ_call = [-(S·φ(d₁)·σ)/(2√T) - r·K·e^(-rT)·N(d₂)] / 365
    /// θ_put  = [-(S·φ(d₁)·σ)/(2√T) + r·K·e^(-rT)·N(-d₂)] / 365
    /// ```
    pub fn theta(&self, kind: OptionKind) -> T {
        let two = T::from(2.0).unwrap();
        let days_per_year = T::from(365.0).unwrap();

        let decay = -(self.inputs.spot * norm_pdf(self.d1) * self.inputs.volatility)
            / (two * self.sqrt_t);
        let carry = self.inputs.rate * self.inputs.strike * self.discount;

        let annual = match kind {
            OptionKind::Call => decay - carry * norm_cdf(self.d2),
            OptionKind::Put => decay + carry * norm_cdf(-self.d2),
        };

        annual / days_per_year
    }

    /// Full sensitivity set for the panel.
    pub fn greeks(&self, kind: OptionKind) -> GreeksResult<T> {
        GreeksResult {
            delta: self.delta(kind),
            gamma: self.gamma(),
            vega: self.vega(),
            theta: self.theta(kind),
        }
    }
}

/// Convenience function evaluating all Greeks in one call.
///
/// # Errors
///
/// Returns `AnalyticalError` if any input is outside its valid domain.
pub fn evaluate_greeks<T: Float>(
    spot: T,
    strike: T,
    volatility: T,
    rate: T,
    expiry: T,
    kind: OptionKind,
) -> Result<GreeksResult<T>, AnalyticalError> {
    let inputs = OptionInputs::new(spot, strike, volatility, rate, expiry)?;
    Ok(BlackScholesGreeks::new(inputs).greeks(kind))
}
