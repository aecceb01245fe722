//! Synthetic reference-data snapshots.
//!
//! A canned market that answers [`ReferenceDataRequest`]s the way the
//! remote service would. Integration tests and demos run against it
//! instead of a live endpoint. Rates are quoted in percent, FX spots as
//! bid/ask pairs, and smile quotes follow the `<PAIR>V<TENOR>` /
//! `<PAIR><DELTA>R<TENOR>` / `<PAIR><DELTA>B<TENOR>` ticker scheme.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use rand::Rng;

use fxquant_core::types::Currency;

use crate::tickers::{curve_instruments, CurveKind};
use crate::wire::{
    ReferenceDataRequest, ReferenceDataResponse, ResponseData, SecurityData, FIELD_PX_ASK,
    FIELD_PX_BID, FIELD_PX_LAST,
};

/// Per-ticker quote data.
#[derive(Debug, Clone)]
struct QuoteData {
    bid: Option<f64>,
    ask: Option<f64>,
    last: Option<f64>,
}

impl QuoteData {
    fn last_only(last: f64) -> Self {
        Self {
            bid: None,
            ask: None,
            last: Some(last),
        }
    }

    fn two_sided(mid: f64, spread: f64) -> Self {
        Self {
            bid: Some(mid - spread / 2.0),
            ask: Some(mid + spread / 2.0),
            last: Some(mid),
        }
    }
}

/// Short/long rate endpoints per currency, in percent.
fn base_rates(currency: Currency) -> (f64, f64) {
    match currency {
        Currency::USD => (5.35, 4.05),
        Currency::EUR => (3.90, 2.55),
        Currency::GBP => (5.20, 4.20),
        Currency::JPY => (-0.05, 0.85),
        Currency::CHF => (1.75, 1.20),
        _ => (3.00, 3.00),
    }
}

/// Synthetic market data provider.
///
/// # Example
///
/// ```
/// use fxquant_feeds::snapshot::SyntheticSnapshot;
/// use fxquant_feeds::wire::{ReferenceDataRequest, FIELD_PX_LAST};
///
/// let market = SyntheticSnapshot::new();
/// let request = ReferenceDataRequest::new(["EURUSD Curncy"], [FIELD_PX_LAST]);
///
/// let response = market.serve(&request);
/// let spot = response.security("EURUSD Curncy").unwrap();
/// assert!(spot.success);
/// ```
#[derive(Debug, Clone)]
pub struct SyntheticSnapshot {
    quotes: HashMap<String, QuoteData>,
    as_of: DateTime<Utc>,
}

impl SyntheticSnapshot {
    /// Creates a snapshot with the default canned market.
    pub fn new() -> Self {
        let mut snapshot = Self {
            quotes: HashMap::new(),
            as_of: Utc::now(),
        };
        snapshot.initialize_default_data();
        snapshot
    }

    /// Timestamp of the current snapshot.
    #[inline]
    pub fn as_of(&self) -> DateTime<Utc> {
        self.as_of
    }

    fn initialize_default_data(&mut self) {
        // FX spots with a pip of spread
        self.quotes.insert(
            "EURUSD Curncy".to_string(),
            QuoteData::two_sided(1.0850, 0.0004),
        );
        self.quotes.insert(
            "USDJPY Curncy".to_string(),
            QuoteData::two_sided(150.25, 0.04),
        );
        self.quotes.insert(
            "GBPUSD Curncy".to_string(),
            QuoteData::two_sided(1.2650, 0.0005),
        );
        self.quotes.insert(
            "USDCHF Curncy".to_string(),
            QuoteData::two_sided(0.8820, 0.0004),
        );

        // Curve ladders: linear blend from the short to the long rate
        for currency in Currency::all() {
            let (short, long) = base_rates(currency);
            for kind in [
                CurveKind::MoneyMarket,
                CurveKind::GovernmentBond,
                CurveKind::Swap,
            ] {
                for instrument in curve_instruments(currency, kind) {
                    let weight = (instrument.maturity_years / 30.0).min(1.0);
                    let rate = short + (long - short) * weight;
                    self.quotes
                        .insert(instrument.ticker.to_string(), QuoteData::last_only(rate));
                }
            }
        }

        // 1M smile quotes in vol points: ATM level, 25/10-delta
        // risk reversals and butterflies
        for (pair, atm, rr25, bf25, rr10, bf10) in [
            ("EURUSD", 9.25, -0.40, 0.20, -0.80, 0.50),
            ("USDJPY", 8.50, -1.20, 0.30, -2.10, 0.75),
        ] {
            self.quotes
                .insert(format!("{pair}V1M Curncy"), QuoteData::last_only(atm));
            self.quotes
                .insert(format!("{pair}25R1M Curncy"), QuoteData::last_only(rr25));
            self.quotes
                .insert(format!("{pair}25B1M Curncy"), QuoteData::last_only(bf25));
            self.quotes
                .insert(format!("{pair}10R1M Curncy"), QuoteData::last_only(rr10));
            self.quotes
                .insert(format!("{pair}10B1M Curncy"), QuoteData::last_only(bf10));
        }
    }

    /// Answers a request the way the remote service would.
    ///
    /// Known securities resolve with the requested fields (null where a
    /// side is not quoted); unknown securities come back with
    /// `success == false` and all-null fields.
    pub fn serve(&self, request: &ReferenceDataRequest) -> ReferenceDataResponse {
        let securities_data = request
            .securities
            .iter()
            .map(|security| {
                let quote = self.quotes.get(security);
                let mut fields = BTreeMap::new();
                for field in &request.fields {
                    let value = match (quote, field.as_str()) {
                        (Some(q), FIELD_PX_BID) => q.bid,
                        (Some(q), FIELD_PX_ASK) => q.ask,
                        (Some(q), FIELD_PX_LAST) => q.last,
                        _ => None,
                    };
                    fields.insert(field.clone(), value);
                }
                SecurityData {
                    security: security.clone(),
                    success: quote.is_some(),
                    fields,
                }
            })
            .collect();

        ReferenceDataResponse {
            data: ResponseData { securities_data },
        }
    }

    /// Perturbs all quotes with small random noise and restamps the
    /// snapshot.
    pub fn refresh(&mut self) {
        let mut rng = rand::thread_rng();

        for quote in self.quotes.values_mut() {
            if let (Some(bid), Some(ask)) = (quote.bid, quote.ask) {
                let noise: f64 = rng.gen_range(-0.0005..0.0005);
                let mid = (bid + ask) / 2.0 * (1.0 + noise);
                let spread = ask - bid;
                quote.bid = Some(mid - spread / 2.0);
                quote.ask = Some(mid + spread / 2.0);
                quote.last = Some(mid);
            } else if let Some(last) = quote.last {
                // 2bp noise on outright levels
                let noise: f64 = rng.gen_range(-0.02..0.02);
                quote.last = Some(last + noise);
            }
        }

        self.as_of = Utc::now();
    }
}

impl Default for SyntheticSnapshot {
    fn default() -> Self {
        Self::new()
    }
}
