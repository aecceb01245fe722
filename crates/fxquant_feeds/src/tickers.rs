//! Static curve instrument tables.
//!
//! The dashboard builds each yield/forward curve from a fixed ladder of
//! quoted instruments per currency: money-market deposits at the short
//! end, government bonds and par swaps further out. The ladders are
//! static configuration data, keyed by currency and curve type, not
//! logic.

use fxquant_core::market_data::curves::CurveAnchor;
use fxquant_core::types::Currency;
use tracing::warn;

use crate::error::FeedError;
use crate::wire::{ReferenceDataRequest, ReferenceDataResponse, FIELD_PX_LAST};

/// Curve families quoted per currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    /// Money-market deposits (short end).
    MoneyMarket,
    /// Government bond yields.
    GovernmentBond,
    /// Par swap rates.
    Swap,
}

/// One quoted instrument on a curve ladder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveInstrument {
    /// Service ticker.
    pub ticker: &'static str,
    /// Display label, e.g. "2Y".
    pub label: &'static str,
    /// Time to maturity in years.
    pub maturity_years: f64,
}

macro_rules! instruments {
    ($(($ticker:literal, $label:literal, $t:literal)),* $(,)?) => {
        &[$(CurveInstrument { ticker: $ticker, label: $label, maturity_years: $t }),*]
    };
}

const USD_MONEY_MARKET: &[CurveInstrument] = instruments![
    ("US0001M Index", "1M", 0.0833),
    ("US0003M Index", "3M", 0.25),
    ("US0006M Index", "6M", 0.5),
    ("US0012M Index", "1Y", 1.0),
];

const USD_GOVT: &[CurveInstrument] = instruments![
    ("GT2 Govt", "2Y", 2.0),
    ("GT5 Govt", "5Y", 5.0),
    ("GT10 Govt", "10Y", 10.0),
    ("GT30 Govt", "30Y", 30.0),
];

const USD_SWAP: &[CurveInstrument] = instruments![
    ("USSW2 Curncy", "2Y", 2.0),
    ("USSW3 Curncy", "3Y", 3.0),
    ("USSW5 Curncy", "5Y", 5.0),
    ("USSW7 Curncy", "7Y", 7.0),
    ("USSW10 Curncy", "10Y", 10.0),
    ("USSW30 Curncy", "30Y", 30.0),
];

const EUR_MONEY_MARKET: &[CurveInstrument] = instruments![
    ("EUR001M Index", "1M", 0.0833),
    ("EUR003M Index", "3M", 0.25),
    ("EUR006M Index", "6M", 0.5),
    ("EUR012M Index", "1Y", 1.0),
];

const EUR_GOVT: &[CurveInstrument] = instruments![
    ("GDBR2 Index", "2Y", 2.0),
    ("GDBR5 Index", "5Y", 5.0),
    ("GDBR10 Index", "10Y", 10.0),
    ("GDBR30 Index", "30Y", 30.0),
];

const EUR_SWAP: &[CurveInstrument] = instruments![
    ("EUSA2 Curncy", "2Y", 2.0),
    ("EUSA5 Curncy", "5Y", 5.0),
    ("EUSA10 Curncy", "10Y", 10.0),
    ("EUSA30 Curncy", "30Y", 30.0),
];

const GBP_MONEY_MARKET: &[CurveInstrument] = instruments![
    ("BP0001M Index", "1M", 0.0833),
    ("BP0003M Index", "3M", 0.25),
    ("BP0006M Index", "6M", 0.5),
];

const GBP_GOVT: &[CurveInstrument] = instruments![
    ("GUKG2 Index", "2Y", 2.0),
    ("GUKG5 Index", "5Y", 5.0),
    ("GUKG10 Index", "10Y", 10.0),
];

const GBP_SWAP: &[CurveInstrument] = instruments![
    ("BPSW2 Curncy", "2Y", 2.0),
    ("BPSW5 Curncy", "5Y", 5.0),
    ("BPSW10 Curncy", "10Y", 10.0),
];

const JPY_MONEY_MARKET: &[CurveInstrument] = instruments![
    ("JY0003M Index", "3M", 0.25),
    ("JY0006M Index", "6M", 0.5),
];

const JPY_GOVT: &[CurveInstrument] = instruments![
    ("GJGB2 Index", "2Y", 2.0),
    ("GJGB5 Index", "5Y", 5.0),
    ("GJGB10 Index", "10Y", 10.0),
    ("GJGB30 Index", "30Y", 30.0),
];

const JPY_SWAP: &[CurveInstrument] = instruments![
    ("JYSW2 Curncy", "2Y", 2.0),
    ("JYSW5 Curncy", "5Y", 5.0),
    ("JYSW10 Curncy", "10Y", 10.0),
];

const CHF_MONEY_MARKET: &[CurveInstrument] = instruments![
    ("SF0003M Index", "3M", 0.25),
    ("SF0006M Index", "6M", 0.5),
];

const CHF_GOVT: &[CurveInstrument] = instruments![
    ("GSWISS5 Index", "5Y", 5.0),
    ("GSWISS10 Index", "10Y", 10.0),
];

const CHF_SWAP: &[CurveInstrument] = instruments![
    ("SFSW2 Curncy", "2Y", 2.0),
    ("SFSW5 Curncy", "5Y", 5.0),
    ("SFSW10 Curncy", "10Y", 10.0),
];

/// Returns the instrument ladder for a currency and curve kind.
///
/// The empty slice means the combination has no quoted ladder.
pub fn curve_instruments(currency: Currency, kind: CurveKind) -> &'static [CurveInstrument] {
    match (currency, kind) {
        (Currency::USD, CurveKind::MoneyMarket) => USD_MONEY_MARKET,
        (Currency::USD, CurveKind::GovernmentBond) => USD_GOVT,
        (Currency::USD, CurveKind::Swap) => USD_SWAP,
        (Currency::EUR, CurveKind::MoneyMarket) => EUR_MONEY_MARKET,
        (Currency::EUR, CurveKind::GovernmentBond) => EUR_GOVT,
        (Currency::EUR, CurveKind::Swap) => EUR_SWAP,
        (Currency::GBP, CurveKind::MoneyMarket) => GBP_MONEY_MARKET,
        (Currency::GBP, CurveKind::GovernmentBond) => GBP_GOVT,
        (Currency::GBP, CurveKind::Swap) => GBP_SWAP,
        (Currency::JPY, CurveKind::MoneyMarket) => JPY_MONEY_MARKET,
        (Currency::JPY, CurveKind::GovernmentBond) => JPY_GOVT,
        (Currency::JPY, CurveKind::Swap) => JPY_SWAP,
        (Currency::CHF, CurveKind::MoneyMarket) => CHF_MONEY_MARKET,
        (Currency::CHF, CurveKind::GovernmentBond) => CHF_GOVT,
        (Currency::CHF, CurveKind::Swap) => CHF_SWAP,
        _ => &[],
    }
}

/// Builds the reference-data request for a curve ladder.
pub fn curve_request(currency: Currency, kind: CurveKind) -> ReferenceDataRequest {
    let tickers = curve_instruments(currency, kind)
        .iter()
        .map(|i| i.ticker.to_string());
    ReferenceDataRequest::new(tickers, [FIELD_PX_LAST])
}

/// Anchors extracted from a curve response, plus the instruments that
/// had to be skipped.
#[derive(Debug)]
pub struct AnchorSet {
    /// Usable curve anchors, in ladder order.
    pub anchors: Vec<CurveAnchor<f64>>,
    /// Per-instrument failures; local to each instrument.
    pub skipped: Vec<FeedError>,
}

/// Joins a curve response against the instrument ladder.
///
/// Service rates are quoted in percent and converted to fractions here.
/// Failed securities and null rates are skipped with a warning and
/// reported in the returned [`AnchorSet`]; they never poison the
/// remaining ladder.
pub fn curve_anchors(
    currency: Currency,
    kind: CurveKind,
    response: &ReferenceDataResponse,
) -> AnchorSet {
    let mut anchors = Vec::new();
    let mut skipped = Vec::new();

    for instrument in curve_instruments(currency, kind) {
        let Some(security) = response.security(instrument.ticker) else {
            warn!(ticker = instrument.ticker, "instrument missing from response");
            skipped.push(FeedError::SecurityFailed {
                security: instrument.ticker.to_string(),
            });
            continue;
        };

        if !security.success {
            warn!(ticker = instrument.ticker, "security request failed");
            skipped.push(FeedError::SecurityFailed {
                security: instrument.ticker.to_string(),
            });
            continue;
        }

        let Some(rate_pct) = security.field(FIELD_PX_LAST) else {
            warn!(ticker = instrument.ticker, field = FIELD_PX_LAST, "null rate");
            skipped.push(FeedError::MissingField {
                security: instrument.ticker.to_string(),
                field: FIELD_PX_LAST.to_string(),
            });
            continue;
        };

        anchors.push(CurveAnchor::new(
            instrument.maturity_years,
            rate_pct / 100.0,
            instrument.label,
            instrument.ticker,
        ));
    }

    AnchorSet { anchors, skipped }
}
