//! Point-in-time metrics output record

use crate::snapshot::{Currency, Period};
use serde::{Deserialize, Serialize};

/// Derived investment metrics for one building at one point in time
///
/// Every derived field is `Option<f64>`: `None` means "no data" (missing
/// snapshot or a zero/absent denominator), never 0. Computed fresh per
/// call; nothing is cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsResult {
    pub building_id: u32,

    /// Period view the flow figures are expressed in
    pub period: Period,

    pub currency: Currency,

    /// Net Operating Income, in the requested period view
    pub noi: Option<f64>,

    /// NOI / market value, percent
    pub cap_rate_pct: Option<f64>,

    /// Same formula as cap rate, exposed under the ROI name
    pub roi_pct: Option<f64>,

    /// Debt Service Coverage Ratio, passed through from the snapshot
    pub dscr: Option<f64>,

    /// Total OPEX / total revenue, percent
    pub opex_ratio_pct: Option<f64>,

    pub market_value: Option<f64>,

    pub estimated_value: Option<f64>,

    /// (estimated - market) / market, percent
    pub value_gap_pct: Option<f64>,

    /// Always `None`: no occupancy data source exists in this core
    pub occupancy_pct: Option<f64>,
}

impl MetricsResult {
    /// Result for a building with no snapshot: every derived metric is
    /// `None`, valuation figures pass through untouched.
    pub fn empty(building_id: u32, period: Period, valuation_market: Option<f64>, valuation_estimated: Option<f64>) -> Self {
        Self {
            building_id,
            period,
            currency: Currency::default(),
            noi: None,
            cap_rate_pct: None,
            roi_pct: None,
            dscr: None,
            opex_ratio_pct: None,
            market_value: valuation_market,
            estimated_value: valuation_estimated,
            value_gap_pct: None,
            occupancy_pct: None,
        }
    }
}
