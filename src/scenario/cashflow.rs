//! Constant-NOI cash-flow projection
//!
//! Deliberately a flat series: every year carries the snapshot's current
//! NOI unchanged. Growth or escalation modeling is out of scope.

use crate::metrics::noi;
use crate::snapshot::{BuildingValuation, FinancialSnapshot, Period};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Default projection horizon in years
pub const DEFAULT_PROJECTION_YEARS: u32 = 5;

/// Default discount rate (8%)
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.08;

/// Caller-supplied projection inputs; every field falls back to a default
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CashflowParams {
    /// Projection horizon, default 5 years
    #[serde(default)]
    pub years: Option<u32>,

    /// Up-front investment, default: the building's stored renovation cost
    #[serde(default)]
    pub initial_investment: Option<f64>,

    /// Discount rate as a decimal, default 0.08
    #[serde(default)]
    pub discount_rate: Option<f64>,

    /// Display identifier; generated from the current time when absent
    #[serde(default)]
    pub scenario_id: Option<String>,

    /// Period view for the cash-flow entries
    #[serde(default)]
    pub period: Period,
}

/// A projected cash-flow series ready for NPV/IRR/sensitivity analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashflowProjection {
    pub scenario_id: String,
    pub cashflows: Vec<f64>,
    pub initial_investment: f64,
    pub discount_rate: f64,
    pub years: u32,
}

/// Project a flat NOI series over the requested horizon
///
/// With no snapshot there is no NOI, so the series is flat zero; that is
/// the same "no data" state the metrics layer reports as `None`.
pub fn project_cashflows(
    params: &CashflowParams,
    snapshot: Option<&FinancialSnapshot>,
    valuation: &BuildingValuation,
) -> CashflowProjection {
    let years = params.years.unwrap_or(DEFAULT_PROJECTION_YEARS);
    let annual_noi = snapshot.map(noi).unwrap_or(0.0);
    let entry = params.period.from_annual(annual_noi);

    let initial_investment = params
        .initial_investment
        .or(valuation.renovation_cost)
        .unwrap_or(0.0);

    let scenario_id = params
        .scenario_id
        .clone()
        .unwrap_or_else(|| format!("scenario-{}", Utc::now().timestamp_millis()));

    CashflowProjection {
        scenario_id,
        cashflows: vec![entry; years as usize],
        initial_investment,
        discount_rate: params.discount_rate.unwrap_or(DEFAULT_DISCOUNT_RATE),
        years,
    }
}
