//! Discount-rate sensitivity sweep

use super::npv::npv;
use serde::{Deserialize, Serialize};

/// Default discount-rate ladder: 2% through 15%
pub const DEFAULT_RATE_LADDER: [f64; 7] = [0.02, 0.04, 0.06, 0.08, 0.10, 0.12, 0.15];

/// NPV at one discount rate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensitivityPoint {
    pub discount_rate: f64,
    pub npv: f64,
}

/// One fixed series evaluated across a rate ladder plus a base rate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensitivityResult {
    /// NPV at the caller's base rate
    pub base_npv: f64,
    pub points: Vec<SensitivityPoint>,
}

/// Compute NPV at each rate in the ladder (default ladder when `None`)
/// against one fixed cash-flow series and initial investment
pub fn sensitivity_sweep(
    cashflows: &[f64],
    initial_investment: f64,
    base_rate: f64,
    rates: Option<&[f64]>,
) -> SensitivityResult {
    let ladder = rates.unwrap_or(&DEFAULT_RATE_LADDER);

    let points = ladder
        .iter()
        .map(|&discount_rate| SensitivityPoint {
            discount_rate,
            npv: npv(cashflows, initial_investment, discount_rate),
        })
        .collect();

    SensitivityResult {
        base_npv: npv(cashflows, initial_investment, base_rate),
        points,
    }
}
