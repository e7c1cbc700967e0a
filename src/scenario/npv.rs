//! Net Present Value

use serde::{Deserialize, Serialize};

/// NPV of a cash-flow series against an initial investment
///
/// `-investment + sum(cf[i-1] / (1 + rate)^i)` with i starting at 1: the
/// investment is at time zero, the first cash flow one period out.
pub fn npv(cashflows: &[f64], initial_investment: f64, rate: f64) -> f64 {
    let discounted: f64 = cashflows
        .iter()
        .enumerate()
        .map(|(idx, cf)| cf / (1.0 + rate).powi(idx as i32 + 1))
        .sum();

    -initial_investment + discounted
}

/// NPV wrapped as a result record for callers serializing scenario output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpvResult {
    pub npv: f64,
}

pub fn calculate_npv(cashflows: &[f64], initial_investment: f64, rate: f64) -> NpvResult {
    NpvResult {
        npv: npv(cashflows, initial_investment, rate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_npv_at_zero_rate_is_plain_sum() {
        let cashflows = [1_000.0; 5];
        assert_relative_eq!(npv(&cashflows, 4_000.0, 0.0), 1_000.0);
    }

    #[test]
    fn test_npv_discounts_later_flows_more() {
        let early = npv(&[1_000.0, 0.0], 0.0, 0.10);
        let late = npv(&[0.0, 1_000.0], 0.0, 0.10);
        assert!(early > late);
        assert_relative_eq!(early, 1_000.0 / 1.10);
        assert_relative_eq!(late, 1_000.0 / 1.21, max_relative = 1e-12);
    }

    #[test]
    fn test_empty_series_is_negative_investment() {
        assert_relative_eq!(npv(&[], 500.0, 0.08), -500.0);
    }
}
