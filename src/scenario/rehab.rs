//! Renovation payback simulation

use crate::metrics::value_gap_pct;
use crate::snapshot::{BuildingValuation, FinancialSnapshot};
use serde::{Deserialize, Serialize};

/// Caller-supplied inputs for a rehab simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RehabParams {
    /// Capital cost of the renovation
    pub renovation_cost: f64,

    /// Explicit annual energy savings; derived from the snapshot estimate
    /// when absent
    #[serde(default)]
    pub annual_energy_savings: Option<f64>,

    /// Annual subsidy amount
    #[serde(default)]
    pub annual_subsidy: Option<f64>,

    /// Informational label for the estimation method used
    #[serde(default)]
    pub method: Option<String>,
}

/// Outcome of a rehab simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RehabSimulation {
    /// Post-renovation market value estimate
    pub estimated_value: Option<f64>,

    /// Gap between current and post-renovation value, percent
    pub value_gap_pct: Option<f64>,

    /// Months until cumulative benefit covers the cost; `None` when the
    /// annual benefit is not positive
    pub payback_months: Option<f64>,

    /// Annual benefit over cost, percent; 0 at zero cost
    pub simple_roi_pct: f64,

    /// Human-readable summary of the method and estimated figures
    pub notes: String,
}

/// Simulate a renovation: energy-savings benefit, payback, and value uplift
pub fn simulate_rehab(
    params: &RehabParams,
    snapshot: Option<&FinancialSnapshot>,
    valuation: &BuildingValuation,
) -> RehabSimulation {
    let annual_energy_savings = params.annual_energy_savings.unwrap_or_else(|| {
        snapshot
            .map(FinancialSnapshot::derived_energy_savings)
            .unwrap_or(0.0)
    });
    let annual_subsidy = params.annual_subsidy.unwrap_or(0.0);
    let annual_benefit = annual_energy_savings + annual_subsidy;

    let uplift_pct = snapshot
        .map(FinancialSnapshot::price_uplift_pct)
        .unwrap_or(0.0);
    let estimated_value = valuation
        .positive_market_value()
        .map(|mv| mv * (1.0 + uplift_pct / 100.0));

    let value_gap = value_gap_pct(valuation.market_value, estimated_value);

    let payback_months = if annual_benefit > 0.0 {
        Some(params.renovation_cost / annual_benefit * 12.0)
    } else {
        None
    };

    let simple_roi_pct = if params.renovation_cost > 0.0 {
        annual_benefit / params.renovation_cost * 100.0
    } else {
        0.0
    };

    let method = params.method.as_deref().unwrap_or("energy-savings estimate");
    let notes = format!(
        "Rehab simulation ({}): estimated annual benefit {:.2}, estimated post-renovation value {}",
        method,
        annual_benefit,
        estimated_value
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "n/a".to_string()),
    );

    RehabSimulation {
        estimated_value,
        value_gap_pct: value_gap,
        payback_months,
        simple_roi_pct,
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Currency;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn test_snapshot() -> FinancialSnapshot {
        FinancialSnapshot {
            building_id: 1,
            period_start: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            period_end: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            currency: Currency::Eur,
            gross_annual_revenue: 120_000.0,
            other_annual_revenue: None,
            total_annual_opex: 40_000.0,
            annual_energy_opex: 15_000.0,
            maintenance_opex: None,
            insurance_opex: None,
            other_opex: None,
            dscr: None,
            annual_debt_service: None,
            estimated_renovation_cost: Some(50_000.0),
            estimated_energy_savings_pct: Some(20.0),
            estimated_price_uplift_pct: Some(10.0),
        }
    }

    fn test_valuation() -> BuildingValuation {
        BuildingValuation {
            building_id: 1,
            market_value: Some(1_000_000.0),
            estimated_value: None,
            renovation_cost: Some(50_000.0),
        }
    }

    #[test]
    fn test_explicit_savings_payback() {
        // 50000 cost at 5000/yr benefit: 120 months, 10% simple ROI
        let params = RehabParams {
            renovation_cost: 50_000.0,
            annual_energy_savings: Some(5_000.0),
            annual_subsidy: None,
            method: None,
        };
        let result = simulate_rehab(&params, Some(&test_snapshot()), &test_valuation());

        assert_relative_eq!(result.payback_months.unwrap(), 120.0);
        assert_relative_eq!(result.simple_roi_pct, 10.0);
    }

    #[test]
    fn test_savings_derived_from_snapshot() {
        // 15000 energy OPEX * 20% = 3000/yr when no explicit savings given
        let params = RehabParams {
            renovation_cost: 30_000.0,
            annual_energy_savings: None,
            annual_subsidy: None,
            method: None,
        };
        let result = simulate_rehab(&params, Some(&test_snapshot()), &test_valuation());

        assert_relative_eq!(result.payback_months.unwrap(), 30_000.0 / 3_000.0 * 12.0);
        assert_relative_eq!(result.simple_roi_pct, 10.0);
    }

    #[test]
    fn test_subsidy_adds_to_benefit() {
        let params = RehabParams {
            renovation_cost: 48_000.0,
            annual_energy_savings: Some(5_000.0),
            annual_subsidy: Some(1_000.0),
            method: None,
        };
        let result = simulate_rehab(&params, Some(&test_snapshot()), &test_valuation());

        assert_relative_eq!(result.payback_months.unwrap(), 96.0);
    }

    #[test]
    fn test_non_positive_benefit_has_no_payback() {
        let params = RehabParams {
            renovation_cost: 50_000.0,
            annual_energy_savings: Some(0.0),
            annual_subsidy: None,
            method: None,
        };
        let result = simulate_rehab(&params, None, &test_valuation());

        assert_eq!(result.payback_months, None);
        assert_relative_eq!(result.simple_roi_pct, 0.0);
    }

    #[test]
    fn test_zero_cost_has_zero_roi() {
        let params = RehabParams {
            renovation_cost: 0.0,
            annual_energy_savings: Some(5_000.0),
            annual_subsidy: None,
            method: None,
        };
        let result = simulate_rehab(&params, Some(&test_snapshot()), &test_valuation());

        assert_relative_eq!(result.simple_roi_pct, 0.0);
        assert_relative_eq!(result.payback_months.unwrap(), 0.0);
    }

    #[test]
    fn test_value_uplift_from_snapshot_estimate() {
        let params = RehabParams {
            renovation_cost: 50_000.0,
            annual_energy_savings: Some(5_000.0),
            annual_subsidy: None,
            method: Some("deep retrofit".to_string()),
        };
        let result = simulate_rehab(&params, Some(&test_snapshot()), &test_valuation());

        // 1M * (1 + 10%) = 1.1M, gap 10%
        assert_relative_eq!(result.estimated_value.unwrap(), 1_100_000.0);
        assert_relative_eq!(result.value_gap_pct.unwrap(), 10.0);
        assert!(result.notes.contains("deep retrofit"));
        assert!(result.notes.contains("1100000.00"));
    }

    #[test]
    fn test_no_market_value_no_uplift() {
        let params = RehabParams {
            renovation_cost: 50_000.0,
            annual_energy_savings: Some(5_000.0),
            annual_subsidy: None,
            method: None,
        };
        let valuation = BuildingValuation {
            building_id: 1,
            market_value: Some(0.0),
            estimated_value: None,
            renovation_cost: None,
        };
        let result = simulate_rehab(&params, Some(&test_snapshot()), &valuation);

        assert_eq!(result.estimated_value, None);
        assert_eq!(result.value_gap_pct, None);
        // Payback is independent of the valuation
        assert_relative_eq!(result.payback_months.unwrap(), 120.0);
    }
}
