//! Point-in-time metric formulas
//!
//! All formulas work in annual terms; the requested `Period` view is
//! applied to the final output only. Zero or absent denominators yield
//! `None`, distinguishing "no data" from a genuine 0% figure.

use super::types::MetricsResult;
use crate::snapshot::{BuildingValuation, FinancialSnapshot, Period};

/// Net Operating Income: total revenue minus total annual OPEX
///
/// Only `total_annual_opex` enters the formula; the informational OPEX
/// breakdown fields are never re-summed.
pub fn noi(snapshot: &FinancialSnapshot) -> f64 {
    snapshot.total_annual_revenue() - snapshot.total_annual_opex
}

/// Cap Rate: NOI over market value, percent
pub fn cap_rate_pct(annual_noi: f64, market_value: Option<f64>) -> Option<f64> {
    market_value
        .filter(|mv| *mv > 0.0)
        .map(|mv| annual_noi / mv * 100.0)
}

/// ROI on current value: identical formula to the cap rate, exposed
/// separately because callers consume the two under different names.
pub fn roi_pct(annual_noi: f64, market_value: Option<f64>) -> Option<f64> {
    cap_rate_pct(annual_noi, market_value)
}

/// OPEX Ratio: total annual OPEX over total revenue, percent
pub fn opex_ratio_pct(snapshot: &FinancialSnapshot) -> Option<f64> {
    let revenue = snapshot.total_annual_revenue();
    if revenue > 0.0 {
        Some(snapshot.total_annual_opex / revenue * 100.0)
    } else {
        None
    }
}

/// Value Gap: (estimated - market) / market, percent
pub fn value_gap_pct(market_value: Option<f64>, estimated_value: Option<f64>) -> Option<f64> {
    let mv = market_value.filter(|v| *v > 0.0)?;
    let ev = estimated_value.filter(|v| *v > 0.0)?;
    Some((ev - mv) / mv * 100.0)
}

/// Compute the full metrics record for one building
///
/// A missing snapshot is a normal state: every derived metric comes back
/// `None` and the valuation figures pass through. DSCR is read verbatim
/// from the snapshot, never recomputed.
pub fn calculate_metrics(
    snapshot: Option<&FinancialSnapshot>,
    valuation: &BuildingValuation,
    period: Period,
) -> MetricsResult {
    let snapshot = match snapshot {
        Some(snap) => snap,
        None => {
            return MetricsResult::empty(
                valuation.building_id,
                period,
                valuation.market_value,
                valuation.estimated_value,
            )
        }
    };

    let annual_noi = noi(snapshot);
    let market_value = valuation.positive_market_value();

    MetricsResult {
        building_id: valuation.building_id,
        period,
        currency: snapshot.currency,
        // Period conversion is the last step, applied to the output only
        noi: Some(period.from_annual(annual_noi)),
        cap_rate_pct: cap_rate_pct(annual_noi, market_value),
        roi_pct: roi_pct(annual_noi, market_value),
        dscr: snapshot.dscr,
        opex_ratio_pct: opex_ratio_pct(snapshot),
        market_value: valuation.market_value,
        estimated_value: valuation.estimated_value,
        value_gap_pct: value_gap_pct(valuation.market_value, valuation.estimated_value),
        occupancy_pct: None,
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
            maintenance_opex: Some(12_000.0),
            insurance_opex: None,
            other_opex: None,
            dscr: Some(1.45),
            annual_debt_service: Some(55_000.0),
            estimated_renovation_cost: None,
            estimated_energy_savings_pct: None,
            estimated_price_uplift_pct: None,
        }
    }

    fn test_valuation(market_value: Option<f64>) -> BuildingValuation {
        BuildingValuation {
            building_id: 1,
            market_value,
            estimated_value: Some(1_100_000.0),
            renovation_cost: None,
        }
    }

    #[test]
    fn test_reference_building() {
        // 120000 gross, 0 other, 40000 opex, 1M market value
        let snap = test_snapshot();
        let val = test_valuation(Some(1_000_000.0));

        let result = calculate_metrics(Some(&snap), &val, Period::Annual);
        assert_relative_eq!(result.noi.unwrap(), 80_000.0);
        assert_relative_eq!(result.cap_rate_pct.unwrap(), 8.0);
        assert_relative_eq!(result.roi_pct.unwrap(), 8.0);
        assert_relative_eq!(result.opex_ratio_pct.unwrap(), 40_000.0 / 120_000.0 * 100.0);
        assert_relative_eq!(result.value_gap_pct.unwrap(), 10.0);
        assert_eq!(result.dscr, Some(1.45));
        assert_eq!(result.occupancy_pct, None);
    }

    #[test]
    fn test_zero_market_value_yields_none_not_zero() {
        let snap = test_snapshot();

        for val in [test_valuation(Some(0.0)), test_valuation(None)] {
            let result = calculate_metrics(Some(&snap), &val, Period::Annual);
            assert_eq!(result.cap_rate_pct, None);
            assert_eq!(result.roi_pct, None);
            assert_eq!(result.value_gap_pct, None);
            // NOI itself stays computable
            assert_relative_eq!(result.noi.unwrap(), 80_000.0);
        }
    }

    #[test]
    fn test_missing_snapshot_is_not_an_error() {
        let val = test_valuation(Some(1_000_000.0));
        let result = calculate_metrics(None, &val, Period::Annual);

        assert_eq!(result.noi, None);
        assert_eq!(result.cap_rate_pct, None);
        assert_eq!(result.roi_pct, None);
        assert_eq!(result.dscr, None);
        assert_eq!(result.opex_ratio_pct, None);
        assert_eq!(result.value_gap_pct, None);
        // Valuation figures still pass through
        assert_eq!(result.market_value, Some(1_000_000.0));
    }

    #[test]
    fn test_monthly_noi_is_annual_over_twelve() {
        let snap = test_snapshot();
        let val = test_valuation(Some(1_000_000.0));

        let annual = calculate_metrics(Some(&snap), &val, Period::Annual);
        let monthly = calculate_metrics(Some(&snap), &val, Period::Monthly);

        assert_relative_eq!(monthly.noi.unwrap(), annual.noi.unwrap() / 12.0);
        // Ratios are period-independent
        assert_eq!(monthly.cap_rate_pct, annual.cap_rate_pct);
        assert_eq!(monthly.opex_ratio_pct, annual.opex_ratio_pct);
    }

    #[test]
    fn test_zero_revenue_guards_opex_ratio() {
        let mut snap = test_snapshot();
        snap.gross_annual_revenue = 0.0;
        snap.other_annual_revenue = None;

        assert_eq!(opex_ratio_pct(&snap), None);
    }

    #[test]
    fn test_breakdown_fields_do_not_affect_noi() {
        let mut snap = test_snapshot();
        let base = noi(&snap);

        snap.maintenance_opex = Some(999_999.0);
        snap.insurance_opex = Some(999_999.0);
        snap.other_opex = Some(999_999.0);
        assert_relative_eq!(noi(&snap), base);
    }
}
