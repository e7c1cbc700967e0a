//! Financial snapshot and valuation records supplied by external collaborators

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Supported reporting currency (single-currency system)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "EUR")]
    Eur,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Eur
    }
}

/// Reporting period for output figures
///
/// All raw calculations are annual; a `Monthly` view divides the final
/// output figure by 12 as the last step, never intermediate aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Annual,
    Monthly,
}

impl Period {
    /// Convert an annual flow figure to this period's view
    pub fn from_annual(&self, annual: f64) -> f64 {
        match self {
            Period::Annual => annual,
            Period::Monthly => annual / 12.0,
        }
    }
}

impl Default for Period {
    fn default() -> Self {
        Period::Annual
    }
}

/// One financial reporting period for a building
///
/// Supplied by the persistence collaborator; this core never fetches or
/// stores these. Optional fields model "no data" explicitly — absence is
/// a normal state, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    /// Building this snapshot belongs to
    pub building_id: u32,

    /// Start of the reporting period
    pub period_start: NaiveDate,

    /// End of the reporting period
    pub period_end: NaiveDate,

    /// Reporting currency
    #[serde(default)]
    pub currency: Currency,

    /// Gross annual rental revenue
    pub gross_annual_revenue: f64,

    /// Other annual revenue (parking, advertising, ...)
    #[serde(default)]
    pub other_annual_revenue: Option<f64>,

    /// Total annual operating expenses. Authoritative for NOI; the
    /// breakdown fields below are informational and never re-summed.
    pub total_annual_opex: f64,

    /// Annual energy component of OPEX
    pub annual_energy_opex: f64,

    /// Informational OPEX breakdown
    #[serde(default)]
    pub maintenance_opex: Option<f64>,
    #[serde(default)]
    pub insurance_opex: Option<f64>,
    #[serde(default)]
    pub other_opex: Option<f64>,

    /// Debt Service Coverage Ratio, passed through verbatim (never recomputed)
    #[serde(default)]
    pub dscr: Option<f64>,

    /// Annual debt service
    #[serde(default)]
    pub annual_debt_service: Option<f64>,

    /// Estimated capital cost of a renovation
    #[serde(default)]
    pub estimated_renovation_cost: Option<f64>,

    /// Estimated energy savings from a renovation, percent of energy OPEX (0-100)
    #[serde(default)]
    pub estimated_energy_savings_pct: Option<f64>,

    /// Estimated market value uplift from a renovation, percent (0-100)
    #[serde(default)]
    pub estimated_price_uplift_pct: Option<f64>,
}

impl FinancialSnapshot {
    /// Gross plus other annual revenue
    pub fn total_annual_revenue(&self) -> f64 {
        self.gross_annual_revenue + self.other_annual_revenue.unwrap_or(0.0)
    }

    /// Annual energy savings derived from the snapshot's own estimate
    ///
    /// `annual_energy_opex * estimated_energy_savings_pct / 100`, zero when
    /// no estimate is present.
    pub fn derived_energy_savings(&self) -> f64 {
        self.annual_energy_opex * self.estimated_energy_savings_pct.unwrap_or(0.0) / 100.0
    }

    /// Estimated price uplift percent, defaulting to 0 when absent
    pub fn price_uplift_pct(&self) -> f64 {
        self.estimated_price_uplift_pct.unwrap_or(0.0)
    }
}

/// Current and potential valuation of a building
///
/// A zero market value carries the same meaning as an absent one: no
/// usable valuation. `positive_market_value` folds both into `None` so
/// every ratio denominator is guarded in one place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingValuation {
    pub building_id: u32,

    /// Current market value
    #[serde(default)]
    pub market_value: Option<f64>,

    /// Potential / estimated value
    #[serde(default)]
    pub estimated_value: Option<f64>,

    /// Stored renovation cost estimate
    #[serde(default)]
    pub renovation_cost: Option<f64>,
}

impl BuildingValuation {
    /// Market value usable as a ratio denominator
    pub fn positive_market_value(&self) -> Option<f64> {
        self.market_value.filter(|mv| *mv > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
            maintenance_opex: Some(10_000.0),
            insurance_opex: Some(5_000.0),
            other_opex: None,
            dscr: Some(1.45),
            annual_debt_service: Some(55_000.0),
            estimated_renovation_cost: Some(50_000.0),
            estimated_energy_savings_pct: Some(20.0),
            estimated_price_uplift_pct: Some(10.0),
        }
    }

    #[test]
    fn test_total_revenue_includes_other() {
        let mut snap = test_snapshot();
        assert_eq!(snap.total_annual_revenue(), 120_000.0);

        snap.other_annual_revenue = Some(6_000.0);
        assert_eq!(snap.total_annual_revenue(), 126_000.0);
    }

    #[test]
    fn test_derived_energy_savings() {
        let mut snap = test_snapshot();
        // 15000 * 20% = 3000
        assert_eq!(snap.derived_energy_savings(), 3_000.0);

        snap.estimated_energy_savings_pct = None;
        assert_eq!(snap.derived_energy_savings(), 0.0);
    }

    #[test]
    fn test_market_value_guard_folds_zero_and_absent() {
        let mut val = BuildingValuation {
            building_id: 1,
            market_value: Some(0.0),
            estimated_value: None,
            renovation_cost: None,
        };
        assert_eq!(val.positive_market_value(), None);

        val.market_value = None;
        assert_eq!(val.positive_market_value(), None);

        val.market_value = Some(1_000_000.0);
        assert_eq!(val.positive_market_value(), Some(1_000_000.0));
    }

    #[test]
    fn test_period_conversion() {
        assert_eq!(Period::Annual.from_annual(80_000.0), 80_000.0);
        assert_eq!(Period::Monthly.from_annual(80_000.0), 80_000.0 / 12.0);
    }
}
