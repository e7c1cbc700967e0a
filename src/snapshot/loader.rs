//! Load snapshot and valuation records from CSV exports
//!
//! The persistence layer exports one row per building per reporting period;
//! this loader turns those rows into in-memory records for the calculators.

use super::{BuildingValuation, Currency, FinancialSnapshot};
use chrono::NaiveDate;
use csv::Reader;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised at the CSV input boundary
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV record: {0}")]
    Csv(#[from] csv::Error),

    #[error("building {building_id}: unknown currency '{currency}'")]
    UnknownCurrency { building_id: u32, currency: String },

    #[error("building {building_id}: period end {end} before start {start}")]
    InvalidPeriod {
        building_id: u32,
        start: NaiveDate,
        end: NaiveDate,
    },
}

/// A snapshot paired with its building's valuation
#[derive(Debug, Clone)]
pub struct SnapshotRecord {
    pub snapshot: FinancialSnapshot,
    pub valuation: BuildingValuation,
}

/// Raw CSV row matching the export column names
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "BuildingID")]
    building_id: u32,
    #[serde(rename = "PeriodStart")]
    period_start: NaiveDate,
    #[serde(rename = "PeriodEnd")]
    period_end: NaiveDate,
    #[serde(rename = "Currency")]
    currency: String,
    #[serde(rename = "GrossAnnualRevenue")]
    gross_annual_revenue: f64,
    #[serde(rename = "OtherAnnualRevenue")]
    other_annual_revenue: Option<f64>,
    #[serde(rename = "TotalAnnualOpex")]
    total_annual_opex: f64,
    #[serde(rename = "AnnualEnergyOpex")]
    annual_energy_opex: f64,
    #[serde(rename = "MaintenanceOpex")]
    maintenance_opex: Option<f64>,
    #[serde(rename = "InsuranceOpex")]
    insurance_opex: Option<f64>,
    #[serde(rename = "OtherOpex")]
    other_opex: Option<f64>,
    #[serde(rename = "DSCR")]
    dscr: Option<f64>,
    #[serde(rename = "AnnualDebtService")]
    annual_debt_service: Option<f64>,
    #[serde(rename = "EstRenovationCost")]
    estimated_renovation_cost: Option<f64>,
    #[serde(rename = "EstEnergySavingsPct")]
    estimated_energy_savings_pct: Option<f64>,
    #[serde(rename = "EstPriceUpliftPct")]
    estimated_price_uplift_pct: Option<f64>,
    #[serde(rename = "MarketValue")]
    market_value: Option<f64>,
    #[serde(rename = "EstimatedValue")]
    estimated_value: Option<f64>,
    #[serde(rename = "RenovationCost")]
    renovation_cost: Option<f64>,
}

impl CsvRow {
    fn into_record(self) -> Result<SnapshotRecord, LoadError> {
        let currency = match self.currency.as_str() {
            "EUR" => Currency::Eur,
            other => {
                return Err(LoadError::UnknownCurrency {
                    building_id: self.building_id,
                    currency: other.to_string(),
                })
            }
        };

        if self.period_end < self.period_start {
            return Err(LoadError::InvalidPeriod {
                building_id: self.building_id,
                start: self.period_start,
                end: self.period_end,
            });
        }

        let snapshot = FinancialSnapshot {
            building_id: self.building_id,
            period_start: self.period_start,
            period_end: self.period_end,
            currency,
            gross_annual_revenue: self.gross_annual_revenue,
            other_annual_revenue: self.other_annual_revenue,
            total_annual_opex: self.total_annual_opex,
            annual_energy_opex: self.annual_energy_opex,
            maintenance_opex: self.maintenance_opex,
            insurance_opex: self.insurance_opex,
            other_opex: self.other_opex,
            dscr: self.dscr,
            annual_debt_service: self.annual_debt_service,
            estimated_renovation_cost: self.estimated_renovation_cost,
            estimated_energy_savings_pct: self.estimated_energy_savings_pct,
            estimated_price_uplift_pct: self.estimated_price_uplift_pct,
        };

        let valuation = BuildingValuation {
            building_id: self.building_id,
            market_value: self.market_value,
            estimated_value: self.estimated_value,
            renovation_cost: self.renovation_cost,
        };

        Ok(SnapshotRecord { snapshot, valuation })
    }
}

/// Load all snapshot records from a CSV file
pub fn load_snapshots(path: &Path) -> Result<Vec<SnapshotRecord>, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = Reader::from_reader(file);
    let mut records = Vec::new();

    for row in reader.deserialize::<CsvRow>() {
        records.push(row?.into_record()?);
    }

    log::debug!("loaded {} snapshot records from {}", records.len(), path.display());
    Ok(records)
}

/// Load snapshot records from any CSV reader (used by tests and pipes)
pub fn load_snapshots_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<SnapshotRecord>, LoadError> {
    let mut reader = Reader::from_reader(reader);
    let mut records = Vec::new();

    for row in reader.deserialize::<CsvRow>() {
        records.push(row?.into_record()?);
    }

    Ok(records)
}
