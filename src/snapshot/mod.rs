//! Input records for metric and scenario calculations

mod data;
mod loader;

pub use data::{BuildingValuation, Currency, FinancialSnapshot, Period};
pub use loader::{load_snapshots, load_snapshots_from_reader, LoadError, SnapshotRecord};
