//! Property Metrics - Real-estate investment metrics and scenario engine
//!
//! This library provides:
//! - Point-in-time investment metrics (NOI, Cap Rate, ROI, OPEX Ratio, Value Gap, DSCR pass-through)
//! - Renovation payback simulation
//! - Constant-NOI multi-year cash-flow projection
//! - NPV, Newton-Raphson IRR, and discount-rate sensitivity sweeps
//!
//! All calculations are pure, synchronous, and stateless: callers supply
//! snapshot and valuation records in memory (persistence, HTTP, and
//! document extraction live in external collaborators) and get plain
//! result records back.

pub mod metrics;
pub mod scenario;
pub mod snapshot;

// Re-export commonly used types
pub use metrics::{calculate_metrics, MetricsResult};
pub use scenario::{
    project_cashflows, sensitivity_sweep, simulate_rehab, solve_irr, solve_irr_default,
    CashflowParams, CashflowProjection, IrrResult, NpvResult, RehabParams, RehabSimulation,
    SensitivityResult,
};
pub use snapshot::{BuildingValuation, Currency, FinancialSnapshot, Period, SnapshotRecord};
