//! Forward-looking scenario engine
//!
//! Rehab payback simulation, constant-NOI projection, NPV, Newton-Raphson
//! IRR, and discount-rate sensitivity sweeps. Every function is pure and
//! reentrant; results are computed fresh per call.

mod cashflow;
mod irr;
mod npv;
mod rehab;
mod sensitivity;

pub use cashflow::{
    project_cashflows, CashflowParams, CashflowProjection, DEFAULT_DISCOUNT_RATE,
    DEFAULT_PROJECTION_YEARS,
};
pub use irr::{
    solve_irr, solve_irr_default, IrrResult, DEFAULT_IRR_GUESS, DEFAULT_IRR_MAX_ITERATIONS,
    DEFAULT_IRR_TOLERANCE, IRR_MAX_RATE, IRR_MIN_RATE,
};
pub use npv::{calculate_npv, npv, NpvResult};
pub use rehab::{simulate_rehab, RehabParams, RehabSimulation};
pub use sensitivity::{sensitivity_sweep, SensitivityPoint, SensitivityResult, DEFAULT_RATE_LADDER};
