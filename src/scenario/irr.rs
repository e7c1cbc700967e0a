//! Internal Rate of Return via Newton-Raphson
//!
//! Unguarded Newton-Raphson on the NPV function: no bisection fallback and
//! no multiple-root detection. The rate bounds and the iteration cap turn
//! every non-convergent case into `irr: None` instead of a panic or an
//! unbounded loop.

use super::npv::npv;
use serde::{Deserialize, Serialize};

/// Initial guess for the solver
pub const DEFAULT_IRR_GUESS: f64 = 0.10;

/// Convergence tolerance on both |NPV| and the rate step
pub const DEFAULT_IRR_TOLERANCE: f64 = 1e-4;

/// Iteration cap, the sole bound on the computation
pub const DEFAULT_IRR_MAX_ITERATIONS: u32 = 100;

/// Rates outside this range are treated as divergence
pub const IRR_MIN_RATE: f64 = -0.99;
pub const IRR_MAX_RATE: f64 = 10.0;

/// Solver outcome
///
/// `irr: None` collapses three cases — flat derivative, divergence outside
/// the rate bounds, and iteration exhaustion. Callers that need to tell
/// exhaustion apart can compare `iterations` against the cap they passed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrrResult {
    /// Solved rate as a decimal (0.08 = 8%), or `None` if no solution found
    pub irr: Option<f64>,
    /// Newton steps taken before returning
    pub iterations: u32,
}

/// Solve for the discount rate at which NPV is zero
pub fn solve_irr(
    cashflows: &[f64],
    initial_investment: f64,
    tolerance: f64,
    max_iterations: u32,
) -> IrrResult {
    let mut rate = DEFAULT_IRR_GUESS;
    let mut iterations = 0u32;

    for _ in 0..max_iterations {
        let value = npv(cashflows, initial_investment, rate);
        if value.abs() < tolerance {
            return IrrResult {
                irr: Some(rate),
                iterations,
            };
        }

        let derivative = npv_derivative(cashflows, rate);
        if derivative.abs() < tolerance {
            // Flat slope, Newton step undefined
            return IrrResult {
                irr: None,
                iterations,
            };
        }

        let new_rate = rate - value / derivative;

        if !(IRR_MIN_RATE..=IRR_MAX_RATE).contains(&new_rate) {
            // Diverging outside any economically meaningful rate
            return IrrResult {
                irr: None,
                iterations,
            };
        }

        if (new_rate - rate).abs() < tolerance {
            return IrrResult {
                irr: Some(new_rate),
                iterations,
            };
        }

        rate = new_rate;
        iterations += 1;
    }

    IrrResult {
        irr: None,
        iterations,
    }
}

/// Solve with the default tolerance and iteration cap
pub fn solve_irr_default(cashflows: &[f64], initial_investment: f64) -> IrrResult {
    solve_irr(
        cashflows,
        initial_investment,
        DEFAULT_IRR_TOLERANCE,
        DEFAULT_IRR_MAX_ITERATIONS,
    )
}

/// d(NPV)/d(rate): sum of -(cf[i-1] * i) / (1 + rate)^(i+1), i from 1
fn npv_derivative(cashflows: &[f64], rate: f64) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(idx, cf)| {
            let i = idx as f64 + 1.0;
            -(cf * i) / (1.0 + rate).powi(idx as i32 + 2)
        })
        .sum()
}
