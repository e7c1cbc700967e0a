//! Point-in-time investment metrics derived from one snapshot + valuation

mod calculator;
mod types;

pub use calculator::{calculate_metrics, cap_rate_pct, noi, opex_ratio_pct, roi_pct, value_gap_pct};
pub use types::MetricsResult;
