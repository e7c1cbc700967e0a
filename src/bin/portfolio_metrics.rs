//! Compute metrics for an entire portfolio CSV export
//!
//! Outputs one metrics row per building plus portfolio-level aggregates,
//! for comparison against the reporting layer.

use anyhow::{Context, Result};
use property_metrics::{calculate_metrics, snapshot::load_snapshots, MetricsResult, Period};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    let input: PathBuf = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "snapshots.csv".to_string())
        .into();
    let output: PathBuf = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "portfolio_metrics.csv".to_string())
        .into();

    let start = Instant::now();
    let records = load_snapshots(&input)
        .with_context(|| format!("loading snapshots from {}", input.display()))?;
    log::info!("loaded {} records in {:?}", records.len(), start.elapsed());

    // Each record is independent, so metrics parallelize trivially
    let results: Vec<MetricsResult> = records
        .par_iter()
        .map(|record| calculate_metrics(Some(&record.snapshot), &record.valuation, Period::Annual))
        .collect();

    let mut file = File::create(&output)
        .with_context(|| format!("creating {}", output.display()))?;
    writeln!(
        file,
        "BuildingID,NOI,CapRatePct,RoiPct,DSCR,OpexRatioPct,MarketValue,EstimatedValue,ValueGapPct"
    )?;

    let cell = |v: Option<f64>| v.map(|x| format!("{:.4}", x)).unwrap_or_default();
    for r in &results {
        writeln!(
            file,
            "{},{},{},{},{},{},{},{},{}",
            r.building_id,
            cell(r.noi),
            cell(r.cap_rate_pct),
            cell(r.roi_pct),
            cell(r.dscr),
            cell(r.opex_ratio_pct),
            cell(r.market_value),
            cell(r.estimated_value),
            cell(r.value_gap_pct),
        )?;
    }

    // Portfolio aggregates
    let total_noi: f64 = results.iter().filter_map(|r| r.noi).sum();
    let total_market_value: f64 = results.iter().filter_map(|r| r.market_value).sum();
    let portfolio_cap = if total_market_value > 0.0 {
        Some(total_noi / total_market_value * 100.0)
    } else {
        None
    };

    println!("Portfolio: {} buildings", results.len());
    println!("  Total NOI:          {:.2}", total_noi);
    println!("  Total market value: {:.2}", total_market_value);
    match portfolio_cap {
        Some(cap) => println!("  Portfolio cap rate: {:.2}%", cap),
        None => println!("  Portfolio cap rate: n/a"),
    }
    println!("Per-building metrics written to: {}", output.display());

    Ok(())
}
