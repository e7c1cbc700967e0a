//! Property Metrics CLI
//!
//! Computes investment metrics and what-if scenarios for one building,
//! either from a CSV export or from a built-in demo snapshot.

use anyhow::{bail, Context, Result};
use clap::Parser;
use property_metrics::{
    calculate_metrics, project_cashflows, sensitivity_sweep, simulate_rehab, solve_irr_default,
    snapshot::load_snapshots, BuildingValuation, CashflowParams, Currency, FinancialSnapshot,
    Period, RehabParams,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "property_metrics", about = "Real-estate metrics and scenario report")]
struct Args {
    /// CSV export of snapshot records; omit to run the built-in demo building
    #[arg(long)]
    input: Option<PathBuf>,

    /// Building to report on (defaults to the first record)
    #[arg(long)]
    building: Option<u32>,

    /// Period view for flow figures
    #[arg(long, default_value = "annual")]
    period: String,

    /// Projection horizon in years
    #[arg(long, default_value_t = 5)]
    years: u32,

    /// Discount rate as a decimal
    #[arg(long, default_value_t = 0.08)]
    discount_rate: f64,

    /// Emit the full report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    metrics: property_metrics::MetricsResult,
    rehab: property_metrics::RehabSimulation,
    projection: property_metrics::CashflowProjection,
    npv: f64,
    irr: property_metrics::IrrResult,
    sensitivity: property_metrics::SensitivityResult,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let period = match args.period.as_str() {
        "annual" => Period::Annual,
        "monthly" => Period::Monthly,
        other => bail!("unknown period '{}', expected annual or monthly", other),
    };

    let (snapshot, valuation) = match &args.input {
        Some(path) => {
            let records = load_snapshots(path)
                .with_context(|| format!("loading snapshots from {}", path.display()))?;
            log::info!("loaded {} snapshot records", records.len());

            let record = match args.building {
                Some(id) => records
                    .into_iter()
                    .find(|r| r.snapshot.building_id == id)
                    .with_context(|| format!("no snapshot for building {}", id))?,
                None => records
                    .into_iter()
                    .next()
                    .context("input file contains no records")?,
            };
            (Some(record.snapshot), record.valuation)
        }
        None => demo_building(),
    };

    let metrics = calculate_metrics(snapshot.as_ref(), &valuation, period);

    let rehab_params = RehabParams {
        renovation_cost: valuation
            .renovation_cost
            .or(snapshot.as_ref().and_then(|s| s.estimated_renovation_cost))
            .unwrap_or(0.0),
        annual_energy_savings: None,
        annual_subsidy: None,
        method: None,
    };
    let rehab = simulate_rehab(&rehab_params, snapshot.as_ref(), &valuation);

    let projection_params = CashflowParams {
        years: Some(args.years),
        initial_investment: None,
        discount_rate: Some(args.discount_rate),
        scenario_id: None,
        period,
    };
    let projection = project_cashflows(&projection_params, snapshot.as_ref(), &valuation);

    let npv = property_metrics::scenario::npv(
        &projection.cashflows,
        projection.initial_investment,
        projection.discount_rate,
    );
    let irr = solve_irr_default(&projection.cashflows, projection.initial_investment);
    let sensitivity = sensitivity_sweep(
        &projection.cashflows,
        projection.initial_investment,
        projection.discount_rate,
        None,
    );

    let report = Report {
        metrics,
        rehab,
        projection,
        npv,
        irr,
        sensitivity,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &Report) {
    let fmt = |v: Option<f64>| match v {
        Some(x) => format!("{:.2}", x),
        None => "n/a".to_string(),
    };

    println!(
        "Building {} ({:?}, {})",
        report.metrics.building_id,
        report.metrics.period,
        report.metrics.currency.as_str()
    );
    println!("{}", "-".repeat(50));
    println!("  NOI:          {}", fmt(report.metrics.noi));
    println!("  Cap Rate %:   {}", fmt(report.metrics.cap_rate_pct));
    println!("  ROI %:        {}", fmt(report.metrics.roi_pct));
    println!("  DSCR:         {}", fmt(report.metrics.dscr));
    println!("  OPEX Ratio %: {}", fmt(report.metrics.opex_ratio_pct));
    println!("  Value Gap %:  {}", fmt(report.metrics.value_gap_pct));

    println!("\nRehab: {}", report.rehab.notes);
    println!("  Payback months: {}", fmt(report.rehab.payback_months));
    println!("  Simple ROI %:   {:.2}", report.rehab.simple_roi_pct);

    println!(
        "\nProjection {} ({} years @ {:.1}%):",
        report.projection.scenario_id,
        report.projection.years,
        report.projection.discount_rate * 100.0
    );
    println!("  Cashflows:  {:?}", report.projection.cashflows);
    println!("  Investment: {:.2}", report.projection.initial_investment);
    println!("  NPV:        {:.2}", report.npv);
    match report.irr.irr {
        Some(irr) => println!("  IRR:        {:.4} ({} iterations)", irr, report.irr.iterations),
        None => println!("  IRR:        no solution ({} iterations)", report.irr.iterations),
    }

    println!("\nSensitivity (base NPV {:.2}):", report.sensitivity.base_npv);
    for point in &report.sensitivity.points {
        println!("  {:>5.1}% -> {:>14.2}", point.discount_rate * 100.0, point.npv);
    }
}

/// Built-in demo building used when no input file is given
fn demo_building() -> (Option<FinancialSnapshot>, BuildingValuation) {
    let snapshot = FinancialSnapshot {
        building_id: 1,
        period_start: chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        period_end: chrono::NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        currency: Currency::Eur,
        gross_annual_revenue: 120_000.0,
        other_annual_revenue: Some(6_000.0),
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
    };

    let valuation = BuildingValuation {
        building_id: 1,
        market_value: Some(1_000_000.0),
        estimated_value: Some(1_100_000.0),
        renovation_cost: Some(50_000.0),
    };

    (Some(snapshot), valuation)
}
