//! Run the full scenario comparison for a debt snapshot CSV
//!
//! Outputs a scenario summary CSV and, optionally, the JSON report shape
//! consumed by export collaborators.

use anyhow::Context;
use clap::Parser;
use debt_acceleration::debt::load_debts;
use debt_acceleration::{AccelerationReport, BudgetProfile, ScenarioRunner};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(about = "Compare debt acceleration scenarios for a snapshot of accounts")]
struct Args {
    /// CSV of account snapshots (Name,AccountType,Balance,MinPayment,AnnualRate)
    debts_csv: PathBuf,

    /// Total monthly income
    #[arg(long)]
    income: f64,

    /// Monthly amount available for debt after expenses and savings
    #[arg(long, default_value_t = 0.0)]
    available: f64,

    /// Extra monthly amount the user has committed on top of minimums
    #[arg(long, default_value_t = 0.0)]
    extra: f64,

    /// Where to write the scenario summary CSV
    #[arg(long, default_value = "scenario_summary.csv")]
    output: PathBuf,

    /// Optional path for the JSON report
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let debts = load_debts(&args.debts_csv)
        .map_err(|e| anyhow::anyhow!("{}", e))
        .with_context(|| format!("loading debts from {}", args.debts_csv.display()))?;
    println!("Loaded {} accounts in {:?}", debts.len(), start.elapsed());

    let profile = BudgetProfile {
        monthly_income: args.income,
        available_for_debt: args.available,
        extra_contribution: args.extra,
    };

    let compare_start = Instant::now();
    let comparison = ScenarioRunner::new()
        .compare(&debts, &profile)
        .with_context(|| "scenario comparison rejected")?;
    println!(
        "Simulated {} scenarios in {:?}",
        comparison.scenarios.len() + 1,
        compare_start.elapsed()
    );

    let report = AccelerationReport::from_comparison(&comparison);

    // Scenario summary CSV
    let mut file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    writeln!(
        file,
        "Scenario,ExtraPayment,Months,MonthlyPayment,TotalPaid,TotalInterest,InterestSaved,TimeSavedMonths,RemainingDebt,PaidOff"
    )?;
    for row in &report.scenarios {
        writeln!(
            file,
            "{},{:.2},{},{:.2},{:.2},{:.2},{:.2},{},{:.2},{}",
            row.scenario_name,
            row.extra_payment,
            row.months,
            row.consistent_monthly_payment,
            row.total_paid,
            row.total_interest,
            row.interest_saved,
            row.time_saved_months,
            row.remaining_debt,
            row.paid_off,
        )?;
    }
    println!("Scenario summary written to: {}", args.output.display());

    if let Some(json_path) = &args.json {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(json_path, json)
            .with_context(|| format!("writing {}", json_path.display()))?;
        println!("JSON report written to: {}", json_path.display());
    }

    // Quick console digest: baseline vs the most aggressive scenario
    if let (Some(first), Some(last)) = (report.scenarios.first(), report.scenarios.last()) {
        println!(
            "\nBaseline: {} months, {:.2} interest",
            first.months, first.total_interest
        );
        println!(
            "Best:     {} months, {:.2} interest ({} months and {:.2} saved)",
            last.months, last.total_interest, last.time_saved_months, last.interest_saved
        );
    }

    Ok(())
}
