//! Debt Acceleration CLI
//!
//! Demonstration run: compares payoff scenarios for a sample debt set

use debt_acceleration::{AccountKind, BudgetProfile, Debt, ScenarioRunner};
use std::fs::File;
use std::io::Write;

fn main() {
    env_logger::init();

    println!("Debt Acceleration Engine v0.1.0");
    println!("===============================\n");

    let debts = vec![
        Debt::new("Platinum Card", AccountKind::CreditCard, 4200.0, 120.0, 0.13),
        Debt::new("Store Card", AccountKind::CreditCard, 1850.0, 55.0, 0.15),
        Debt::new("Car Loan", AccountKind::Loan, 9600.0, 240.0, 0.07),
    ];

    let profile = BudgetProfile {
        monthly_income: 3200.0,
        available_for_debt: 400.0,
        extra_contribution: 150.0,
    };

    println!("Debts:");
    for debt in &debts {
        println!(
            "  {:<14} {:>10.2} owed, min {:>7.2}/month at {:>5.2}% APR",
            debt.name,
            debt.balance,
            debt.min_payment,
            debt.annual_rate * 100.0
        );
    }
    println!();

    let runner = ScenarioRunner::new();
    let result = runner
        .compare(&debts, &profile)
        .expect("Comparison rejected");

    // Print scenario table, baseline first
    println!(
        "{:<28} {:>8} {:>8} {:>12} {:>12} {:>12} {:>8}",
        "Scenario", "Extra", "Months", "Monthly", "Interest", "Saved", "Faster"
    );
    println!("{}", "-".repeat(94));

    let baseline = &result.baseline;
    println!(
        "{:<28} {:>8.0} {:>8} {:>12.2} {:>12.2} {:>12.2} {:>8}",
        baseline.scenario_name,
        baseline.extra_payment,
        baseline.months,
        baseline.consistent_monthly_payment,
        baseline.total_interest(),
        baseline.interest_saved,
        baseline.time_saved_months,
    );
    for scenario in &result.scenarios {
        println!(
            "{:<28} {:>8.0} {:>8} {:>12.2} {:>12.2} {:>12.2} {:>8}",
            scenario.scenario_name,
            scenario.extra_payment,
            scenario.months,
            scenario.consistent_monthly_payment,
            scenario.total_interest(),
            scenario.interest_saved,
            scenario.time_saved_months,
        );
    }

    // Write the most aggressive scenario's schedule to CSV
    if let Some(best) = result.scenarios.last() {
        let csv_path = "payoff_schedule.csv";
        let mut file = File::create(csv_path).expect("Unable to create CSV file");

        writeln!(file, "Month,TotalPayment,InterestAccrued,RemainingDebt").unwrap();
        for plan in &best.monthly_plan {
            writeln!(
                file,
                "{},{:.2},{:.2},{:.2}",
                plan.month, plan.total_payment, plan.interest_accrued, plan.remaining_debt
            )
            .unwrap();
        }

        println!(
            "\nSchedule for \"{}\" written to: {}",
            best.scenario_name, csv_path
        );

        let summary = best.summary();
        println!("\nSummary:");
        println!("  Months to payoff: {}", summary.months);
        println!("  Monthly payment: {:.2}", summary.consistent_monthly_payment);
        println!("  Total paid: {:.2}", summary.total_paid);
        println!("  Total interest: {:.2}", summary.total_interest);
        println!("  Paid off: {}", summary.paid_off);
    }

    println!("\nTotal debt: {:.2}", result.total_debt);
    println!("Total minimum payments: {:.2}/month", result.total_min_payments);
}
