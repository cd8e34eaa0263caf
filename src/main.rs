//! Loan Navigator CLI
//!
//! Computes an amortization schedule for a single loan, prints the leading
//! rows and summary metrics, and writes the full schedule to CSV

use anyhow::{Context, Result};
use clap::Parser;
use loan_navigator::{AmortizationEngine, LoanTerms};
use std::fs::File;
use std::io::Write;

#[derive(Parser, Debug)]
#[command(name = "loan_navigator", about = "Student loan amortization calculator")]
struct Args {
    /// Loan principal in dollars
    #[arg(long, default_value_t = 20_000.0)]
    principal: f64,

    /// Annual interest rate, percent
    #[arg(long, default_value_t = 5.0)]
    rate: f64,

    /// Loan term in years (fractional allowed)
    #[arg(long, default_value_t = 10.0)]
    years: f64,

    /// Path for the full schedule CSV
    #[arg(long, default_value = "student_loan_amortization.csv")]
    output: String,

    /// Number of leading schedule rows to print
    #[arg(long, default_value_t = 24)]
    preview_rows: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Loan Navigator v0.1.0");
    println!("=====================\n");

    let terms = LoanTerms::new(args.principal, args.rate, args.years)
        .context("invalid loan terms")?;

    println!("Loan: ${:.2} at {}% over {} years", terms.principal, terms.annual_rate_pct, terms.term_years);
    println!();

    let engine = AmortizationEngine::default();
    let schedule = engine.schedule(&terms).context("failed to build schedule")?;
    let summary = schedule.summary();

    // Print header
    println!("Amortization Schedule ({} months):", schedule.len());
    println!("{:>5} {:>12} {:>16} {:>15} {:>18}",
        "Month", "Payment", "Principal Paid", "Interest Paid", "Remaining Balance");
    println!("{}", "-".repeat(70));

    for row in schedule.rows.iter().take(args.preview_rows) {
        println!("{:>5} {:>12.2} {:>16.2} {:>15.2} {:>18.2}",
            row.month,
            row.payment,
            row.principal_paid,
            row.interest_paid,
            row.remaining_balance,
        );
    }

    if schedule.len() > args.preview_rows {
        println!("... ({} more months)", schedule.len() - args.preview_rows);
    }

    // Write full schedule to CSV
    let mut file = File::create(&args.output)
        .with_context(|| format!("unable to create {}", args.output))?;

    writeln!(file, "Month,Payment,Principal Paid,Interest Paid,Remaining Balance")?;
    for row in &schedule.rows {
        writeln!(file, "{},{:.2},{:.2},{:.2},{:.2}",
            row.month,
            row.payment,
            row.principal_paid,
            row.interest_paid,
            row.remaining_balance,
        )?;
    }

    println!("\nFull schedule written to: {}", args.output);

    println!("\nSummary:");
    println!("  Monthly Payment:     ${:.2}", summary.monthly_payment);
    println!("  Total Months:        {}", summary.months);
    println!("  Total Paid:          ${:.2}", summary.total_paid);
    println!("  Total Interest:      ${:.2}", summary.total_interest);
    println!("  Total Principal:     ${:.2}", summary.total_principal);
    println!("  Final Balance:       ${:.2}", schedule.final_balance());

    Ok(())
}
