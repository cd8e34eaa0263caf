//! Compare a current loan against lender refinance offers
//!
//! Recommends offers from the lender program catalog for an eligible
//! borrower, runs the comparison engine, and prints a savings table.
//! Supports JSON output for API integration via --json and a parallel
//! market-rate sensitivity sweep via --sweep.

use anyhow::{Context, Result};
use clap::Parser;
use loan_navigator::comparison::ComparisonEngine;
use loan_navigator::offers::{self, loader, BorrowerProfile};
use loan_navigator::{LenderProgram, LoanTerms};
use rayon::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "compare_offers", about = "Refinance comparison and savings calculator")]
struct Args {
    /// Current outstanding principal in dollars
    #[arg(long, default_value_t = 20_000.0)]
    principal: f64,

    /// Current APR, percent
    #[arg(long, default_value_t = 7.0)]
    rate: f64,

    /// Years remaining on the current loan
    #[arg(long, default_value_t = 10.0)]
    years_left: f64,

    /// Borrower's gross annual income
    #[arg(long, default_value_t = 50_000.0)]
    income: f64,

    /// Borrower's credit score
    #[arg(long, default_value_t = 700)]
    credit_score: u32,

    /// Prevailing market refinance rate, percent; defaults to the current APR
    #[arg(long)]
    market_rate: Option<f64>,

    /// Path to a lender program catalog CSV (defaults to the bundled catalog)
    #[arg(long)]
    programs: Option<String>,

    /// Emit the full comparison result as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Run a market-rate sensitivity sweep (+/- 1% in 0.25% steps)
    #[arg(long)]
    sweep: bool,
}

fn load_catalog(args: &Args) -> Vec<LenderProgram> {
    let loaded = match &args.programs {
        Some(path) => loader::load_programs(std::path::Path::new(path)),
        None => loader::load_default_programs(),
    };
    match loaded {
        Ok(programs) => programs,
        Err(err) => {
            log::warn!("falling back to built-in lender catalog: {}", err);
            offers::default_programs()
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let current = LoanTerms::new(args.principal, args.rate, args.years_left)
        .context("invalid current loan terms")?;
    let profile = BorrowerProfile::new(args.income, args.credit_score);
    let market_rate = args.market_rate.unwrap_or(args.rate);

    let programs = load_catalog(&args);
    let recommended = offers::recommend_offers(&profile, market_rate, &programs);

    if recommended.is_empty() {
        println!(
            "No refinance offers available: borrower not eligible \
             (requires credit score >= 600 and income over $20,000)."
        );
        return Ok(());
    }

    let engine = ComparisonEngine::default();
    let result = engine.compare(&current, &recommended)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Refinance Comparison");
    println!("====================\n");
    println!(
        "Current loan: ${:.2} at {}% with {} years left",
        current.principal, current.annual_rate_pct, current.term_years
    );
    println!(
        "  Monthly payment ${:.2}, total paid ${:.2}, total interest ${:.2}\n",
        result.current.summary.monthly_payment,
        result.current.summary.total_paid,
        result.current.summary.total_interest,
    );

    println!("{:<12} {:>8} {:>7} {:>10} {:>12} {:>14} {:>16}",
        "Lender", "Rate", "Term", "Payment", "Total Paid", "Total Savings", "Interest Savings");
    println!("{}", "-".repeat(84));

    for outcome in &result.alternatives {
        println!("{:<12} {:>7.2}% {:>6.1}y {:>10.2} {:>12.2} {:>14.2} {:>16.2}",
            outcome.lender.as_deref().unwrap_or("(offer)"),
            outcome.scenario.terms.annual_rate_pct,
            outcome.scenario.terms.term_years,
            outcome.scenario.summary.monthly_payment,
            outcome.scenario.summary.total_paid,
            outcome.payment_savings,
            outcome.interest_savings,
        );
    }

    let best_index = result
        .alternatives
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| {
            a.interest_savings
                .partial_cmp(&b.interest_savings)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i);

    if let Some(best_index) = best_index {
        let best = &result.alternatives[best_index];
        println!(
            "\nBest interest savings: {} (${:.2})",
            best.lender.as_deref().unwrap_or("(offer)"),
            best.interest_savings
        );

        // Cumulative savings milestones for the best offer over the shared horizon
        if let Some(timeline) = result.savings_timeline(best_index) {
            println!("\nCumulative savings vs current loan:");
            for &milestone in &[12usize, 36, 60, 120] {
                if let Some(point) = timeline.get(milestone - 1) {
                    println!("  Month {:>3}: ${:>10.2}", point.month, point.cumulative_savings);
                }
            }
        }
    }

    if args.sweep {
        run_sensitivity_sweep(&engine, &current, &profile, market_rate, &programs);
    }

    Ok(())
}

/// Re-run the comparison across a grid of market rates in parallel and report
/// the best interest savings at each point
fn run_sensitivity_sweep(
    engine: &ComparisonEngine,
    current: &LoanTerms,
    profile: &BorrowerProfile,
    market_rate: f64,
    programs: &[LenderProgram],
) {
    let deltas: Vec<f64> = (-4..=4).map(|step| step as f64 * 0.25).collect();

    let mut rows: Vec<(f64, Option<f64>)> = deltas
        .par_iter()
        .map(|&delta| {
            let rate = (market_rate + delta).max(0.0);
            let offers = offers::recommend_offers(profile, rate, programs);
            let best = engine
                .compare(current, &offers)
                .ok()
                .and_then(|r| r.best_by_interest().map(|o| o.interest_savings));
            (rate, best)
        })
        .collect();
    rows.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    println!("\nMarket-rate sensitivity (best interest savings per rate):");
    println!("{:>8} {:>16}", "Rate", "Best Savings");
    for (rate, savings) in rows {
        match savings {
            Some(s) => println!("{:>7.2}% {:>16.2}", rate, s),
            None => println!("{:>7.2}% {:>16}", rate, "n/a"),
        }
    }
}
