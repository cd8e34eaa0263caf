//! CSV-based lender program loader
//!
//! Loads refinance program catalogs from `data/lender_programs.csv`

use std::error::Error;
use std::fs::File;
use std::path::Path;

use super::LenderProgram;

/// Default path to the bundled lender program catalog
pub const DEFAULT_PROGRAMS_PATH: &str = "data/lender_programs.csv";

/// Load lender programs from a CSV file with columns
/// `lender,url,rate_adjustment_pct,term_years`
pub fn load_programs(path: &Path) -> Result<Vec<LenderProgram>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut programs = Vec::new();

    for result in reader.records() {
        let record = result?;
        let lender = record[0].to_string();
        let url = record[1].to_string();
        let rate_adjustment_pct: f64 = record[2].parse()?;
        let term_years: f64 = record[3].parse()?;

        programs.push(LenderProgram {
            lender,
            url,
            rate_adjustment_pct,
            term_years,
        });
    }

    log::debug!("loaded {} lender program(s) from {}", programs.len(), path.display());

    Ok(programs)
}

/// Load the bundled default catalog
pub fn load_default_programs() -> Result<Vec<LenderProgram>, Box<dyn Error>> {
    load_programs(Path::new(DEFAULT_PROGRAMS_PATH))
}
