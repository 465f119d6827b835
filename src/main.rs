//! CLI entry point for the grade calculator.
//!
//! Grades the built-in class roster and prints the report to stdout.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use grade_calculator::analyzers::aggregate::analyze;
use grade_calculator::analyzers::grade::GradeScale;
use grade_calculator::logging::init_logging;
use grade_calculator::output::{print_report, write_csv, write_json};
use grade_calculator::roster::Roster;
use std::io::{self, Write};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "grade_calculator")]
#[command(about = "Calculate averages, letter grades and class statistics", long_about = None)]
#[command(version)]
struct Cli {
    /// Report format written to stdout
    #[arg(short, long, value_enum, default_value_t = Format::Text, env = "GRADE_REPORT_FORMAT")]
    format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Csv,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _file_guard = init_logging()?;

    let cli = Cli::parse();

    let roster = Roster::canonical();
    let scale = GradeScale::canonical();
    info!(students = roster.len(), format = ?cli.format, "Grading roster");

    let report = analyze(&roster, &scale);

    match cli.format {
        Format::Text => print_report(&report)?,
        Format::Json => {
            let mut stdout = io::stdout().lock();
            write_json(&mut stdout, &report)?;
            stdout.flush()?;
        }
        Format::Csv => {
            let mut stdout = io::stdout().lock();
            write_csv(&mut stdout, &report)?;
            stdout.flush()?;
        }
    }

    debug!("Report written");
    Ok(())
}
