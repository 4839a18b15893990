//! KAY Lexer CLI
//!
//! Usage: kaylex <input.kay> [--strict]

use clap::Parser;
use colored::Colorize;
use kaylex::Driver;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "kaylex")]
#[command(version = "0.1.0")]
#[command(about = "KAY Lexer - tokenizes KAY source files", long_about = None)]
struct Args {
    /// Input KAY file (.kay)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Fail when the source contains lexical anomalies
    #[arg(long, default_value_t = false)]
    strict: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Validate input file extension
    if args.input.extension().map_or(true, |ext| ext != "kay") {
        eprintln!(
            "{}: input file must have .kay extension: {}",
            "error".red().bold(),
            args.input.display()
        );
        return ExitCode::FAILURE;
    }

    let driver = Driver::new(args.input.to_string_lossy().to_string());

    let report = match driver.scan() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    print!("{}", report.listing());

    let anomalies = report.anomaly_count();
    if anomalies > 0 {
        eprintln!(
            "\n{}: {} lexical anomal{} in {}",
            "warning".yellow().bold(),
            anomalies,
            if anomalies == 1 { "y" } else { "ies" },
            report.file()
        );

        if args.strict {
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
