//! dq-check CLI entry point
//!
//! Runs SQL data-quality suites and maps the aggregate verdict onto exit
//! codes for pipeline use.

use dq_check::cli::args::{Args, Command, ListArgs, RunArgs};
use dq_check::cli::output::get_formatter;
use dq_check::SuiteConfig;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Command::Run(run) => run_suite(&run),
        Command::List(list) => list_suite(&list),
    }
}

/// Exit codes: 0 all checks passed, 1 one or more checks failed,
/// 3 runtime error (bad config, unreachable connection).
fn run_suite(args: &RunArgs) -> ExitCode {
    let config = match SuiteConfig::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(3);
        }
    };

    let report = match dq_check::run_suite(&config, args.conn.as_deref()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(3);
        }
    };

    let formatter = get_formatter(args.format, args.no_color, args.verbose, args.quiet);
    println!("{}", formatter.format(&report));

    if report.has_failures() {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

fn list_suite(args: &ListArgs) -> ExitCode {
    let config = match SuiteConfig::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(3);
        }
    };

    if config.checks.is_empty() {
        println!("Suite has no checks.");
        return ExitCode::SUCCESS;
    }

    println!("Checks in {} (connection '{}'):", args.config.display(), config.connection);
    println!();
    for check in &config.checks {
        match &check.name {
            Some(name) => println!("  {:<32} {} == {}", name, check.query, check.expected),
            None => println!("  {} == {}", check.query, check.expected),
        }
    }

    ExitCode::SUCCESS
}
