mod commands;
mod input;
mod logging;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::comparison::{CompareArgs, SummaryArgs};
use commands::mortgage::{AmortizationArgs, PaymentArgs};
use commands::ownership::MonthlyCostArgs;
use commands::sweep::SweepArgs;

/// Compare the long-run cost of buying a home against renting
#[derive(Parser)]
#[command(
    name = "rvb",
    version,
    about = "Compare the long-run cost of buying a home against renting",
    long_about = "A CLI for projecting mortgage amortization, home equity and the \
                  opportunity cost of a down payment with decimal precision. Compares \
                  buying, renting, and renting while investing the difference."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log computation details to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the fixed monthly mortgage payment
    Payment(PaymentArgs),
    /// Monthly cost of owning: mortgage, maintenance, property tax, insurance
    MonthlyCost(MonthlyCostArgs),
    /// Month-by-month amortization schedule
    Amortization(AmortizationArgs),
    /// Year-by-year buy, rent and rent + re-invest projection
    Summary(SummaryArgs),
    /// Full rent vs buy comparison with outcome and breakeven year
    Compare(CompareArgs),
    /// Compare outcomes across a range of home prices
    Sweep(SweepArgs),
    /// Print the default scenario assumptions
    Defaults,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Payment(args) => commands::mortgage::run_payment(args),
        Commands::MonthlyCost(args) => commands::ownership::run_monthly_cost(args),
        Commands::Amortization(args) => commands::mortgage::run_amortization(args),
        Commands::Summary(args) => commands::comparison::run_summary(args),
        Commands::Compare(args) => commands::comparison::run_compare(args),
        Commands::Sweep(args) => commands::sweep::run_sweep(args),
        Commands::Defaults => commands::assumptions::run_defaults(),
        Commands::Version => {
            println!("rvb {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
