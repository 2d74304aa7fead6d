use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "almanac-cli", version, about = "Sexagenary almanac CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars and element analysis for a birth moment
    Bazi(commands::bazi::BaziArgs),
    /// Element analysis for a chart given as pillar labels
    Chart(commands::chart::ChartArgs),
    /// Daily almanac for a date
    Day(commands::day::DayArgs),
    /// Find auspicious days in a date range
    Range(commands::range::RangeArgs),
    /// Approximate solar terms of a year
    Terms(commands::terms::TermsArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Bazi(args) => commands::bazi::run(args),
        Commands::Chart(args) => commands::chart::run(args),
        Commands::Day(args) => commands::day::run(args),
        Commands::Range(args) => commands::range::run(args),
        Commands::Terms(args) => commands::terms::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
