use clap::Args;
use serde::Serialize;

use almanac_core::balance::ElementAnalysis;
use almanac_core::{ChartReading, ElementBalanceAnalyzer};

#[derive(Args)]
pub struct ChartArgs {
    /// Four pillars as hanzi, e.g. "庚午 壬午 乙丑 癸未"
    pub pillars: String,
}

#[derive(Serialize)]
struct ChartReport {
    reading: ChartReading,
    analysis: ElementAnalysis,
}

pub fn run(args: ChartArgs) -> Result<(), Box<dyn std::error::Error>> {
    let reading = ChartReading::parse(&args.pillars)?;
    let analysis = ElementBalanceAnalyzer::new().analyze(&reading.tally)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&ChartReport { reading, analysis })?
    );
    Ok(())
}
