use clap::Args;

use almanac_core::{ActivityType, AuspiciousRangeFinder, Config, DailyAlmanacCalculator};

use super::resolve_strategy;

#[derive(Args)]
pub struct RangeArgs {
    /// First date (YYYY-MM-DD), inclusive
    pub start: String,
    /// Last date (YYYY-MM-DD), inclusive
    pub end: String,
    /// general, wedding, moving or business
    #[arg(long, default_value = "general")]
    pub activity: String,
    /// Maximum number of days to return (defaults to range.result_limit)
    #[arg(long)]
    pub limit: Option<usize>,
    /// Day-cycle strategy: accurate or approximate
    #[arg(long)]
    pub strategy: Option<String>,
}

pub fn run(args: RangeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let strategy = resolve_strategy(args.strategy.as_deref(), &config)?;
    let activity: ActivityType = args.activity.parse()?;

    let finder = AuspiciousRangeFinder::new(DailyAlmanacCalculator::new(strategy))
        .with_max_span_days(config.range.max_span_days)
        .with_limit(args.limit.unwrap_or(config.range.result_limit));

    let days = finder.find(&args.start, &args.end, activity)?;
    println!("{}", serde_json::to_string_pretty(&days)?);
    Ok(())
}
