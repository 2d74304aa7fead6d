use clap::Args;
use serde::Serialize;

use almanac_core::balance::ElementAnalysis;
use almanac_core::{
    fengshui_advice, lucky_directions, BirthDate, BirthProfile, BirthProfileCalculator, BirthRecord,
    CompassAdvice, Config, ElementBalanceAnalyzer, FengshuiAdvice, FengshuiQuery, Gender,
};

use super::resolve_strategy;

#[derive(Args)]
pub struct BaziArgs {
    /// Birth year, e.g. 1990
    #[arg(long)]
    pub year: String,
    /// Birth month (1-12)
    #[arg(long)]
    pub month: String,
    /// Birth day of month
    #[arg(long)]
    pub day: String,
    /// Birth hour (0-23)
    #[arg(long)]
    pub hour: String,
    /// male or female (defaults to profile.default_gender)
    #[arg(long)]
    pub gender: Option<String>,
    /// Birth place (defaults to profile.default_location)
    #[arg(long)]
    pub location: Option<String>,
    /// Day-cycle strategy: accurate or approximate
    #[arg(long)]
    pub strategy: Option<String>,
    /// Fengshui topic: general, home, career or relationship
    #[arg(long, default_value = "general")]
    pub query: String,
}

#[derive(Serialize)]
struct BaziReport {
    profile: BirthProfile,
    analysis: ElementAnalysis,
    compass: CompassAdvice,
    fengshui: FengshuiAdvice,
}

pub fn run(args: BaziArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let strategy = resolve_strategy(args.strategy.as_deref(), &config)?;
    let query = args.query.parse::<FengshuiQuery>()?;
    tracing::debug!(%query, "fengshui query");

    let birth_date = BirthDate::parse_parts(&args.year, &args.month, &args.day, &args.hour)?;
    let gender = match args.gender.as_deref() {
        Some(g) => g.parse::<Gender>()?,
        None => config.profile.default_gender,
    };
    let location = args
        .location
        .unwrap_or_else(|| config.profile.default_location.clone());

    let profile =
        BirthProfileCalculator::new(strategy).compute(&BirthRecord::new(birth_date, gender, location))?;
    let analysis = ElementBalanceAnalyzer::new().analyze(&profile.tally)?;
    let compass = lucky_directions(&analysis.profile.favorable_elements);
    let fengshui = fengshui_advice(query, &profile, &analysis.profile.favorable_elements);

    let report = BaziReport {
        profile,
        analysis,
        compass,
        fengshui,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
