use clap::Args;
use serde::Serialize;

use almanac_core::compass::DirectionAdvice;
use almanac_core::{
    BirthDate, BirthProfileCalculator, BirthRecord, Config, CoreError, DailyAlmanac,
    DailyAlmanacCalculator,
};

use super::resolve_strategy;

#[derive(Args)]
pub struct DayArgs {
    /// Date as YYYY-MM-DD
    pub date: String,
    /// Birth moment as YYYY-MM-DD-HH for a personal reading
    #[arg(long)]
    pub birth: Option<String>,
    /// Day-cycle strategy: accurate or approximate
    #[arg(long)]
    pub strategy: Option<String>,
}

#[derive(Serialize)]
struct DayReport<'a> {
    almanac: DailyAlmanac,
    wealth_advice: &'a DirectionAdvice,
}

fn parse_birth(text: &str) -> Result<BirthDate, CoreError> {
    let parts: Vec<&str> = text.split('-').collect();
    match parts.as_slice() {
        [year, month, day, hour] => BirthDate::parse_parts(year, month, day, hour),
        _ => Err(CoreError::invalid(
            "birth",
            format!("expected YYYY-MM-DD-HH, got '{text}'"),
        )),
    }
}

pub fn run(args: DayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let strategy = resolve_strategy(args.strategy.as_deref(), &config)?;

    let profile = match args.birth.as_deref() {
        Some(text) => {
            let record = BirthRecord::new(
                parse_birth(text)?,
                config.profile.default_gender,
                config.profile.default_location.clone(),
            );
            Some(BirthProfileCalculator::new(strategy).compute(&record)?)
        }
        None => None,
    };

    let almanac = DailyAlmanacCalculator::new(strategy).compute(&args.date, profile.as_ref())?;
    let wealth_advice = almanac.wealth_direction.advice().value();

    let report = DayReport {
        almanac,
        wealth_advice,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_birth_accepts_four_parts() {
        let birth = parse_birth("1990-06-15-14").unwrap();
        assert_eq!(birth, BirthDate::new(1990, 6, 15, 14).unwrap());
    }

    #[test]
    fn parse_birth_rejects_other_shapes() {
        assert!(parse_birth("1990-06-15").unwrap_err().is_invalid_input());
        assert!(parse_birth("1990-06-15-25").unwrap_err().is_invalid_input());
    }
}
