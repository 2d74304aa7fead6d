pub mod bazi;
pub mod chart;
pub mod config;
pub mod day;
pub mod range;
pub mod terms;

use almanac_core::{AnchorStrategy, Config};

/// Strategy from `--strategy`, else from the config file.
pub fn resolve_strategy(
    flag: Option<&str>,
    config: &Config,
) -> Result<AnchorStrategy, Box<dyn std::error::Error>> {
    let strategy = match flag {
        Some(s) => s.parse::<AnchorStrategy>()?,
        None => config.clock.strategy,
    };
    tracing::debug!(?strategy, "day-cycle strategy");
    Ok(strategy)
}
