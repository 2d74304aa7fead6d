use clap::Args;

use almanac_core::almanac::solar_terms;

#[derive(Args)]
pub struct TermsArgs {
    /// Civil year
    pub year: i32,
}

pub fn run(args: TermsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let terms = solar_terms(args.year);
    println!("{}", serde_json::to_string_pretty(&terms)?);
    Ok(())
}
