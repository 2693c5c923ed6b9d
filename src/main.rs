use clap::Parser;
use small_school::app::ranking;
use small_school::utils::{logger, validation::Validate};
use small_school::{CliConfig, RosterConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting small-school CLI");
    tracing::debug!("CLI config: {:?}", config);

    let roster = match RosterConfig::from_file(&config.roster) {
        Ok(roster) => roster,
        Err(e) => {
            tracing::error!("Failed to load roster '{}': {}", config.roster, e);
            eprintln!("❌ Failed to load roster '{}': {}", config.roster, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = roster.validate() {
        tracing::error!("Roster validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let mut school = roster.into_school();
    let rows = ranking::rank_groups(&mut school, config.direction.as_deref());

    if rows.is_empty() {
        tracing::warn!("No students matched");
    }

    println!("{}", ranking::render(&rows, config.format)?);
    Ok(())
}
