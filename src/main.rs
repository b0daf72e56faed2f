use clap::Parser;
use epithet_blacklist::utils::{logger, validation::Validate};
use epithet_blacklist::{BlacklistChecker, BlacklistFile, CheckerConfig, GbifSpeciesLookup};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CheckerConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    config.validate()?;

    let source = BlacklistFile::new(&config.input);
    let checker = BlacklistChecker::new(GbifSpeciesLookup::new(config.species_ws.clone()));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    checker.run(&source, &mut out).await?;

    Ok(())
}
