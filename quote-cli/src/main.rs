use clap::Parser;
use tracing::debug;

use quote_cli::cli::{Cli, Command};
use quote_cli::{app, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose);
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let config = app::load_config(cli.config.as_deref(), cli.tiers.as_deref())?;
    debug!(tiers = config.discount_tiers.len(), "configuration ready");

    let output = match &cli.command {
        Command::Estimate { quote, json } => app::run_estimate(&config, quote, *json)?,
        Command::Presets => app::list_presets(&config),
        Command::Batch { file, json } => app::run_batch(&config, file, *json)?,
        Command::Submit { quote, lead } => app::run_submit(&config, quote, lead).await?,
    };

    println!("{output}");
    Ok(())
}
