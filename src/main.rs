use clap::Parser;

use fleetman::cli::{Cli, execute_command};
use fleetman::config::ConfigLoader;
use fleetman::logger::init_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loader = ConfigLoader::new()?;
    let settings = loader.load()?;

    let logger_config = settings.logger.clone().into_logger_config()?;
    init_logger(&logger_config)?;

    execute_command(cli, settings).await
}
