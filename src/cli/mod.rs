//! Command-line interface for fleetman.
//!
//! Argument parsing with clap plus dispatch to the serve and migrate
//! commands. Configuration comes from the layered loader; a few serve
//! options can be overridden on the command line.

use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::db::{apply_migrations, pending_migrations, revert_migrations};
use crate::server;

/// Fleet management record-keeping API
#[derive(Parser, Debug)]
#[command(name = "fleetman")]
#[command(about = "Fleet management API: drivers, trucks, and assignments")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    /// Subcommand to execute; defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve {
        /// Host address to bind to, overriding the configuration
        #[arg(long, value_name = "ADDRESS")]
        host: Option<String>,

        /// Port to listen on, overriding the configuration
        #[arg(short, long, value_name = "PORT")]
        port: Option<u16>,

        /// Validate configuration and exit without starting the server
        #[arg(long)]
        dry_run: bool,
    },

    /// Run database migrations
    Migrate {
        /// List pending migrations without applying them
        #[arg(long)]
        dry_run: bool,

        /// Roll back the given number of applied migrations instead
        #[arg(long, value_name = "STEPS")]
        rollback: Option<u32>,
    },
}

/// Execute the parsed CLI command with the loaded settings.
pub async fn execute_command(cli: Cli, mut settings: Settings) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Serve {
            host,
            port,
            dry_run,
        }) => {
            if let Some(host) = host {
                settings.server.host = host;
            }
            if let Some(port) = port {
                settings.server.port = port;
            }

            if dry_run {
                settings.database.validate()?;
                tracing::info!(
                    address = %settings.server.address(),
                    "Configuration valid, exiting (dry run)"
                );
                return Ok(());
            }

            server::Server::new(settings).run().await
        }
        None => server::Server::new(settings).run().await,
        Some(Commands::Migrate { dry_run, rollback }) => {
            settings.database.validate()?;
            run_migrate(&settings.database.url, dry_run, rollback).await
        }
    }
}

async fn run_migrate(
    database_url: &str,
    dry_run: bool,
    rollback: Option<u32>,
) -> anyhow::Result<()> {
    if let Some(steps) = rollback {
        let reverted = revert_migrations(database_url, steps).await?;
        tracing::info!(reverted, "Migrations rolled back");
        return Ok(());
    }

    if dry_run {
        let pending = pending_migrations(database_url).await?;
        if pending.is_empty() {
            tracing::info!("No pending migrations");
        } else {
            for name in &pending {
                tracing::info!(migration = %name, "Pending migration");
            }
        }
        return Ok(());
    }

    let applied = apply_migrations(database_url).await?;
    if applied.is_empty() {
        tracing::info!("Database is up to date");
    } else {
        for name in &applied {
            tracing::info!(migration = %name, "Applied migration");
        }
    }
    Ok(())
}
