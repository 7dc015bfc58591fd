use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;

use tokio::runtime::Builder;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use groupctl::cli::{Cli, Commands};
use groupctl::config::{parse_delimiter, Config};
use groupctl::core::GroupManager;
use groupctl::sanitize::sanitize_error;

fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", sanitize_error(&format!("{:#}", e), cli.api_key.as_deref()));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_env(
        &cli.instance,
        cli.api_key.as_deref(),
        cli.timeout_ms,
        cli.insecure,
    )?;
    debug!("Using instance {}", config.base_url);

    // Each command issues a single request
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;

    runtime.block_on(async_main(cli, &config)).map_err(|e| {
        let message = sanitize_error(&format!("{:#}", e), Some(config.api_key.as_str()));
        anyhow::anyhow!(message)
    })
}

async fn async_main(cli: &Cli, config: &Config) -> Result<()> {
    let manager = GroupManager::new(config)?;

    match &cli.command {
        Commands::Create(args) => {
            let delimiter = parse_delimiter(&args.delimiter)?;
            info!("Creating group '{}' from {:?}", args.name, args.file);
            manager
                .create_group(&args.file, &args.name, delimiter, &args.sample_request())
                .await?;
        }
        Commands::List => {
            manager.list_groups().await?;
        }
        Commands::Show { name } => {
            manager.show_group(name).await?;
        }
        Commands::Search(args) => {
            let criteria = args.criteria()?;
            manager.search_contacts(&criteria).await?;
        }
        Commands::Delete { id } => {
            manager.delete_group(*id).await?;
        }
    }

    Ok(())
}
