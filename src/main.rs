use clap::Parser;
use courtside::cli::{print_config, print_status, Cli, Commands};
use courtside::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            Config::default()
        }
    };

    match cli.command {
        Commands::Run(args) => {
            courtside::telemetry::init_telemetry(&config.telemetry)?;
            tracing::info!(leagues = ?args.leagues, "Starting signal engine");
            args.execute(&config).await?;
        }
        Commands::Status => {
            print_status(&config).await?;
        }
        Commands::Config => {
            print_config(&config);
        }
    }

    Ok(())
}
