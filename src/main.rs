use clap::Parser;
use tickbook::cli::{Cli, Commands};
use tickbook::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Missing or unreadable config falls back to defaults
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    let _guard = tickbook::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Shell(args) => {
            tracing::info!("Starting interactive shell");
            args.execute(&config)?;
        }
        Commands::Stats(args) => {
            args.execute(&config)?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Currency prefix: {}", config.display.currency);
            println!("  Price precision: {}", config.display.price_precision);
            println!("  Human time:      {}", config.display.human_time);
            println!("  Log level:       {}", config.telemetry.log_level);
        }
    }

    Ok(())
}
