//! Appinfo main entry point

use appinfo_api::start_server;
use appinfo_config::Config;
use clap::Parser;
use std::path::PathBuf;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "appinfo")]
#[command(version = "0.1.0")]
#[command(about = "Serves the configured application name and description over HTTP", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // A missing config file is not an error: the service still answers with
    // empty name/description values.
    let (config, loaded) = if args.config.exists() {
        (Config::load(&args.config)?, true)
    } else {
        (Config::default(), false)
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.logging.level),
    )
    .init();

    if loaded {
        log::info!("Config loaded from {}", args.config.display());
    } else {
        log::warn!(
            "Config file not found: {}, using defaults",
            args.config.display()
        );
    }

    let rt = Runtime::new()?;
    rt.block_on(start_server(config));

    Ok(())
}
