use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::process;
use std::time::Instant;
use tracing::info;

mod cli;

use cli::settings::{handle_settings_command, SettingsCommands};
use setkeep_cli::demo::run_demo_for;
use setkeep_cli::logging::init_tracing;
use setkeep_cli::Config;
use setkeep_storage::SettingsStore;

#[derive(Parser)]
#[command(name = "setkeep")]
#[command(about = "setkeep - embedded key-value settings store")]
#[command(version)]
struct Cli {
    /// Directory holding the settings database
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Database name (".db" is appended when missing)
    #[arg(long, global = true)]
    name: Option<String>,

    /// Log everything down to trace level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demonstration scenario in its own database
    Demo,
    #[command(flatten)]
    Settings(SettingsCommands),
}

#[tokio::main]
async fn main() {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = match Config::from_env() {
        Ok(config) => config.with_overrides(cli.data_dir.clone(), cli.name.clone()),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    };

    // Held for the whole run so buffered file logs are flushed on exit
    let _log_guard = init_tracing(cli.verbose, &config.log_dir());
    let started = Instant::now();

    let result = handle_command(cli.command, &config).await;

    info!("Duration: {:?}", started.elapsed());
    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn handle_command(command: Commands, config: &Config) -> anyhow::Result<()> {
    match command {
        Commands::Demo => {
            run_demo_for(config).await?;
            info!("Done");
            Ok(())
        }
        Commands::Settings(command) => {
            let store = SettingsStore::initialize(config.store_config()).await?;
            handle_settings_command(&store, command).await
        }
    }
}
