//! `roster` - CLI for teamroster
//!
//! Runs an interactive roster session or inspects the configuration.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use chrono::Datelike;
use clap::Parser;
use tracing::info;

use teamroster::app::{App, AppSettings};
use teamroster::cli::{Cli, Command, ConfigCommand, RunCommand};
use teamroster::session::{LineSource, Session};
use teamroster::store::TeamStore;
use teamroster::{init_logging, Config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config_path = cli.config.clone();
    match cli.into_command() {
        Command::Run(run_cmd) => {
            let config = match config_path {
                Some(path) => Config::load_from(Some(path)),
                None => Config::load(),
            }
            .context("failed to load configuration")?;
            handle_run(config, &run_cmd)
        }
        Command::Config(config_cmd) => handle_config(config_path, config_cmd),
    }
}

fn handle_run(mut config: Config, cmd: &RunCommand) -> anyhow::Result<()> {
    if let Some(timeout_ms) = cmd.idle_timeout_ms {
        config.idle.timeout_ms = timeout_ms;
        config.validate()?;
    }

    let store = if cmd.empty || !config.roster.seed_demo_teams {
        TeamStore::new()
    } else {
        TeamStore::with_demo_teams()
    };
    let ids = config.roster.id_strategy.build(store.max_id());
    let settings = AppSettings::from_config(&config, chrono::Local::now().year());
    let app = App::new(store, ids, settings, Instant::now());
    info!(
        teams = app.store().len(),
        timeout_ms = config.idle.timeout_ms,
        "starting session"
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start runtime")?;

    let result = runtime.block_on(run_session(app, config.refresh_interval()));
    runtime.shutdown_background();
    result
}

async fn run_session(app: App, refresh: Duration) -> anyhow::Result<()> {
    let mut session = Session::new(app, LineSource::stdin()?, std::io::stdout(), refresh);
    tokio::select! {
        result = session.run() => result?,
        _ = tokio::signal::ctrl_c() => {
            println!();
            info!("interrupted");
        }
    }
    Ok(())
}

fn handle_config(config_path: Option<PathBuf>, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = Config::load_from(config_path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Idle]");
                println!("  Timeout (ms):       {}", config.idle.timeout_ms);
                println!("  Throttle (ms):      {}", config.idle.throttle_ms);
                println!("  Refresh (ms):       {}", config.idle.refresh_interval_ms);
                println!();
                println!("[Notifications]");
                println!("  Auto close (ms):    {}", config.notifications.auto_close_ms);
                println!("  Idle warning (ms):  {}", config.notifications.idle_warning_ms);
                println!("  Max visible:        {}", config.notifications.max_visible);
                println!();
                println!("[Roster]");
                println!("  Demo teams:         {}", config.roster.seed_demo_teams);
                println!("  Id strategy:        {:?}", config.roster.id_strategy);
            }
        }
        ConfigCommand::Path => {
            let path = config_path.unwrap_or_else(Config::default_config_path);
            println!("{}", path.display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
