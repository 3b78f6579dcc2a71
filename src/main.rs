use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use autoclicker::{
    status, Cli, ClickWorker, ClickerState, EnigoClicker, HotkeyController, HotkeyListener,
};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Upper bound on waiting for the click worker after the listener returns.
const WORKER_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(1);

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.into_config()?;
    status::settings(&config);
    info!(?config, "configuration loaded");

    let state = Arc::new(ClickerState::new());

    let listener = HotkeyListener::register(&config).context("failed to set up global hotkeys")?;

    let worker = ClickWorker::spawn(
        Arc::clone(&state),
        config.button,
        config.interval(),
        EnigoClicker::new,
    )
    .context("failed to start click worker")?;

    {
        let state = Arc::clone(&state);
        ctrlc::set_handler(move || {
            if state.request_exit() {
                status::exiting();
            }
        })
        .context("failed to install Ctrl-C handler")?;
    }

    status::ready();

    let controller = HotkeyController::new(&config, Arc::clone(&state));
    listener.run(&controller);
    drop(listener);

    if !worker.shutdown(WORKER_SHUTDOWN_TIMEOUT) {
        warn!("exiting without a clean worker shutdown");
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
