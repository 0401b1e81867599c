//! Meeting-Desk: terminal meeting dashboard and live meeting recorder.

mod app;
mod app_command;
mod config;
mod console_notifier;
mod error;
mod logging;
mod route;
mod seed;
mod simulated_gateway;
mod view;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    console_notifier::ConsoleNotifier,
    error::{AppError, Result as AppResult},
    route::Route,
    simulated_gateway::SimulatedGateway,
};

use crate::config::Config;

use tracing::{error, info};

/// Application entry point.
fn main() {
    // Loaded before the subscriber exists, so failures go to stderr.
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    let log_dir = match Config::log_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Failed to prepare log directory: {}", e);
            std::process::exit(1);
        }
    };

    // Dropping the guard flushes pending log lines; keep it for the whole run.
    let log_guard = match logging::init(&config.logging, &log_dir) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialise logging: {}", e);
            std::process::exit(1);
        }
    };

    info!(log_dir = ?log_dir, "Logging initialised");

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    let app = App::new(config, seed::demo_catalog());

    if let Err(e) = rt.block_on(app.run()) {
        error!(error = ?e, "App error");
        drop(log_guard);
        std::process::exit(1);
    }

    drop(log_guard);
}
