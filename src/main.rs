//! geoshelf - console inventory for 2D and 3D shapes
//!
//! Reads menu choices from stdin and writes results to stdout. Logs go to
//! stderr through env_logger.

use std::io;

use geoshelf::config::AppConfig;
use geoshelf::systems::Session;

fn main() {
    let config = AppConfig::load();

    // Initialize logging; RUST_LOG wins over the configured level
    let level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    log::info!("Starting geoshelf");

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock()).with_config(&config);

    if let Err(e) = session.run() {
        log::error!("Console I/O failed: {}", e);
        std::process::exit(1);
    }
}
