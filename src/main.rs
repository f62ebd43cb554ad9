use clap::Command;
use log::{error, info, warn};
use std::process;

use smart_voting::shell::{Shell, StdTerminal};
use smart_voting::{AppConfig, VotingSystem, CONFIG_FILE};

fn main() {
    // Only --help and --version; all interaction happens in the shell
    Command::new("smart-voting")
        .about("Voter registration and single-election voting")
        .version(env!("CARGO_PKG_VERSION"))
        .get_matches();

    let (config, config_warning) = match AppConfig::load(CONFIG_FILE) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if let Err(e) = smart_voting::utils::logging::initialize_logging(
        &config.log_file,
        config.level_filter(),
    ) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    if let Some(e) = config_warning {
        warn!("{}; using default configuration", e);
        eprintln!("Warning: {}; using default configuration", e);
    }

    let system = match VotingSystem::open(&config) {
        Ok(system) => system,
        Err(e) => {
            error!("Initialization failed: {}", e);
            eprintln!("Initialization Error: {}", e);
            process::exit(1);
        }
    };
    info!("Smart Voting System started");

    let result = Shell::new(&system, StdTerminal::new()).run();

    if let Err(e) = system.close() {
        error!("Failed to close database: {}", e);
    }

    if let Err(e) = result {
        error!("Terminal error: {}", e);
        eprintln!("An error occurred: {}", e);
        process::exit(1);
    }
}
