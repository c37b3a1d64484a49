// snowlog demo - drives the logging facade from the command line

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::Path;

use cli::Cli;
use snowlog::{log_fatal, log_info, log_info_if, log_warn, LoggerConfig};

/// Load logger configuration, picking the parser by file extension
fn load_config(path: &Path) -> Result<LoggerConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => LoggerConfig::from_yaml(&content),
        Some("toml") => LoggerConfig::from_toml(&content),
        _ => LoggerConfig::from_json(&content),
    }
    .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}

/// Command line flags override values from the config file
fn build_config(cli: &Cli) -> Result<LoggerConfig> {
    let mut config = match cli.config {
        Some(ref path) => load_config(path)?,
        None => LoggerConfig::default(),
    };

    if let Some(ref file) = cli.file {
        config.file_path = Some(file.clone());
    }
    if let Some(max_size) = cli.max_size {
        config.max_file_size = max_size;
    }
    if let Some(max_files) = cli.max_files {
        config.max_files = max_files;
    }
    if let Some(level) = cli.level {
        config.level = level;
    }
    if cli.no_color {
        config.colored = false;
    }

    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    snowlog::init(config.clone());
    // Records from libraries using the log crate share the same sinks
    if snowlog::log::install_log_bridge().is_err() {
        log_warn!() << "another log crate logger is already installed";
    }

    log_info!() << "snowlog-demo started, level " << config.level;
    for i in 1..=cli.count {
        log_info!() << "record " << i << " of " << cli.count;
    }
    log::info!("forwarded from the log crate");
    log_info_if!(config.file_path.is_none(), "no log file configured, console only");

    if let Some(ref message) = cli.fatal {
        log_fatal!() << message;
    }

    snowlog::shutdown();
    Ok(())
}
