// CLI argument definitions using clap

use clap::Parser;
use snowlog::LogLevel;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "snowlog-demo")]
#[command(author = "hatlonely <hatlonely@foxmail.com>")]
#[command(version = "0.1.0")]
#[command(about = "Emit sample records through the snowlog facade", long_about = None)]
pub struct Cli {
    /// Logger config file (.json / .json5 / .yaml / .yml / .toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write records to this file in addition to the console
    #[arg(short, long)]
    pub file: Option<String>,

    /// Rotate the log file once it would grow beyond this many bytes
    #[arg(long)]
    pub max_size: Option<u64>,

    /// Number of log files to keep, including the active one
    #[arg(long)]
    pub max_files: Option<usize>,

    /// Minimum severity: info, warn, error or fatal
    #[arg(short, long)]
    pub level: Option<LogLevel>,

    /// Disable colors on the console
    #[arg(long)]
    pub no_color: bool,

    /// Number of INFO records to emit (default: 3)
    #[arg(short = 'n', long, default_value = "3")]
    pub count: usize,

    /// Emit a FATAL record with this message and abort
    #[arg(long, value_name = "MSG")]
    pub fatal: Option<String>,
}
