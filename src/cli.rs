//! Command-line interface for shapeshow.

use clap::Parser;
use std::path::PathBuf;

use shapeshow_config::resolve_config_path;

/// shapeshow - build shapes and text labels from a scene config
#[derive(Parser, Debug)]
#[command(name = "shapeshow")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory prefix for config.txt (joined as plain text, keep the trailing '/')
    #[arg(long = "config_file_path", value_name = "DIR")]
    pub config_file_path: Option<String>,

    /// Set log level (overrides RUST_LOG)
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,

    /// Number of frames the headless renderer draws
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub frames: u64,

    /// Print the built entities as JSON instead of rendering them
    #[arg(long)]
    pub dump_json: bool,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Runtime options passed from CLI to the application
#[derive(Clone, Debug)]
pub struct RuntimeOptions {
    /// Effective config file path
    pub config_path: PathBuf,
    /// Log level override from CLI
    pub log_level: Option<log::LevelFilter>,
    /// Frames to draw
    pub frames: u64,
    /// Dump JSON instead of rendering
    pub dump_json: bool,
}

impl From<Cli> for RuntimeOptions {
    fn from(cli: Cli) -> Self {
        RuntimeOptions {
            config_path: resolve_config_path(cli.config_file_path.as_deref()),
            log_level: cli.log_level.map(|l| l.to_level_filter()),
            frames: cli.frames,
            dump_json: cli.dump_json,
        }
    }
}

/// Parse process arguments. Usage errors (including a missing
/// `--config_file_path` value) exit here with a non-zero code.
pub fn process_cli() -> RuntimeOptions {
    Cli::parse().into()
}
