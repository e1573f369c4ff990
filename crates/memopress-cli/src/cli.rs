use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Parser)]
#[command(name = "memopress")]
#[command(about = "memopress - publish plain notes as memo documents")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Effective log level: --verbose wins, then --log-level, then warn
    pub fn level_filter(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::DEBUG
        } else {
            self.log_level.map(LevelFilter::from).unwrap_or(LevelFilter::WARN)
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Publish a note file, or every note in a directory, as memos
    Publish(PublishArgs),
}

#[derive(Args)]
pub struct PublishArgs {
    /// Note file or directory of notes to publish
    pub notes: PathBuf,

    /// Directory generated memo files are written to
    #[arg(short = 'o', long, default_value = "_memos")]
    pub memo_dir: PathBuf,

    /// Directory image references are resolved against
    /// (defaults to the notes directory)
    #[arg(long)]
    pub image_source_dir: Option<PathBuf>,

    /// Directory referenced images are copied to
    #[arg(long, default_value = "assets/img")]
    pub image_dest_dir: PathBuf,
}
