// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use log::{error, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;
use clap::{Parser, ValueEnum, CommandFactory};
use clap_complete::{generate, Shell};

use fixsrt::app_config::{Config, LogLevel};
use fixsrt::{AppError, Controller};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

/// fixsrt - strip rolling-caption overlap lines from SRT files
#[derive(Parser, Debug)]
#[command(name = "fixsrt")]
#[command(version)]
#[command(about = "Remove lines repeated across consecutive cues of auto-generated subtitles")]
#[command(long_about = "fixsrt cleans every SRT file directly inside a directory. A cue's first line is
removed when it repeats the previous cue's last line, cues left without text are
dropped, and the remaining cues are renumbered. Each original is kept next to the
cleaned file with a .bak suffix.

EXAMPLES:
    fixsrt ./subs                            # Clean all *srt files in ./subs
    fixsrt -l debug ./subs                   # Show every stripped line
    fixsrt -c fixsrt.json ./subs             # Use settings from a JSON file
    fixsrt --completions bash > fixsrt.bash  # Generate bash completions")]
struct CommandLineOptions {
    /// Directory containing the subtitle files to clean
    #[arg(value_name = "SRT_DIR")]
    input_dir: Option<PathBuf>,

    /// Configuration file path (JSON)
    #[arg(short, long = "config", value_name = "FILE")]
    config_path: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Print shell completions for fixsrt and exit
    #[arg(long, value_enum, value_name = "SHELL", conflicts_with = "input_dir")]
    completions: Option<Shell>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour and label for log level
    fn get_style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "ERROR"),
            Level::Warn => ("1;33", "WARN "),
            Level::Info => ("1;32", "INFO "),
            Level::Debug => ("1;36", "DEBUG"),
            Level::Trace => ("1;35", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (colour, label) = Self::get_style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                colour, now, label, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // The logger accepts everything; the global max level does the filtering
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "fixsrt", &mut std::io::stdout());
        return Ok(());
    }

    if let Err(e) = run_fix(cli).await {
        error!("{}", e);
        log::logger().flush();
        std::process::exit(1);
    }

    Ok(())
}

async fn run_fix(options: CommandLineOptions) -> Result<(), AppError> {
    let input_dir = options.input_dir.ok_or_else(|| {
        AppError::Usage("srt directory path is not specified\nusage: fixsrt <SRT_DIR>".to_string())
    })?;

    let mut config = match &options.config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    // Command line log level wins over the config file
    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    }
    log::set_max_level(config.log_level.into());

    let controller = Controller::with_config(config)?.with_progress(true);
    controller.run_folder(&input_dir).await?;

    Ok(())
}
