#![doc = include_str!("../README.md")]

#[macro_use]
mod macros;

pub mod cli;
pub mod config;
pub mod error;
pub mod global;
pub mod level;
pub mod location;
pub mod logger;
pub mod printer;
pub mod sink;
pub mod stack;

pub use config::{Config, TimeFormat, DEFAULT_TIME_FORMAT};
pub use error::{Error, Result};
pub use global::{
    disable_backtrace, disable_colored, disable_debug, enable_backtrace, enable_colored,
    enable_debug, error_err, fatal_err, global, init, json_debug, recover, set_file_name_mode,
    set_file_name_mode_code, set_output, set_prefix, set_time_format, set_writer, warning_err,
    ResultExt,
};
pub use level::{FileNameMode, Level};
pub use location::CallerLocation;
pub use logger::Logger;
pub use sink::{ConsoleSink, MemorySink, Sink, StreamSink};

use cli::{Cli, Commands};

pub fn run() -> Result<()> {
    let cli = cli::parse_args();
    run_with_cli(cli, global())
}

/// Applies the CLI settings to `logger` and performs the command.
pub fn run_with_cli(cli: Cli, logger: &Logger) -> Result<()> {
    configure(&cli, logger)?;

    match cli.cmd {
        Commands::Demo => {
            info!(logger: logger, "{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            warning!(logger: logger, "cache at {}% capacity", 93);
            error!(logger: logger, "request {} failed: {}", 17, "connection reset");
            debug!(logger: logger, "settings: {:?}", logger.config());
            Ok(())
        }
        Commands::Say(opts) => {
            let message = opts.message.join(" ");
            let location = std::panic::Location::caller().into();
            logger.emit(opts.level, format_args!("{message}"), Some(location));
            Ok(())
        }
        Commands::Json(opts) => {
            match serde_json::from_str::<serde_json::Value>(&opts.json) {
                Ok(value) => logger.json_debug(&value),
                Err(err) => {
                    logger.warning_err(Some(&err));
                }
            }
            Ok(())
        }
        Commands::Fatal(opts) => fatal!(logger: logger, "{}", opts.message.join(" ")),
        Commands::Panic(opts) => {
            let message = opts.message.join(" ");
            if opts.recover {
                logger.recover(|| {
                    log_panic!(logger: logger, "{message}");
                });
                info!(logger: logger, "recovered");
                Ok(())
            } else {
                log_panic!(logger: logger, "{message}")
            }
        }
    }
}

fn configure(cli: &Cli, logger: &Logger) -> Result<()> {
    if cli.color {
        logger.enable_colored();
    }
    if cli.no_backtrace {
        logger.disable_backtrace();
    }
    if cli.no_debug {
        logger.disable_debug();
    }
    logger.set_file_name_mode(cli.file_name);
    if let Some(format) = &cli.time_format {
        logger.set_time_format(format)?;
    }
    if cli.console {
        logger.set_output(ConsoleSink::stdio());
    }
    Ok(())
}
