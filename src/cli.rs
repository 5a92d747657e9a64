use clap::{Args, Parser, Subcommand};

use crate::level::{FileNameMode, Level};

#[derive(Parser, Debug)]
#[command(
    name = "stacklog",
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None
)]
pub struct Cli {
    /// Wrap lines in ANSI colors
    #[arg(long, global = true)]
    pub color: bool,

    /// Do not print stack traces for warnings and errors
    #[arg(long = "no-backtrace", global = true)]
    pub no_backtrace: bool,

    /// Drop debug lines
    #[arg(long = "no-debug", global = true)]
    pub no_debug: bool,

    /// Caller location after the level label: none, short or long
    #[arg(long = "file-name", value_name = "MODE", default_value = "none", global = true)]
    pub file_name: FileNameMode,

    /// Timestamp layout in `time` format description syntax
    #[arg(long = "time-format", value_name = "FORMAT", global = true)]
    pub time_format: Option<String>,

    /// Send warnings and errors to stderr, everything else to stdout
    #[arg(long, global = true)]
    pub console: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one line at every level
    Demo,
    /// Print a message at the given level
    Say(SayOptions),
    /// Pretty-print a JSON document as a debug line
    Json(JsonOptions),
    /// Log an error and exit with status 1
    Fatal(MessageOptions),
    /// Log an error and unwind
    Panic(PanicOptions),
}

#[derive(Args, Debug)]
#[command(trailing_var_arg = true)]
pub struct SayOptions {
    /// info, warning, error or debug
    #[arg(name = "LEVEL")]
    pub level: Level,

    /// Words of the message
    #[arg(name = "MESSAGE", required = true)]
    pub message: Vec<String>,
}

#[derive(Args, Debug)]
pub struct JsonOptions {
    /// JSON text
    #[arg(name = "JSON")]
    pub json: String,
}

#[derive(Args, Debug)]
#[command(trailing_var_arg = true)]
pub struct MessageOptions {
    #[arg(name = "MESSAGE", required = true)]
    pub message: Vec<String>,
}

#[derive(Args, Debug)]
#[command(trailing_var_arg = true)]
pub struct PanicOptions {
    /// Catch the panic and log it instead of exiting
    #[arg(short, long)]
    pub recover: bool,

    #[arg(name = "MESSAGE", required = true)]
    pub message: Vec<String>,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
