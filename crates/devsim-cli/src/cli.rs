//! CLI argument definitions for devsim.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "devsim",
    version,
    about = "Simulated cellular device identities and dg emulator directives",
    long_about = "Generate internally consistent simulated device identities \
                  (model, IMEI, IMSI, phone number, operator data, sensors)\n\
                  and the dg configuration directives that apply them to an emulator."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Reference tables file (.json or .toml). Falls back to DEVSIM_REGISTRY,
    /// then to the built-in tables.
    #[arg(long = "registry", value_name = "PATH", global = true)]
    pub registry: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate identities and their dg directive script.
    Generate(GenerateArgs),

    /// List regions with their country codes, carriers and network codes.
    Regions,

    /// List brands, models and type allocation codes.
    Models,

    /// Write the active reference tables to a file for editing.
    ExportRegistry(ExportArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Number of identities to generate.
    #[arg(short = 'n', long = "count", default_value_t = 10)]
    pub count: usize,

    /// Device model label, e.g. "Samsung Galaxy S25".
    #[arg(short = 'm', long = "model")]
    pub model: Option<String>,

    /// Region name, e.g. "China". Unknown names pick a random region.
    #[arg(short = 'r', long = "region")]
    pub region: Option<String>,

    /// Carrier name within the region.
    #[arg(short = 'c', long = "carrier")]
    pub carrier: Option<String>,

    /// Seed for all randomness. Defaults to the current time; the seed used
    /// is logged so the run can be replayed.
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Identity records output file (JSON array).
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = "identities.json"
    )]
    pub output: PathBuf,

    /// Directive script output file.
    #[arg(
        long = "commands-file",
        value_name = "PATH",
        default_value = "dg_commands.txt"
    )]
    pub commands_file: PathBuf,

    /// Print the directive script to stdout instead of writing the commands file.
    #[arg(long = "stdout")]
    pub stdout: bool,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Destination file; the extension selects JSON or TOML.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = "registry.json"
    )]
    pub output: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
