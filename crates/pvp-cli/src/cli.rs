//! CLI argument definitions for the PVP explorer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pvp-explorer",
    version,
    about = "PVP Explorer - Compare retail prices of equivalent medications",
    long_about = "Compare retail prices (PVP) of medications that share an active \
                  ingredient, dose and pharmaceutical form.\n\n\
                  Reads a price list from XLSX, XLS, XLSB, ODS or CSV and narrows it \
                  down one selector at a time."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Prefix each log line with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path of each log event.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

/// Where the price list is read from.
#[derive(Args)]
pub struct SourceArgs {
    /// Price list to load.
    #[arg(
        long = "file",
        value_name = "PATH",
        default_value = "pagina.xlsx",
        global = true
    )]
    pub file: PathBuf,

    /// Worksheet to read (defaults to the first sheet).
    #[arg(long = "sheet", value_name = "NAME", global = true)]
    pub sheet: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the active ingredients in the price list.
    Ingredients,

    /// List the doses available for an ingredient.
    Doses(DosesArgs),

    /// List the pharmaceutical forms available for an ingredient and dose.
    Forms(FormsArgs),

    /// Compare the prices of every product matching a selection.
    Report(ReportArgs),

    /// Pick ingredient, dose and form interactively, then print the report.
    Explore(ExploreArgs),
}

#[derive(Parser)]
pub struct DosesArgs {
    /// Active ingredient ("principio activo").
    #[arg(long = "ingredient", value_name = "INGREDIENT")]
    pub ingredient: String,
}

#[derive(Parser)]
pub struct FormsArgs {
    /// Active ingredient ("principio activo").
    #[arg(long = "ingredient", value_name = "INGREDIENT")]
    pub ingredient: String,

    /// Dose ("dosis").
    #[arg(long = "dose", value_name = "DOSE")]
    pub dose: String,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Active ingredient ("principio activo").
    #[arg(long = "ingredient", value_name = "INGREDIENT")]
    pub ingredient: String,

    /// Dose ("dosis").
    #[arg(long = "dose", value_name = "DOSE")]
    pub dose: String,

    /// Pharmaceutical form ("forma farmacéutica").
    #[arg(long = "form", value_name = "FORM")]
    pub form: String,

    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Parser)]
pub struct ExploreArgs {
    #[command(flatten)]
    pub render: RenderArgs,
}

/// Report presentation options.
#[derive(Args, Clone, Copy)]
pub struct RenderArgs {
    /// Row order of the price table (the charts keep source order).
    #[arg(long = "sort", value_enum, default_value = "none")]
    pub sort: SortArg,

    /// Report output format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    None,
    Asc,
    Desc,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
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
