use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod encode;
pub mod tags;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode newline-delimited JSON values into the tagged wire format.
    Encode(EncodeArgs),
    /// Show the tag registry.
    Tags(TagsArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args),
        Command::Tags(args) => tags::run(args, format),
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum CollectMode {
    /// Frame once on first use, payload-only afterwards.
    Adaptive,
    /// Re-frame every value.
    Eager,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ExtensionKind {
    /// Zero-length extension blobs.
    Empty,
    /// JSON rendering of the whole record.
    Json,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file with one JSON value per line. Default: stdin.
    pub input: Option<PathBuf>,
    /// Output file for the encoded stream. Default: stdout.
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,
    /// Collector discipline.
    #[arg(long, value_enum, default_value = "adaptive")]
    pub mode: CollectMode,
    /// Key (a JSON scalar) reshaping every value into (key, value).
    /// Adaptive mode only.
    #[arg(long)]
    pub key: Option<String>,
    /// Extension blob renderer for tile records.
    #[arg(long, value_enum, default_value = "empty")]
    pub extension: ExtensionKind,
}

#[derive(Args, Debug, Default)]
pub struct TagsArgs {}
