//! Command line argument parsing for the dictsync CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::dictionary::DictionaryFormat;
use crate::merge::ReadErrorPolicy;

/// dictsync - merge personal spell-checker dictionaries
#[derive(Parser, Debug, Clone)]
#[command(name = "dictsync")]
#[command(about = "Merge Chrome, Firefox and Apple personal spell-checker dictionaries")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct DictSyncArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// How results are reported
    #[arg(long = "report", default_value = "human", global = true)]
    pub report_format: ReportFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl DictSyncArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Merge the given dictionary files
    Merge(MergeArgs),

    /// Find dictionaries in common locations and merge them
    Auto(AutoArgs),

    /// Print the detected format of each file
    Detect(DetectArgs),

    /// Show format, word count and checksum status of a file
    Inspect(InspectArgs),
}

/// Arguments for merging explicit inputs
#[derive(Parser, Debug, Clone)]
pub struct MergeArgs {
    /// Input dictionary files (Chrome, Firefox or Apple format)
    #[arg(value_name = "INPUT", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Output filename (e.g. merged.dat or merged.txt)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Output format
    #[arg(short = 'f', long = "format")]
    pub format: TargetFormat,

    /// Stop at the first unreadable input
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for discovery mode
#[derive(Parser, Debug, Clone)]
pub struct AutoArgs {
    /// Output filename (e.g. merged.dat or merged.txt)
    #[arg(short, long, value_name = "OUTPUT", required_unless_present = "show_found")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", required_unless_present = "show_found")]
    pub format: Option<TargetFormat>,

    /// Show found dictionary files and exit
    #[arg(long)]
    pub show_found: bool,

    /// Stop at the first unreadable input
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for format detection
#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    /// Files to classify
    #[arg(value_name = "INPUT", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,
}

/// Arguments for inspecting one file
#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    /// File to inspect
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

/// Output dictionary formats accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetFormat {
    /// Firefox persdict.dat
    Firefox,
    /// Chrome multi-line dictionary with MD5 checksum
    Chrome,
    /// Chrome single-line dictionary with CRC32 checksum
    ChromeLegacy,
    /// Apple LocalDictionary (Firefox layout)
    Apple,
}

impl From<TargetFormat> for DictionaryFormat {
    fn from(format: TargetFormat) -> Self {
        match format {
            TargetFormat::Firefox => DictionaryFormat::Firefox,
            TargetFormat::Chrome => DictionaryFormat::ChromeNew,
            TargetFormat::ChromeLegacy => DictionaryFormat::ChromeOld,
            TargetFormat::Apple => DictionaryFormat::Apple,
        }
    }
}

/// Report formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

impl MergeArgs {
    pub fn read_error_policy(&self) -> ReadErrorPolicy {
        policy(self.strict)
    }
}

impl AutoArgs {
    pub fn read_error_policy(&self) -> ReadErrorPolicy {
        policy(self.strict)
    }
}

fn policy(strict: bool) -> ReadErrorPolicy {
    if strict {
        ReadErrorPolicy::Abort
    } else {
        ReadErrorPolicy::Continue
    }
}
