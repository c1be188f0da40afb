//! Command implementations for the dictsync CLI.

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::dictionary::{DictionaryFile, DictionaryFormat, decode, detect, verify_checksum};
use crate::discovery::{DictionaryLocator, DiscoveryEnv, SystemLocator};
use crate::error::{DictSyncError, Result};
use crate::merge::{MergeOptions, merge_paths};

/// Execute a CLI command.
pub fn execute_command(args: DictSyncArgs) -> Result<()> {
    match &args.command {
        Command::Merge(merge_args) => merge_files(merge_args, &args),
        Command::Auto(auto_args) => {
            let locator = SystemLocator::new(DiscoveryEnv::from_system());
            auto_merge(auto_args, &locator, &args)
        }
        Command::Detect(detect_args) => detect_formats(detect_args, &args),
        Command::Inspect(inspect_args) => inspect_file(inspect_args, &args),
    }
}

/// Merge explicitly listed dictionaries.
fn merge_files(args: &MergeArgs, cli_args: &DictSyncArgs) -> Result<()> {
    let options = MergeOptions::new(DictionaryFormat::from(args.format), &args.output)
        .with_read_error_policy(args.read_error_policy());
    let report = merge_paths(args.inputs.as_slice(), &options)?;
    output_result(&report, cli_args)
}

/// Merge whatever `locator` finds, or just list it with `--show-found`.
pub fn auto_merge(
    args: &AutoArgs,
    locator: &dyn DictionaryLocator,
    cli_args: &DictSyncArgs,
) -> Result<()> {
    let found = locator.locate();

    if args.show_found {
        return output_result(&FoundFiles { files: found }, cli_args);
    }

    if found.is_empty() {
        return Err(DictSyncError::empty_input(
            "no dictionary files found in common locations",
        ));
    }

    let (output, format) = match (&args.output, args.format) {
        (Some(output), Some(format)) => (output, format),
        _ => {
            return Err(DictSyncError::other(
                "--output and --format are required unless --show-found is given",
            ));
        }
    };

    info!("Merging {} discovered dictionaries", found.len());
    let options = MergeOptions::new(DictionaryFormat::from(format), output)
        .with_read_error_policy(args.read_error_policy());
    let report = merge_paths(found.as_slice(), &options)?;
    output_result(&report, cli_args)
}

/// Classify each input.
fn detect_formats(args: &DetectArgs, cli_args: &DictSyncArgs) -> Result<()> {
    let files = args
        .inputs
        .iter()
        .map(|path| match detect(path) {
            Ok(format) => Detection {
                path: path.clone(),
                outcome: DetectionOutcome::Format(format),
            },
            Err(e) => Detection {
                path: path.clone(),
                outcome: DetectionOutcome::Error(e.to_string()),
            },
        })
        .collect();

    output_result(&DetectionResults { files }, cli_args)
}

/// Report format, word count and checksum status of one file.
fn inspect_file(args: &InspectArgs, cli_args: &DictSyncArgs) -> Result<()> {
    let file = DictionaryFile::detect(&args.input)?;
    let path = file.path().to_path_buf();
    let format = file.format();
    let text = file.into_text()?;

    let inspection = Inspection {
        path,
        format,
        word_count: decode(format, &text).len(),
        checksum_valid: verify_checksum(format, &text),
    };
    output_result(&inspection, cli_args)
}
