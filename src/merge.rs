//! Merging dictionaries: detect, read, union, write.
//!
//! Each input is detected and read on its own, so a failure in one file is
//! recorded and the rest still contribute (unless the policy says abort).
//! A failure while writing the merged output always ends the merge.

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::dictionary::{DictionaryFile, DictionaryFormat, WordSet, write_dictionary};
use crate::discovery::DictionaryLocator;
use crate::error::{DictSyncError, Result};

/// What to do when an input cannot be detected or read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadErrorPolicy {
    /// Record the failure and move on to the next input.
    #[default]
    Continue,
    /// Stop at the first failure and return its error.
    Abort,
}

/// Options for a merge run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeOptions {
    /// Format of the merged output.
    pub target: DictionaryFormat,
    /// Where the merged dictionary is written.
    pub output: PathBuf,
    /// Handling of per-file read errors.
    pub on_read_error: ReadErrorPolicy,
}

impl MergeOptions {
    pub fn new<P: Into<PathBuf>>(target: DictionaryFormat, output: P) -> Self {
        MergeOptions {
            target,
            output: output.into(),
            on_read_error: ReadErrorPolicy::default(),
        }
    }

    pub fn with_read_error_policy(mut self, policy: ReadErrorPolicy) -> Self {
        self.on_read_error = policy;
        self
    }
}

/// An input that did not contribute to the merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Words gathered from a set of inputs.
#[derive(Debug, Clone, Default)]
pub struct Collected {
    pub words: WordSet,
    /// Inputs that were read successfully.
    pub files_read: usize,
    pub failures: Vec<ReadFailure>,
}

/// Summary of a finished merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeReport {
    /// Number of inputs considered, including those that failed.
    pub files_considered: usize,
    pub files_read: usize,
    pub unique_words: usize,
    pub output_format: DictionaryFormat,
    pub output: PathBuf,
    pub failures: Vec<ReadFailure>,
}

/// Detect and read a single dictionary.
pub fn read_dictionary_file<P: AsRef<Path>>(path: P) -> Result<WordSet> {
    DictionaryFile::detect(path)?.read_words()
}

/// Union the words of every input.
///
/// Each failure is logged at warn level as soon as it happens, so it is
/// reported even if the merge later fails as a whole.
pub fn collect_words<P: AsRef<Path>>(paths: &[P], policy: ReadErrorPolicy) -> Result<Collected> {
    let mut collected = Collected::default();

    for path in paths {
        let path = path.as_ref();
        match read_dictionary_file(path) {
            Ok(words) => {
                collected.words.extend_from(words);
                collected.files_read += 1;
            }
            Err(e) => {
                if policy == ReadErrorPolicy::Abort {
                    return Err(e);
                }
                warn!("Error reading {}: {e}", path.display());
                collected.failures.push(ReadFailure {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(collected)
}

/// Merge `paths` into a single dictionary written according to `options`.
///
/// Fails with [`DictSyncError::EmptyInput`] when no paths are given or none of
/// them could be read.
pub fn merge_paths<P: AsRef<Path>>(paths: &[P], options: &MergeOptions) -> Result<MergeReport> {
    if paths.is_empty() {
        return Err(DictSyncError::empty_input("no dictionary files supplied"));
    }

    let collected = collect_words(paths, options.on_read_error)?;
    if collected.files_read == 0 {
        let reasons: Vec<String> = collected
            .failures
            .iter()
            .map(|failure| format!("{}: {}", failure.path.display(), failure.message))
            .collect();
        return Err(DictSyncError::empty_input(format!(
            "none of the {} dictionary files could be read ({})",
            paths.len(),
            reasons.join("; ")
        )));
    }

    write_dictionary(options.target, &collected.words, &options.output)?;

    info!(
        "Merged {} files into {} ({} unique words, {} format)",
        paths.len(),
        options.output.display(),
        collected.words.len(),
        options.target
    );

    Ok(MergeReport {
        files_considered: paths.len(),
        files_read: collected.files_read,
        unique_words: collected.words.len(),
        output_format: options.target,
        output: options.output.clone(),
        failures: collected.failures,
    })
}

/// Merge whatever `locator` finds.
pub fn merge_discovered(
    locator: &dyn DictionaryLocator,
    options: &MergeOptions,
) -> Result<MergeReport> {
    let paths = locator.locate();
    if paths.is_empty() {
        return Err(DictSyncError::empty_input(
            "no dictionary files found in common locations",
        ));
    }
    merge_paths(paths.as_slice(), options)
}
