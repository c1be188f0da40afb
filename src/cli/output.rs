//! Output formatting for CLI commands.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::args::{DictSyncArgs, ReportFormat};
use crate::dictionary::DictionaryFormat;
use crate::error::Result;
use crate::merge::MergeReport;

/// Result structure for `auto --show-found`.
#[derive(Debug, Serialize, Deserialize)]
pub struct FoundFiles {
    pub files: Vec<PathBuf>,
}

/// One line of `detect` output.
#[derive(Debug, Serialize, Deserialize)]
pub struct Detection {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: DetectionOutcome,
}

/// Either the detected format or why detection failed.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionOutcome {
    Format(DictionaryFormat),
    Error(String),
}

/// Result structure for `detect`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DetectionResults {
    pub files: Vec<Detection>,
}

/// Result structure for `inspect`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Inspection {
    pub path: PathBuf,
    pub format: DictionaryFormat,
    pub word_count: usize,
    /// `None` when the format carries no checksum.
    pub checksum_valid: Option<bool>,
}

/// Human-readable rendering of a result.
pub trait HumanOutput {
    fn lines(&self) -> Vec<String>;
}

impl HumanOutput for MergeReport {
    fn lines(&self) -> Vec<String> {
        vec![format!(
            "Merged {} files into '{}' ({} unique words, {} format).",
            self.files_considered,
            self.output.display(),
            self.unique_words,
            self.output_format
        )]
    }
}

impl HumanOutput for FoundFiles {
    fn lines(&self) -> Vec<String> {
        let mut lines = vec!["Found dictionary files:".to_string()];
        lines.extend(self.files.iter().map(|path| path.display().to_string()));
        lines
    }
}

impl HumanOutput for DetectionResults {
    fn lines(&self) -> Vec<String> {
        self.files
            .iter()
            .map(|entry| match &entry.outcome {
                DetectionOutcome::Format(format) => format!("{}: {format}", entry.path.display()),
                DetectionOutcome::Error(error) => format!("{}: {error}", entry.path.display()),
            })
            .collect()
    }
}

impl HumanOutput for Inspection {
    fn lines(&self) -> Vec<String> {
        let checksum = match self.checksum_valid {
            Some(true) => "valid",
            Some(false) => "mismatch",
            None => "none",
        };
        vec![
            format!("File: {}", self.path.display()),
            format!("Format: {}", self.format),
            format!("Words: {}", self.word_count),
            format!("Checksum: {checksum}"),
        ]
    }
}

/// Output a result in the selected report format.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &DictSyncArgs) -> Result<()> {
    match args.report_format {
        ReportFormat::Human => {
            if args.verbosity() > 0 {
                for line in result.lines() {
                    println!("{line}");
                }
            }
            Ok(())
        }
        ReportFormat::Json => {
            println!("{}", render_json(result, args.pretty)?);
            Ok(())
        }
    }
}

/// Serialize a result as JSON.
pub fn render_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::ReadFailure;

    fn sample_report() -> MergeReport {
        MergeReport {
            files_considered: 2,
            files_read: 1,
            unique_words: 3,
            output_format: DictionaryFormat::ChromeNew,
            output: PathBuf::from("merged.txt"),
            failures: vec![ReadFailure {
                path: PathBuf::from("bad.txt"),
                message: "Cannot determine format of file: bad.txt".to_string(),
            }],
        }
    }

    #[test]
    fn test_merge_summary_line() {
        assert_eq!(
            sample_report().lines(),
            vec!["Merged 2 files into 'merged.txt' (3 unique words, chrome-new format)."]
        );
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&sample_report(), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["unique_words"], 3);
        assert_eq!(value["output_format"], "chrome-new");
        assert_eq!(value["failures"][0]["path"], "bad.txt");
    }

    #[test]
    fn test_detection_lines() {
        let results = DetectionResults {
            files: vec![
                Detection {
                    path: PathBuf::from("persdict.dat"),
                    outcome: DetectionOutcome::Format(DictionaryFormat::Firefox),
                },
                Detection {
                    path: PathBuf::from("notes.txt"),
                    outcome: DetectionOutcome::Error(
                        "Cannot determine format of file: notes.txt".to_string(),
                    ),
                },
            ],
        };
        assert_eq!(
            results.lines(),
            vec![
                "persdict.dat: firefox",
                "notes.txt: Cannot determine format of file: notes.txt",
            ]
        );
    }

    #[test]
    fn test_detection_json_has_format_or_error() {
        let results = DetectionResults {
            files: vec![
                Detection {
                    path: PathBuf::from("Custom Dictionary.txt"),
                    outcome: DetectionOutcome::Format(DictionaryFormat::ChromeOld),
                },
                Detection {
                    path: PathBuf::from("missing.dat"),
                    outcome: DetectionOutcome::Error("I/O error".to_string()),
                },
            ],
        };
        let value = serde_json::to_value(&results).unwrap();
        assert_eq!(value["files"][0]["format"], "chrome-old");
        assert!(value["files"][0].get("error").is_none());
        assert_eq!(value["files"][1]["error"], "I/O error");
        assert!(value["files"][1].get("format").is_none());
    }

    #[test]
    fn test_inspection_lines() {
        let inspection = Inspection {
            path: PathBuf::from("Custom Dictionary.txt"),
            format: DictionaryFormat::ChromeNew,
            word_count: 12,
            checksum_valid: Some(false),
        };
        let lines = inspection.lines();
        assert_eq!(lines[1], "Format: chrome-new");
        assert_eq!(lines[3], "Checksum: mismatch");
    }
}
