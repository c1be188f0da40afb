//! Format detection from file name and content shape.
//!
//! Rules are tried in order and the first match wins:
//!
//! 1. base name starting with `LocalDictionary` is an Apple dictionary;
//! 2. a `.dat` extension (any case) is a Firefox dictionary;
//! 3. a `.txt` file is read and classified by [`classify_text`];
//! 4. anything else is unsupported.
//!
//! Only `.txt` files are opened.

use std::fs;
use std::path::Path;

use log::debug;

use crate::dictionary::format::DictionaryFormat;
use crate::error::{DictSyncError, Result};

const APPLE_PREFIX: &str = "LocalDictionary";
const CHECKSUM_MARKER: &str = "checksum";

/// Detect the format of the dictionary at `path`.
pub fn detect<P: AsRef<Path>>(path: P) -> Result<DictionaryFormat> {
    detect_with_content(path.as_ref()).map(|(format, _)| format)
}

/// Detect the format and hand back the content if it had to be read, so the
/// caller does not open the file a second time.
pub(crate) fn detect_with_content(path: &Path) -> Result<(DictionaryFormat, Option<String>)> {
    let base_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    if base_name.starts_with(APPLE_PREFIX) {
        return Ok((DictionaryFormat::Apple, None));
    }

    let lowered = base_name.to_lowercase();
    if lowered.ends_with(".dat") {
        return Ok((DictionaryFormat::Firefox, None));
    }

    if lowered.ends_with(".txt") {
        let text = fs::read_to_string(path).map_err(|e| DictSyncError::io(path, e))?;
        return match classify_text(&text) {
            Some(format) => {
                debug!("{} classified as {format}", path.display());
                Ok((format, Some(text)))
            }
            None => Err(DictSyncError::unsupported(path)),
        };
    }

    Err(DictSyncError::unsupported(path))
}

/// Classify the content of a `.txt` dictionary.
///
/// Returns `None` when the text matches neither Chrome layout.
pub fn classify_text(text: &str) -> Option<DictionaryFormat> {
    let lines: Vec<&str> = text.lines().collect();

    match lines.as_slice() {
        [only] if only.contains(',') => Some(DictionaryFormat::ChromeOld),
        [_, checksum] if is_decimal(checksum.trim()) => Some(DictionaryFormat::ChromeOld),
        [.., last] if last.trim().starts_with(CHECKSUM_MARKER) => {
            Some(DictionaryFormat::ChromeNew)
        }
        _ => None,
    }
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_detect_by_name_does_not_read() {
        let dir = TempDir::new().unwrap();
        // Neither file exists; name rules must not touch the filesystem.
        assert_eq!(
            detect(dir.path().join("persdict.dat")).unwrap(),
            DictionaryFormat::Firefox
        );
        assert_eq!(
            detect(dir.path().join("PERSDICT.DAT")).unwrap(),
            DictionaryFormat::Firefox
        );
        assert_eq!(
            detect(dir.path().join("LocalDictionary")).unwrap(),
            DictionaryFormat::Apple
        );
    }

    #[test]
    fn test_apple_prefix_wins_over_extension() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            detect(dir.path().join("LocalDictionary.dat")).unwrap(),
            DictionaryFormat::Apple
        );
    }

    #[test]
    fn test_detect_chrome_old() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "chrome.txt", "cat,dog\n");
        assert_eq!(detect(&path).unwrap(), DictionaryFormat::ChromeOld);

        let path = write_file(&dir, "legacy.txt", "cat,dog\n123456\n");
        assert_eq!(detect(&path).unwrap(), DictionaryFormat::ChromeOld);
    }

    #[test]
    fn test_detect_chrome_new() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "Custom Dictionary.txt", "cat\ndog\nchecksum_v1 = abc123\n");
        assert_eq!(detect(&path).unwrap(), DictionaryFormat::ChromeNew);
    }

    #[test]
    fn test_detect_unrelated_text_is_unsupported() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "notes.txt", "just some notes\nabout nothing\nin particular\n");
        assert!(matches!(
            detect(&path),
            Err(DictSyncError::UnsupportedFormat { .. })
        ));

        let path = write_file(&dir, "empty.txt", "");
        assert!(matches!(
            detect(&path),
            Err(DictSyncError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_detect_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "words.csv", "cat,dog\n");
        assert!(matches!(
            detect(&path),
            Err(DictSyncError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_detect_missing_txt_is_io_failure() {
        let dir = TempDir::new().unwrap();
        let result = detect(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(DictSyncError::Io { .. })));
    }

    #[test]
    fn test_classify_text_shapes() {
        assert_eq!(classify_text("a,b"), Some(DictionaryFormat::ChromeOld));
        assert_eq!(classify_text("a,b\r\n42"), Some(DictionaryFormat::ChromeOld));
        assert_eq!(classify_text("\n0"), Some(DictionaryFormat::ChromeOld));
        assert_eq!(
            classify_text("\nchecksum_v1 = 68b329da9893e34099c7d8ad5cb9c940"),
            Some(DictionaryFormat::ChromeNew)
        );
        // A lone word has neither a comma nor a checksum line.
        assert_eq!(classify_text("word\n"), None);
        assert_eq!(classify_text("a\nb\nc\n"), None);
        assert_eq!(classify_text(""), None);
    }
}
