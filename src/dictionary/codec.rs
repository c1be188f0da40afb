//! Reading and writing dictionaries in each supported format.
//!
//! The pure halves, [`decode`] and [`encode`], work on text in memory; the
//! file halves, [`read_dictionary`] and [`write_dictionary`], open the file
//! exactly once and attach the path to any I/O error. Reads never fail on
//! empty input and never validate checksums.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::dictionary::detect::detect_with_content;
use crate::dictionary::format::DictionaryFormat;
use crate::dictionary::words::WordSet;
use crate::error::{DictSyncError, Result};

/// Prefix of the trailing line in a modern Chrome dictionary.
pub const CHECKSUM_V1_PREFIX: &str = "checksum_v1 = ";

/// Parse dictionary text in the given format.
pub fn decode(format: DictionaryFormat, text: &str) -> WordSet {
    match format {
        DictionaryFormat::Firefox | DictionaryFormat::Apple => non_blank(text.lines()),
        DictionaryFormat::ChromeNew => {
            let lines: Vec<&str> = text.lines().collect();
            match lines.split_last() {
                Some((_checksum, words)) => non_blank(words.iter().copied()),
                None => WordSet::new(),
            }
        }
        DictionaryFormat::ChromeOld => match text.lines().next() {
            Some(first) => non_blank(first.split(',')),
            None => WordSet::new(),
        },
    }
}

fn non_blank<'a, I: Iterator<Item = &'a str>>(tokens: I) -> WordSet {
    tokens
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Serialize a word set in the given format.
///
/// Output depends only on the set's contents, never on its iteration order.
pub fn encode(format: DictionaryFormat, words: &WordSet) -> String {
    let sorted = words.sorted();
    match format {
        DictionaryFormat::Firefox | DictionaryFormat::Apple => {
            let mut out = String::with_capacity(sorted.iter().map(|w| w.len() + 1).sum());
            for word in sorted {
                out.push_str(word);
                out.push('\n');
            }
            out
        }
        DictionaryFormat::ChromeNew => {
            let mut block = sorted.join("\n");
            block.push('\n');
            let checksum = chrome_new_checksum(&block);
            block.push_str(CHECKSUM_V1_PREFIX);
            block.push_str(&checksum);
            block
        }
        DictionaryFormat::ChromeOld => {
            let line = sorted.join(",");
            let checksum = chrome_old_checksum(&line);
            format!("{line}\n{checksum}")
        }
    }
}

/// Lowercase hex MD5 of a modern Chrome word block (trailing line break included).
pub fn chrome_new_checksum(block: &str) -> String {
    format!("{:x}", md5::compute(block.as_bytes()))
}

/// CRC32 of a legacy Chrome comma-joined line.
pub fn chrome_old_checksum(line: &str) -> u32 {
    crc32fast::hash(line.as_bytes())
}

/// Check a Chrome file's trailing checksum against its content.
///
/// Returns `None` when the format has no checksum or the file carries none.
pub fn verify_checksum(format: DictionaryFormat, text: &str) -> Option<bool> {
    match format {
        DictionaryFormat::Firefox | DictionaryFormat::Apple => None,
        DictionaryFormat::ChromeNew => {
            let body = text.trim_end_matches(['\r', '\n']);
            let (block, last) = match body.rfind('\n') {
                Some(idx) => (&body[..=idx], &body[idx + 1..]),
                None => ("", body),
            };
            let stored = last.trim().strip_prefix(CHECKSUM_V1_PREFIX)?;
            Some(stored.trim() == chrome_new_checksum(block))
        }
        DictionaryFormat::ChromeOld => {
            let mut lines = text.lines();
            let line = lines.next()?;
            let stored: u32 = lines.next()?.trim().parse().ok()?;
            Some(stored == chrome_old_checksum(line))
        }
    }
}

/// Read a dictionary file whose format is already known.
pub fn read_dictionary<P: AsRef<Path>>(format: DictionaryFormat, path: P) -> Result<WordSet> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| DictSyncError::io(path, e))?;
    let words = decode(format, &text);
    debug!("Read {} words from {} ({format})", words.len(), path.display());
    Ok(words)
}

/// Write a word set to `path` in the given format, replacing any existing file.
pub fn write_dictionary<P: AsRef<Path>>(
    format: DictionaryFormat,
    words: &WordSet,
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    let encoded = encode(format, words);

    let file = File::create(path).map_err(|e| DictSyncError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(encoded.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| DictSyncError::io(path, e))?;

    debug!("Wrote {} words to {} ({format})", words.len(), path.display());
    Ok(())
}

/// A dictionary file paired with its detected format.
///
/// Consumed by [`DictionaryFile::read_words`]; content read during detection
/// is reused instead of opening the file again.
#[derive(Debug)]
pub struct DictionaryFile {
    path: PathBuf,
    format: DictionaryFormat,
    content: Option<String>,
}

impl DictionaryFile {
    /// Detect the format of the file at `path`.
    pub fn detect<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let (format, content) = detect_with_content(path)?;
        Ok(DictionaryFile {
            path: path.to_path_buf(),
            format,
            content,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> DictionaryFormat {
        self.format
    }

    /// The file's text, reusing what detection already read.
    pub fn into_text(self) -> Result<String> {
        match self.content {
            Some(text) => Ok(text),
            None => {
                fs::read_to_string(&self.path).map_err(|e| DictSyncError::io(&self.path, e))
            }
        }
    }

    /// Parse the file's words.
    pub fn read_words(self) -> Result<WordSet> {
        let format = self.format;
        let text = self.into_text()?;
        Ok(decode(format, &text))
    }
}
