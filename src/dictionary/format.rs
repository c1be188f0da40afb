//! The closed set of dictionary formats.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DictSyncError, Result};

/// On-disk dictionary format.
///
/// `Apple` and `Firefox` share the same representation; they are kept apart
/// because they are detected from different signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DictionaryFormat {
    /// Chrome legacy: one comma-separated line, optional CRC32 line.
    ChromeOld,
    /// Chrome modern: one word per line, trailing `checksum_v1 = <md5>`.
    ChromeNew,
    /// Firefox `persdict.dat`: one word per line.
    Firefox,
    /// macOS `LocalDictionary`: same layout as Firefox.
    Apple,
}

impl DictionaryFormat {
    /// Every format, in declaration order.
    pub fn all() -> [DictionaryFormat; 4] {
        [
            DictionaryFormat::ChromeOld,
            DictionaryFormat::ChromeNew,
            DictionaryFormat::Firefox,
            DictionaryFormat::Apple,
        ]
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            DictionaryFormat::ChromeOld => "chrome-old",
            DictionaryFormat::ChromeNew => "chrome-new",
            DictionaryFormat::Firefox => "firefox",
            DictionaryFormat::Apple => "apple",
        }
    }
}

impl fmt::Display for DictionaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DictionaryFormat {
    type Err = DictSyncError;

    /// Accepts the canonical names plus `chrome` (modern Chrome) and
    /// `chrome-legacy` (old Chrome), case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chrome-old" | "chrome-legacy" => Ok(DictionaryFormat::ChromeOld),
            "chrome-new" | "chrome" => Ok(DictionaryFormat::ChromeNew),
            "firefox" => Ok(DictionaryFormat::Firefox),
            "apple" => Ok(DictionaryFormat::Apple),
            _ => Err(DictSyncError::UnknownFormat(s.to_string())),
        }
    }
}
