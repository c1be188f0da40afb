//! # dictsync
//!
//! Locate, parse and merge personal spell-checker dictionaries.
//!
//! ## Features
//!
//! - Format detection for Chrome (legacy and modern), Firefox and Apple files
//! - Lossless read and deterministic write of every format, checksums included
//! - Union of any number of dictionaries with per-file failure isolation
//! - Discovery of the dictionaries in well-known profile directories

pub mod cli;
pub mod dictionary;
pub mod discovery;
pub mod error;
pub mod merge;

pub use dictionary::{DictionaryFile, DictionaryFormat, WordSet};
pub use error::{DictSyncError, Result};
pub use merge::{MergeOptions, MergeReport, merge_paths};
