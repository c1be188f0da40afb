//! Personal dictionary formats.
//!
//! This module classifies dictionary files produced by browsers and the
//! operating system, parses them into a [`WordSet`], and serializes word sets
//! back into any of the supported layouts.

pub mod codec;
pub mod detect;
pub mod format;
pub mod words;

pub use codec::*;
pub use detect::*;
pub use format::*;
pub use words::*;
