//! Error types for save decoding.

use thiserror::Error;

use super::format::Section;

/// Reasons a save blob cannot be turned into a record.
///
/// These never escape [`super::decode`]; they only surface through
/// [`super::try_decode`] for diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    #[error("Save file must be {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Bad magic in {0} section")]
    BadMagic(Section),

    #[error("Checksum mismatch in {section} section: stored {stored:#010x}, computed {computed:#010x}")]
    ChecksumMismatch {
        section: Section,
        stored: u32,
        computed: u32,
    },

    #[error("Read of {len} bytes at {offset:#x} runs past the {section} section")]
    OutOfRange {
        section: Section,
        offset: usize,
        len: usize,
    },

    #[error("No checkpoint slot has all completion flags set")]
    NoCompletedSlot,

    #[error("Haruhi meter value {0} is out of range")]
    MeterOutOfRange(i32),
}
