//! Save container layout.
//!
//! A save blob is exactly [`SAVE_FILE_LEN`] bytes split into four
//! [`SECTION_LEN`]-byte sections: common data, two checkpoint slots and a
//! quick-save slot. Every section opens with the `SAVE` magic and a CRC-32 of
//! the rest of the section. Integers are little-endian.
//!
//! Checkpoint slot body:
//!
//! | Offset  | Size  | Field                                  |
//! |---------|-------|----------------------------------------|
//! | `0x08`  | 2     | save year                              |
//! | `0x0A`  | 5     | month, day, hour, minute, second       |
//! | `0x10`  | 0x280 | flag bitfield, LSB first               |
//! | `0x290` | 32    | footer, eight `i32`                    |
//! | `0x2B0` | 4     | raw Haruhi meter, `i32`                |
//!
//! Only the checkpoint slots are read; the quick-save slot never holds a
//! finished playthrough.

use std::fmt;

use super::error::SaveError;

/// Total size of a save blob.
pub const SAVE_FILE_LEN: usize = 0x2000;

/// Size of each section within the blob.
pub const SECTION_LEN: usize = 0x800;

/// Number of checkpoint slots.
pub const CHECKPOINT_SLOTS: usize = 2;

/// Section magic.
pub const MAGIC: &[u8; 4] = b"SAVE";

/// First byte covered by the section checksum.
pub const CHECKSUM_START: usize = 0x08;

pub const TIME_OFFSET: usize = 0x08;
pub const FLAGS_OFFSET: usize = 0x10;
pub const FLAG_BYTES: usize = 0x280;
pub const FOOTER_OFFSET: usize = 0x290;
pub const FOOTER_LEN: usize = 8;
pub const METER_OFFSET: usize = 0x2B0;

/// Number of addressable flags per slot.
pub const FLAG_COUNT: usize = FLAG_BYTES * 8;

/// Anything a flag can be tested against.
pub trait FlagSource {
    /// Whether flag `index` is set. Indices past the end read as unset.
    fn is_flag_set(&self, index: u16) -> bool;
}

/// Identifies a section in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Common,
    Checkpoint(usize),
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Common => f.write_str("common"),
            Section::Checkpoint(n) => write!(f, "checkpoint {}", n),
        }
    }
}

/// Wall-clock time a slot was written. Field order gives chronological `Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct SaveTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// A decoded checkpoint slot.
#[derive(Debug, Clone)]
pub struct SaveSlot {
    index: usize,
    saved_at: SaveTime,
    flags: Vec<u8>,
    footer: [i32; FOOTER_LEN],
    haruhi_meter: i32,
}

impl SaveSlot {
    fn parse(index: usize, data: &[u8]) -> Result<Self, SaveError> {
        let section = Section::Checkpoint(index);
        let reader = SectionReader { section, data };

        let saved_at = SaveTime {
            year: reader.u16_at(TIME_OFFSET)?,
            month: reader.u8_at(TIME_OFFSET + 2)?,
            day: reader.u8_at(TIME_OFFSET + 3)?,
            hour: reader.u8_at(TIME_OFFSET + 4)?,
            minute: reader.u8_at(TIME_OFFSET + 5)?,
            second: reader.u8_at(TIME_OFFSET + 6)?,
        };

        let flags = reader.bytes(FLAGS_OFFSET, FLAG_BYTES)?.to_vec();

        let mut footer = [0i32; FOOTER_LEN];
        for (i, value) in footer.iter_mut().enumerate() {
            *value = reader.i32_at(FOOTER_OFFSET + i * 4)?;
        }

        let haruhi_meter = reader.i32_at(METER_OFFSET)?;

        Ok(Self {
            index,
            saved_at,
            flags,
            footer,
            haruhi_meter,
        })
    }

    /// Position of this slot among the checkpoint slots.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn saved_at(&self) -> SaveTime {
        self.saved_at
    }

    pub fn footer(&self) -> &[i32; FOOTER_LEN] {
        &self.footer
    }

    /// Raw meter value as stored, before any scaling.
    pub fn haruhi_meter(&self) -> i32 {
        self.haruhi_meter
    }

    /// Whether every flag in `flags` is set.
    pub fn all_set(&self, flags: &[u16]) -> bool {
        flags.iter().all(|&flag| self.is_flag_set(flag))
    }
}

impl FlagSource for SaveSlot {
    fn is_flag_set(&self, index: u16) -> bool {
        let index = usize::from(index);
        self.flags
            .get(index / 8)
            .is_some_and(|byte| byte & (1 << (index % 8)) != 0)
    }
}

/// A parsed save blob.
#[derive(Debug, Clone)]
pub struct SaveFile {
    checkpoints: Vec<SaveSlot>,
}

impl SaveFile {
    /// Parse and validate a full save blob.
    ///
    /// Unused checkpoint slots (all-zero magic) are skipped. Any other
    /// structural problem fails the whole blob.
    pub fn parse(data: &[u8]) -> Result<Self, SaveError> {
        if data.len() != SAVE_FILE_LEN {
            return Err(SaveError::InvalidLength {
                expected: SAVE_FILE_LEN,
                actual: data.len(),
            });
        }

        let mut sections = data.chunks_exact(SECTION_LEN);
        let common = sections.next().ok_or(SaveError::OutOfRange {
            section: Section::Common,
            offset: 0,
            len: SECTION_LEN,
        })?;
        verify_section(Section::Common, common)?;

        let mut checkpoints = Vec::with_capacity(CHECKPOINT_SLOTS);
        for (index, section) in sections.take(CHECKPOINT_SLOTS).enumerate() {
            if section.get(..MAGIC.len()).is_some_and(|m| m.iter().all(|&b| b == 0)) {
                continue;
            }
            verify_section(Section::Checkpoint(index), section)?;
            checkpoints.push(SaveSlot::parse(index, section)?);
        }

        Ok(Self { checkpoints })
    }

    /// Checkpoint slots that hold data, in slot order.
    pub fn checkpoints(&self) -> &[SaveSlot] {
        &self.checkpoints
    }

    /// The most recently saved checkpoint with every `completion` flag set.
    ///
    /// Ties on save time go to the lower slot index.
    pub fn latest_completed(&self, completion: &[u16]) -> Option<&SaveSlot> {
        self.checkpoints
            .iter()
            .filter(|slot| slot.all_set(completion))
            .fold(None, |best: Option<&SaveSlot>, slot| match best {
                Some(current) if current.saved_at >= slot.saved_at => Some(current),
                _ => Some(slot),
            })
    }
}

/// Check the magic and checksum of one section.
fn verify_section(section: Section, data: &[u8]) -> Result<(), SaveError> {
    let reader = SectionReader { section, data };

    if reader.bytes(0, MAGIC.len())? != MAGIC {
        return Err(SaveError::BadMagic(section));
    }

    let stored = reader.u32_at(4)?;
    let computed = crc32fast::hash(reader.bytes(CHECKSUM_START, SECTION_LEN - CHECKSUM_START)?);
    if stored != computed {
        return Err(SaveError::ChecksumMismatch {
            section,
            stored,
            computed,
        });
    }

    Ok(())
}

/// Bounds-checked little-endian reads within a section.
struct SectionReader<'a> {
    section: Section,
    data: &'a [u8],
}

impl<'a> SectionReader<'a> {
    fn bytes(&self, offset: usize, len: usize) -> Result<&'a [u8], SaveError> {
        offset
            .checked_add(len)
            .and_then(|end| self.data.get(offset..end))
            .ok_or(SaveError::OutOfRange {
                section: self.section,
                offset,
                len,
            })
    }

    fn array<const N: usize>(&self, offset: usize) -> Result<[u8; N], SaveError> {
        let bytes = self.bytes(offset, N)?;
        bytes.try_into().map_err(|_| SaveError::OutOfRange {
            section: self.section,
            offset,
            len: N,
        })
    }

    fn u8_at(&self, offset: usize) -> Result<u8, SaveError> {
        Ok(u8::from_le_bytes(self.array(offset)?))
    }

    fn u16_at(&self, offset: usize) -> Result<u16, SaveError> {
        Ok(u16::from_le_bytes(self.array(offset)?))
    }

    fn u32_at(&self, offset: usize) -> Result<u32, SaveError> {
        Ok(u32::from_le_bytes(self.array(offset)?))
    }

    fn i32_at(&self, offset: usize) -> Result<i32, SaveError> {
        Ok(i32::from_le_bytes(self.array(offset)?))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::save::fixture::{SaveBuilder, SlotBuilder};

    #[test]
    fn test_rejects_wrong_length() {
        let err = SaveFile::parse(&[0u8; 100]).unwrap_err();
        assert_eq!(
            err,
            SaveError::InvalidLength {
                expected: SAVE_FILE_LEN,
                actual: 100
            }
        );
    }

    #[test]
    fn test_rejects_blank_common_section() {
        let err = SaveFile::parse(&[0u8; SAVE_FILE_LEN]).unwrap_err();
        assert_eq!(err, SaveError::BadMagic(Section::Common));
    }

    #[test]
    fn test_detects_corruption() {
        let mut bytes = SaveBuilder::new()
            .checkpoint(0, SlotBuilder::completed())
            .build();
        bytes[SECTION_LEN + FLAGS_OFFSET + 3] ^= 0xFF;

        match SaveFile::parse(&bytes) {
            Err(SaveError::ChecksumMismatch { section, .. }) => {
                assert_eq!(section, Section::Checkpoint(0));
            }
            other => panic!("expected checksum mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_skips_unused_slots() {
        let bytes = SaveBuilder::new()
            .checkpoint(1, SlotBuilder::completed())
            .build();
        let save = SaveFile::parse(&bytes).unwrap();
        assert_eq!(save.checkpoints().len(), 1);
        assert_eq!(save.checkpoints()[0].index(), 1);
    }

    #[test]
    fn test_reads_slot_fields() {
        let bytes = SaveBuilder::new()
            .checkpoint(
                0,
                SlotBuilder::new()
                    .saved_at(2024, 12, 31, 23, 59, 58)
                    .flag(0)
                    .flag(4628)
                    .footer([1, -2, 3, 4, 5, 6, 7, 8])
                    .meter(7),
            )
            .build();
        let save = SaveFile::parse(&bytes).unwrap();
        let slot = &save.checkpoints()[0];

        assert_eq!(
            slot.saved_at(),
            SaveTime {
                year: 2024,
                month: 12,
                day: 31,
                hour: 23,
                minute: 59,
                second: 58
            }
        );
        assert!(slot.is_flag_set(0));
        assert!(slot.is_flag_set(4628));
        assert!(!slot.is_flag_set(4627));
        assert_eq!(slot.footer(), &[1, -2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(slot.haruhi_meter(), 7);
    }

    #[test]
    fn test_flags_past_bitfield_read_unset() {
        let bytes = SaveBuilder::new()
            .checkpoint(0, SlotBuilder::completed())
            .build();
        let save = SaveFile::parse(&bytes).unwrap();
        assert!(!save.checkpoints()[0].is_flag_set(u16::MAX));
    }

    #[test]
    fn test_latest_completed_prefers_newest() {
        let bytes = SaveBuilder::new()
            .checkpoint(0, SlotBuilder::completed().saved_at(2024, 1, 2, 0, 0, 0).meter(1))
            .checkpoint(1, SlotBuilder::completed().saved_at(2024, 1, 1, 0, 0, 0).meter(2))
            .build();
        let save = SaveFile::parse(&bytes).unwrap();
        let slot = save.latest_completed(&[4379]).unwrap();
        assert_eq!(slot.index(), 0);
    }

    #[test]
    fn test_latest_completed_ignores_unfinished_slots() {
        let bytes = SaveBuilder::new()
            .checkpoint(0, SlotBuilder::completed().saved_at(2023, 1, 1, 0, 0, 0))
            .checkpoint(1, SlotBuilder::new().saved_at(2025, 1, 1, 0, 0, 0))
            .build();
        let save = SaveFile::parse(&bytes).unwrap();
        let slot = save.latest_completed(&[4379, 4628]).unwrap();
        assert_eq!(slot.index(), 0);
    }

    #[test]
    fn test_latest_completed_tie_goes_to_first_slot() {
        let bytes = SaveBuilder::new()
            .checkpoint(0, SlotBuilder::completed())
            .checkpoint(1, SlotBuilder::completed())
            .build();
        let save = SaveFile::parse(&bytes).unwrap();
        assert_eq!(save.latest_completed(&[4379]).unwrap().index(), 0);
    }
}
