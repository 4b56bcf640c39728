//! Builders for synthetic save blobs.
//!
//! Used by the test suites and handy for tooling that needs a well-formed
//! save without the game.
//!
//! ```ignore
//! use choku_wrapped::save::fixture::SlotBuilder;
//!
//! let bytes = SlotBuilder::completed().flags(&[4315]).into_save();
//! assert!(choku_wrapped::decode(&bytes).is_valid);
//! ```

use super::format::{
    CHECKPOINT_SLOTS, CHECKSUM_START, FLAGS_OFFSET, FOOTER_LEN, FOOTER_OFFSET, MAGIC,
    METER_OFFSET, SAVE_FILE_LEN, SECTION_LEN, TIME_OFFSET,
};
use super::rules::COMPLETION_FLAGS;

/// Builds one checkpoint slot.
#[derive(Debug, Clone)]
pub struct SlotBuilder {
    time: [u8; 7],
    flags: Vec<u16>,
    footer: [i32; FOOTER_LEN],
    meter: i32,
}

impl Default for SlotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotBuilder {
    pub fn new() -> Self {
        let [lo, hi] = 2024u16.to_le_bytes();
        Self {
            time: [lo, hi, 6, 1, 12, 0, 0],
            flags: Vec::new(),
            footer: [0; FOOTER_LEN],
            meter: 0,
        }
    }

    /// A slot with every completion flag set.
    pub fn completed() -> Self {
        Self::new().flags(COMPLETION_FLAGS)
    }

    pub fn saved_at(mut self, year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        let [lo, hi] = year.to_le_bytes();
        self.time = [lo, hi, month, day, hour, minute, second];
        self
    }

    pub fn flag(mut self, flag: u16) -> Self {
        self.flags.push(flag);
        self
    }

    pub fn flags(mut self, flags: &[u16]) -> Self {
        self.flags.extend_from_slice(flags);
        self
    }

    pub fn footer(mut self, footer: [i32; FOOTER_LEN]) -> Self {
        self.footer = footer;
        self
    }

    /// Set the first five footer values (the friendship levels).
    pub fn friendship(mut self, levels: [i32; 5]) -> Self {
        for (value, level) in self.footer.iter_mut().zip(levels) {
            *value = level;
        }
        self
    }

    pub fn meter(mut self, raw: i32) -> Self {
        self.meter = raw;
        self
    }

    /// A whole save with this slot in checkpoint 0.
    pub fn into_save(self) -> Vec<u8> {
        SaveBuilder::new().checkpoint(0, self).build()
    }

    fn write(&self, section: &mut [u8]) {
        put(section, TIME_OFFSET, &self.time);
        for &flag in &self.flags {
            let flag = usize::from(flag);
            if let Some(byte) = section.get_mut(FLAGS_OFFSET + flag / 8) {
                *byte |= 1 << (flag % 8);
            }
        }
        for (i, value) in self.footer.iter().enumerate() {
            put(section, FOOTER_OFFSET + i * 4, &value.to_le_bytes());
        }
        put(section, METER_OFFSET, &self.meter.to_le_bytes());
        seal(section);
    }
}

/// Builds a full save blob.
#[derive(Debug, Clone, Default)]
pub struct SaveBuilder {
    checkpoints: [Option<SlotBuilder>; CHECKPOINT_SLOTS],
}

impl SaveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill checkpoint `index`; indices past the last slot are ignored.
    pub fn checkpoint(mut self, index: usize, slot: SlotBuilder) -> Self {
        if let Some(checkpoint) = self.checkpoints.get_mut(index) {
            *checkpoint = Some(slot);
        }
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; SAVE_FILE_LEN];
        let (common, rest) = bytes.split_at_mut(SECTION_LEN);
        put(common, CHECKSUM_START, &[0x01]);
        seal(common);

        for (slot, section) in self.checkpoints.iter().zip(rest.chunks_exact_mut(SECTION_LEN)) {
            if let Some(slot) = slot {
                slot.write(section);
            }
        }
        bytes
    }
}

fn put(section: &mut [u8], at: usize, bytes: &[u8]) {
    if let Some(dst) = section.get_mut(at..at + bytes.len()) {
        dst.copy_from_slice(bytes);
    }
}

/// Write magic and checksum for a section.
fn seal(section: &mut [u8]) {
    put(section, 0, MAGIC);
    let checksum = crc32fast::hash(section.get(CHECKSUM_START..).unwrap_or_default());
    put(section, 4, &checksum.to_le_bytes());
}
