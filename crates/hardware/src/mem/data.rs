//! Data memory.
//!
//! Data words are stored as signed 32-bit values, matching the register
//! file's view of the world. The write port carries a hardware-style enable
//! signal: with the enable low the write is a no-op, not an error.

use super::word_index;
use crate::common::constants::DEFAULT_DATA_WORDS;
use crate::common::error::Fault;
use crate::state::MemoryState;

/// Fixed-capacity signed word store.
#[derive(Clone, Debug)]
pub struct DataMemory {
    words: Vec<i32>,
}

impl DataMemory {
    /// Creates a data memory of `capacity` words, initialized to zero.
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity],
        }
    }

    /// Number of words this memory can hold.
    pub fn capacity(&self) -> usize {
        self.words.len()
    }

    /// Reads the word at a byte address.
    ///
    /// # Arguments
    ///
    /// * `address` - Byte address, must be word-aligned and in range.
    ///
    /// # Errors
    ///
    /// [`Fault::MisalignedAddress`] or [`Fault::AddressOutOfRange`] for an
    /// invalid address; memory contents are never mutated by a failed read.
    pub fn read(&self, address: u32) -> Result<i32, Fault> {
        let index = word_index(address, self.words.len())?;
        Ok(self.words[index])
    }

    /// Writes the word at a byte address, gated by `enable`.
    ///
    /// With `enable == false` this is a no-op returning `Ok(false)`; the
    /// address is not even validated, matching a write port whose enable
    /// line is low.
    ///
    /// # Arguments
    ///
    /// * `address` - Byte address, must be word-aligned and in range.
    /// * `value` - The signed word to store.
    /// * `enable` - The memory-write control signal.
    ///
    /// # Returns
    ///
    /// `Ok(true)` when the word was stored, `Ok(false)` when gated off.
    ///
    /// # Errors
    ///
    /// [`Fault::MisalignedAddress`] or [`Fault::AddressOutOfRange`] for an
    /// invalid address with `enable == true`.
    pub fn write(&mut self, address: u32, value: i32, enable: bool) -> Result<bool, Fault> {
        if !enable {
            return Ok(false);
        }

        let index = word_index(address, self.words.len())?;
        self.words[index] = value;
        Ok(true)
    }

    /// Clears every word to zero.
    pub fn reset(&mut self) {
        self.words.fill(0);
    }

    /// Exports the complete memory contents as a snapshot.
    pub fn export(&self) -> MemoryState {
        MemoryState {
            words: self.words.clone(),
        }
    }

    /// Imports a snapshot previously produced by [`Self::export`].
    ///
    /// # Errors
    ///
    /// [`Fault::StateSizeMismatch`] when the snapshot length differs from
    /// this memory's capacity; contents are unchanged in that case.
    pub fn import(&mut self, state: &MemoryState) -> Result<(), Fault> {
        if state.words.len() != self.words.len() {
            return Err(Fault::StateSizeMismatch {
                expected: self.words.len(),
                actual: state.words.len(),
            });
        }

        self.words.copy_from_slice(&state.words);
        Ok(())
    }
}

impl Default for DataMemory {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_WORDS)
    }
}
