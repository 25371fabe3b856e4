//! Word-addressed memories.
//!
//! This module implements the two memory ports of the datapath:
//! 1. **Program Memory:** Instruction words, read as unsigned bit patterns.
//! 2. **Data Memory:** Data words, read as signed values.
//!
//! Both are fixed-capacity word arrays addressed by byte address. An address
//! must be a multiple of the word size and its word index must fall inside
//! capacity; anything else is a fault, never a truncation. Storage is
//! bit-identical between the two; only the read interpretation differs.

use crate::common::constants::WORD_BYTES;
use crate::common::error::Fault;

/// Data memory (signed word store).
pub mod data;

/// Program memory (instruction word store).
pub mod program;

pub use data::DataMemory;
pub use program::ProgramMemory;

/// Translates a byte address into a word index, enforcing alignment and bounds.
///
/// # Arguments
///
/// * `address` - Byte address of the access.
/// * `capacity` - Number of words in the target memory.
///
/// # Errors
///
/// [`Fault::MisalignedAddress`] when `address` is not a multiple of 4, then
/// [`Fault::AddressOutOfRange`] when the word index is not below `capacity`.
pub(crate) fn word_index(address: u32, capacity: usize) -> Result<usize, Fault> {
    if address % WORD_BYTES != 0 {
        return Err(Fault::MisalignedAddress(address));
    }

    let index = (address / WORD_BYTES) as usize;
    if index >= capacity {
        return Err(Fault::AddressOutOfRange(address));
    }

    Ok(index)
}
