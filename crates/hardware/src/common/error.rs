//! Fault definitions.
//!
//! This module defines the error taxonomy for the datapath model. It provides:
//! 1. **Address Faults:** Misaligned or out-of-range word accesses.
//! 2. **Register Faults:** Register indices outside the architectural file.
//! 3. **Decode Faults:** Instruction encodings outside the supported subset.
//!
//! Every fault is unrecoverable at its origin: the failing component reports
//! and never retries or substitutes a default. Callers treat a fault as fatal
//! for the current run and may reset state before retrying.

use thiserror::Error;

/// A datapath-level failure raised by a memory, the register file, or the decoder.
///
/// Faults propagate unmodified through the execution engine. A fault raised
/// mid-step leaves all state mutations performed before the failing stage in
/// place; there is no rollback.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// A byte address that is not a multiple of the word size.
    ///
    /// Raised before any bounds check. The associated value is the offending
    /// byte address.
    #[error("misaligned word address {0:#010x} (not a multiple of 4)")]
    MisalignedAddress(u32),

    /// An aligned byte address whose word index falls outside memory capacity.
    ///
    /// The associated value is the offending byte address.
    #[error("word address {0:#010x} is outside memory bounds")]
    AddressOutOfRange(u32),

    /// A register index outside `x0`-`x31`.
    #[error("register index {0} is outside x0-x31")]
    RegisterIndex(usize),

    /// An opcode/funct3/funct7 combination outside the supported RV32I subset.
    #[error(
        "unsupported instruction: opcode={opcode:#09b} funct3={funct3:#05b} funct7={funct7:#09b}"
    )]
    UnsupportedInstruction {
        /// Major opcode (bits 6-0) of the rejected encoding.
        opcode: u32,
        /// The funct3 field (bits 14-12) of the rejected encoding.
        funct3: u32,
        /// The funct7 field (bits 31-25) of the rejected encoding.
        funct7: u32,
    },

    /// An imported state snapshot whose length does not match the target.
    #[error("state snapshot has {actual} words, expected {expected}")]
    StateSizeMismatch {
        /// Capacity of the component receiving the import.
        expected: usize,
        /// Length of the offered snapshot.
        actual: usize,
    },
}
