//! General-purpose register file.
//!
//! This module implements the 32-entry register file of the datapath. It
//! performs the following:
//! 1. **Storage:** Maintains 32 signed word registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** Register `x0` reads as zero no matter what
//!    bits are stored, and writes to it are silently ignored.
//! 3. **Snapshots:** Export and import of the complete register state.
//!
//! The register file is owned exclusively by the execution engine and is
//! mutated only in its write-back stage.

use crate::common::constants::NUM_REGISTERS;
use crate::common::error::Fault;
use crate::isa::abi;
use crate::state::RegisterState;

/// The 32 general-purpose registers.
///
/// Values are signed words; writes wrap at 32 bits by construction of the
/// `i32` representation.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    regs: [i32; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a register file with every register initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Reads one register.
    ///
    /// # Arguments
    ///
    /// * `index` - Register index (0-31). Register `x0` always reads 0.
    ///
    /// # Errors
    ///
    /// [`Fault::RegisterIndex`] when `index` is outside the file.
    pub fn read(&self, index: usize) -> Result<i32, Fault> {
        if index >= NUM_REGISTERS {
            return Err(Fault::RegisterIndex(index));
        }

        Ok(if index == abi::REG_ZERO {
            0
        } else {
            self.regs[index]
        })
    }

    /// Reads both source registers of an instruction in one call.
    ///
    /// # Arguments
    ///
    /// * `rs1` - First source register index.
    /// * `rs2` - Second source register index.
    ///
    /// # Errors
    ///
    /// [`Fault::RegisterIndex`] when either index is outside the file.
    pub fn read_pair(&self, rs1: usize, rs2: usize) -> Result<(i32, i32), Fault> {
        Ok((self.read(rs1)?, self.read(rs2)?))
    }

    /// Writes one register.
    ///
    /// Writes to `x0` are silently ignored: the register is hardwired to
    /// zero and ignoring the write models the missing write port, so this is
    /// not an error.
    ///
    /// # Arguments
    ///
    /// * `index` - Register index (0-31).
    /// * `value` - The signed word to store.
    ///
    /// # Returns
    ///
    /// `Ok(true)` when the register was written, `Ok(false)` for `x0`.
    ///
    /// # Errors
    ///
    /// [`Fault::RegisterIndex`] when `index` is outside the file.
    pub fn write(&mut self, index: usize, value: i32) -> Result<bool, Fault> {
        if index >= NUM_REGISTERS {
            return Err(Fault::RegisterIndex(index));
        }

        if index == abi::REG_ZERO {
            tracing::trace!(value, "ignored write to x0");
            return Ok(false);
        }

        self.regs[index] = value;
        Ok(true)
    }

    /// Resets every register to zero.
    pub fn reset(&mut self) {
        self.regs = [0; NUM_REGISTERS];
    }

    /// Exports the complete register contents as a snapshot.
    pub fn export(&self) -> RegisterState {
        RegisterState {
            registers: self.regs,
        }
    }

    /// Imports a snapshot previously produced by [`Self::export`].
    ///
    /// The `x0` slot of the snapshot is discarded; the register stays zero.
    pub fn import(&mut self, state: &RegisterState) {
        self.regs = state.registers;
        self.regs[abi::REG_ZERO] = 0;
    }

    /// Dumps the contents of all registers to stdout.
    ///
    /// Displays registers in pairs with their ABI names and hexadecimal
    /// values for debugging.
    pub fn dump(&self) {
        for i in (0..NUM_REGISTERS).step_by(2) {
            println!(
                "x{:<2} ({:>4}) = {:#010x}   x{:<2} ({:>4}) = {:#010x}",
                i,
                abi::NAMES[i],
                self.regs[i] as u32,
                i + 1,
                abi::NAMES[i + 1],
                self.regs[i + 1] as u32,
            );
        }
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
