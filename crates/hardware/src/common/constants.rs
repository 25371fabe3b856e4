//! System-wide constants.
//!
//! Word geometry and default sizing shared by the memories, the program
//! counter, and the assembler's address assignment.

/// Size of one machine word in bytes.
///
/// RV32I is word-oriented here: the program counter advances by this amount
/// and every memory access is aligned to it.
pub const WORD_BYTES: u32 = 4;

/// Number of general-purpose registers (`x0`-`x31`).
pub const NUM_REGISTERS: usize = 32;

/// Default capacity of program memory, in words (4 KiB).
pub const DEFAULT_PROGRAM_WORDS: usize = 1024;

/// Default capacity of data memory, in words (4 KiB).
pub const DEFAULT_DATA_WORDS: usize = 1024;

/// Reset value of the program counter.
pub const RESET_PC: u32 = 0;
