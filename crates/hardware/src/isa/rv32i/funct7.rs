//! RV32I Function Codes (funct7).
//!
//! The funct7 field (bits 31-25) selects between standard and alternate
//! encodings under the same opcode/funct3 pair (ADD vs SUB, SRL vs SRA).

/// Standard encoding (ADD, SRL, and all operations without an alternate form).
pub const BASE: u32 = 0b0000000;

/// Alternate encoding (SUB under ADD_SUB, SRA under SRL_SRA).
pub const ALT: u32 = 0b0100000;
